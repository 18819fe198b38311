//! Lock screen: clock, date and PIN entry

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::PinPad;
use vanguard_core::clock;

use crate::theme::styles;

use super::modal_overlay::centered_rect;

pub struct LockScreen<'a> {
    now: DateTime<Local>,
    pin_pad: &'a PinPad,
    notification_count: usize,
}

impl<'a> LockScreen<'a> {
    pub fn new(now: DateTime<Local>, pin_pad: &'a PinPad) -> Self {
        Self {
            now,
            pin_pad,
            notification_count: 0,
        }
    }

    pub fn notification_count(mut self, count: usize) -> Self {
        self.notification_count = count;
        self
    }

    fn pin_dots(&self) -> Line<'static> {
        let style = if self.pin_pad.is_shaking() {
            styles::status_red()
        } else {
            styles::accent()
        };
        let dots: Vec<&str> = (0..self.pin_pad.pin_len())
            .map(|i| if i < self.pin_pad.entered() { "●" } else { "○" })
            .collect();
        Line::from(Span::styled(dots.join(" "), style))
    }
}

impl Widget for LockScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                clock::format_time(&self.now),
                styles::accent_bold(),
            )),
            Line::from(Span::styled(clock::format_date(&self.now), styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled(
                "Enter PIN",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            self.pin_dots(),
        ];

        if self.pin_pad.is_shaking() {
            lines.push(Line::from(Span::styled("Wrong PIN", styles::status_red())));
        } else {
            lines.push(Line::from(""));
        }

        if self.notification_count > 0 {
            let noun = if self.notification_count == 1 {
                "notification"
            } else {
                "notifications"
            };
            lines.push(Line::from(Span::styled(
                format!("{} {}", self.notification_count, noun),
                styles::text_secondary(),
            )));
        }

        let rect = centered_rect(area.width, lines.len() as u16, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::TimeZone;

    fn monday_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 5, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_shows_time_and_date() {
        let pad = PinPad::new("1992");
        let mut term = TestTerminal::new();
        term.render_widget(LockScreen::new(monday_morning(), &pad), term.area());

        assert!(term.buffer_contains("9:05AM"));
        assert!(term.buffer_contains("Monday, January 5"));
        assert!(term.buffer_contains("○ ○ ○ ○"));
    }

    #[test]
    fn test_dots_follow_entry() {
        let mut pad = PinPad::new("1992");
        pad.push_digit('1');
        pad.push_digit('9');

        let mut term = TestTerminal::new();
        term.render_widget(LockScreen::new(monday_morning(), &pad), term.area());
        assert!(term.buffer_contains("● ● ○ ○"));
    }

    #[test]
    fn test_wrong_pin_message() {
        let mut pad = PinPad::new("12");
        pad.push_digit('3');
        pad.push_digit('4');

        let mut term = TestTerminal::new();
        term.render_widget(LockScreen::new(monday_morning(), &pad), term.area());
        assert!(term.buffer_contains("Wrong PIN"));
    }

    #[test]
    fn test_notification_count() {
        let pad = PinPad::new("1992");
        let mut term = TestTerminal::new();
        term.render_widget(
            LockScreen::new(monday_morning(), &pad).notification_count(2),
            term.area(),
        );
        assert!(term.buffer_contains("2 notifications"));
    }
}
