//! Status bar widget
//!
//! Time on the left; frame rate, memory, connectivity and battery on the
//! right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::ShellContext;
use vanguard_core::{clock, DeviceMode, InternetMode};

use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    ctx: ShellContext<'a>,
}

impl<'a> StatusBar<'a> {
    pub fn new(ctx: ShellContext<'a>) -> Self {
        Self { ctx }
    }

    fn clock(&self) -> Line<'static> {
        let now = self.ctx.now();
        let mut spans = vec![Span::styled(
            format!(" {}", clock::format_time(&now)),
            styles::text_primary(),
        )];
        if self.ctx.device_mode() == DeviceMode::Laptop {
            spans.push(Span::styled(
                format!("  {}", clock::format_date(&now)),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn connectivity(&self) -> Span<'static> {
        let settings = self.ctx.settings();
        if settings.airplane_mode {
            return Span::styled("✈", styles::status_yellow());
        }
        match settings.internet_mode {
            InternetMode::Off => Span::styled("Offline", styles::text_muted()),
            mode => Span::styled(mode.label(), styles::text_secondary()),
        }
    }

    fn battery(&self) -> Span<'static> {
        let level = self.ctx.battery_level();
        let charging = self.ctx.is_charging();
        let text = if charging {
            format!("⚡{}% ", level)
        } else {
            format!("{}% ", level)
        };
        Span::styled(text, styles::battery(level, charging))
    }

    fn metrics(&self) -> Vec<Span<'static>> {
        let ram = self.ctx.ram_usage_percent();
        let (used, total) = (self.ctx.used_ram_mb(), self.ctx.total_ram_mb());
        vec![
            Span::styled(format!("{} FPS", self.ctx.fps()), styles::text_muted()),
            Span::raw("  "),
            Span::styled(format!("RAM {}/{}MB", used, total), styles::pressure(ram)),
            Span::raw("  "),
        ]
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        Paragraph::new(self.clock()).render(area, buf);

        let mut right = self.metrics();
        if self.ctx.has_unread_update() {
            right.push(Span::styled("⇩ ", styles::accent()));
        }
        right.push(self.connectivity());
        right.push(Span::raw("  "));
        right.push(self.battery());

        Paragraph::new(Line::from(right))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::{Local, TimeZone};
    use vanguard_app::AppState;

    fn state() -> AppState {
        let mut state = AppState::new();
        state.now = Local.with_ymd_and_hms(2026, 1, 5, 21, 30, 0).unwrap();
        state
    }

    #[test]
    fn test_shows_time_battery_and_ram() {
        let state = state();
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(state.context()), term.area());

        assert!(term.buffer_contains("9:30PM"));
        assert!(term.buffer_contains("100%"));
        assert!(term.buffer_contains("RAM 50/80MB"));
        assert!(term.buffer_contains("Wi-Fi"));
    }

    #[test]
    fn test_airplane_mode_icon() {
        let mut state = state();
        state.settings.airplane_mode = true;
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(state.context()), term.area());
        assert!(term.buffer_contains("✈"));
        assert!(!term.buffer_contains("Wi-Fi"));
    }

    #[test]
    fn test_charging_indicator() {
        let mut state = state();
        state.battery.set_charging(true);
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(StatusBar::new(state.context()), term.area());
        assert!(term.buffer_contains("⚡"));
        assert!(term.buffer_contains("100%"));
    }
}
