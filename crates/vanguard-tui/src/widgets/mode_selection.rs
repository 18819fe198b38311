//! Form factor picker, shown once per process

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_core::DeviceMode;

use crate::theme::styles;

use super::modal_overlay::centered_rect;

const OPTIONS: [(DeviceMode, &str, &str, &str); 2] = [
    (DeviceMode::Handheld, "1", "Handheld", "Portrait phone layout"),
    (DeviceMode::Laptop, "2", "Laptop", "Full-width desktop layout"),
];

pub struct ModeSelection {
    cursor: usize,
}

impl ModeSelection {
    pub fn new(cursor: usize) -> Self {
        Self { cursor }
    }
}

impl Widget for ModeSelection {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = centered_rect(56, 9, area);
        let [title_area, cards_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(7)]).areas(body);

        Paragraph::new(Line::from(Span::styled(
            "Choose your device",
            styles::accent_bold(),
        )))
        .alignment(Alignment::Center)
        .render(title_area, buf);

        let cards = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .split(cards_area);

        for (i, (mode, key, name, blurb)) in OPTIONS.iter().enumerate() {
            let focused = i == self.cursor;
            let block = styles::glass_block(focused);
            let inner = block.inner(cards[i]);
            block.render(cards[i], buf);

            let name_style = if focused {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            let lines = vec![
                Line::from(Span::styled(format!(" {} ", name), name_style)),
                Line::from(Span::styled(*blurb, styles::text_muted())),
                Line::from(""),
                Line::from(vec![
                    Span::styled(*key, styles::keybinding()),
                    Span::styled(format!(" {}", mode), styles::text_muted()),
                ]),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_both_modes_listed() {
        let mut term = TestTerminal::new();
        term.render_widget(ModeSelection::new(0), term.area());
        assert!(term.buffer_contains("Choose your device"));
        assert!(term.buffer_contains("Handheld"));
        assert!(term.buffer_contains("Laptop"));
    }
}
