//! Power menu overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::styles;

pub struct PowerMenu;

impl Widget for PowerMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal_overlay::open_panel(buf, area, 28, 7, "Power");
        let entry = |key: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!(" {:<4}", key), styles::keybinding()),
                Span::styled(label, styles::text_primary()),
            ])
        };
        let lines = vec![
            Line::from(""),
            entry("o", "Power off"),
            entry("r", "Restart"),
            entry("esc", "Cancel"),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
