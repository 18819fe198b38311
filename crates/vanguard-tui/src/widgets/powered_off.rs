//! Powered-off screen with the charger toggle

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

pub struct PoweredOff {
    battery_level: u8,
    charging: bool,
}

impl PoweredOff {
    pub fn new(battery_level: u8, charging: bool) -> Self {
        Self {
            battery_level,
            charging,
        }
    }
}

impl Widget for PoweredOff {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let charge = if self.charging {
            Span::styled(
                format!("⚡ Charging {}%", self.battery_level),
                styles::status_green(),
            )
        } else {
            Span::styled(
                format!("Battery {}%", self.battery_level),
                styles::battery(self.battery_level, false),
            )
        };

        let lines = vec![
            Line::from(Span::styled("⏻", styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled("Device is off", styles::text_secondary())),
            Line::from(charge),
            Line::from(""),
            Line::from(vec![
                Span::styled("enter", styles::keybinding()),
                Span::styled(" power on   ", styles::text_muted()),
                Span::styled("c", styles::keybinding()),
                Span::styled(" charger", styles::text_muted()),
            ]),
        ];
        let rect = centered_rect(area.width, lines.len() as u16, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}
