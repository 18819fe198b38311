//! Control center overlay: quick toggles
//!
//! Lower-case keys flip a setting; the upper-case key opens the matching
//! Settings page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::ShellContext;
use vanguard_core::{InternetMode, Theme};

use super::modal_overlay;
use crate::theme::styles;

pub struct ControlCenter<'a> {
    ctx: ShellContext<'a>,
}

impl<'a> ControlCenter<'a> {
    pub fn new(ctx: ShellContext<'a>) -> Self {
        Self { ctx }
    }

    /// (key, label, on, deep-link key)
    fn toggles(&self) -> [(&'static str, &'static str, bool, Option<&'static str>); 7] {
        let settings = self.ctx.settings();
        [
            ("w", "Wi-Fi", settings.internet_mode == InternetMode::Wifi, Some("W")),
            ("m", "Mobile Network", settings.internet_mode == InternetMode::Network, Some("M")),
            ("b", "vBluetooth", settings.internet_mode == InternetMode::VBluetooth, Some("B")),
            ("a", "Airplane mode", settings.airplane_mode, None),
            ("s", "Power saving", settings.power_saving, Some("S")),
            ("d", "Dark mode", settings.theme == Theme::Dark, Some("D")),
            ("z", "Charger", self.ctx.is_charging(), None),
        ]
    }
}

impl Widget for ControlCenter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal_overlay::open_panel(buf, area, 40, 13, "Control Center");

        let mut lines: Vec<Line> = self
            .toggles()
            .into_iter()
            .map(|(key, label, on, link)| {
                let mut spans = vec![
                    Span::styled(format!(" {} ", key), styles::keybinding()),
                    Span::styled(format!("{:<16}", label), styles::text_primary()),
                    Span::styled(if on { "● On " } else { "○ Off" }, styles::toggle(on)),
                ];
                if let Some(link) = link {
                    spans.push(Span::styled(format!("  {} ›", link), styles::text_muted()));
                }
                Line::from(spans)
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" ⇧+key", styles::keybinding()),
            Span::styled(" settings  ", styles::text_muted()),
            Span::styled("esc", styles::keybinding()),
            Span::styled(" back", styles::text_muted()),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}
