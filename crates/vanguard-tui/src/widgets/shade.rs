//! Notification shade overlay

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::ShellContext;

use super::modal_overlay;
use crate::theme::styles;

/// Rows used by one notification entry
const ENTRY_HEIGHT: u16 = 3;

pub struct Shade<'a> {
    ctx: ShellContext<'a>,
    cursor: usize,
}

impl<'a> Shade<'a> {
    pub fn new(ctx: ShellContext<'a>, cursor: usize) -> Self {
        Self { ctx, cursor }
    }
}

impl Widget for Shade<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height.saturating_sub(4).max(6);
        let width = area.width.saturating_sub(4);
        let inner = modal_overlay::open_panel(buf, area, width, height, "Notifications");
        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let notifications = self.ctx.notifications();
        let now = self.ctx.now();
        let mut lines = Vec::new();

        if notifications.is_empty() {
            lines.push(Line::from(Span::styled(
                "No notifications",
                styles::text_muted(),
            )));
        }

        let fits = (list_area.height / ENTRY_HEIGHT).max(1) as usize;
        let first = self.cursor.saturating_sub(fits - 1);
        for (index, notification) in notifications.iter().enumerate().skip(first).take(fits) {
            let focused = index == self.cursor;
            let marker = if focused { "▶ " } else { "  " };
            let title_style = if focused {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            lines.push(Line::from(vec![
                Span::styled(marker, styles::accent()),
                Span::styled(
                    format!("{} ", icon_glyph(notification.icon)),
                    styles::tint(notification.tint),
                ),
                Span::styled(notification.title.clone(), title_style),
                Span::styled(
                    format!("  {}", notification.time_ago(now)),
                    styles::text_muted(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", notification.message),
                styles::text_secondary(),
            )));
            lines.push(Line::from(""));
        }
        Paragraph::new(lines).render(list_area, buf);

        let hints = Line::from(vec![
            Span::styled("⏎", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("d", styles::keybinding()),
            Span::styled(" dismiss  ", styles::text_muted()),
            Span::styled("C", styles::keybinding()),
            Span::styled(" clear all  ", styles::text_muted()),
            Span::styled("esc", styles::keybinding()),
            Span::styled(" back", styles::text_muted()),
        ]);
        Paragraph::new(hints).render(hint_area, buf);
    }
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "cloud-arrow-down" => "⇩",
        "battery" => "▮",
        "wifi" => "≋",
        _ => "•",
    }
}
