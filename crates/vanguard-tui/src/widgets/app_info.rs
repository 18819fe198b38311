//! App info sheet: catalog details for one app

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use vanguard_app::ShellContext;
use vanguard_core::{descriptor, storage, AppId};

use super::modal_overlay;
use crate::theme::styles;

pub struct AppInfo<'a> {
    ctx: ShellContext<'a>,
    id: AppId,
}

impl<'a> AppInfo<'a> {
    pub fn new(ctx: ShellContext<'a>, id: AppId) -> Self {
        Self { ctx, id }
    }

    /// Live draw while open, otherwise the catalog range
    fn memory(&self) -> String {
        if let Some(mb) = self.ctx.app_ram_mb(self.id) {
            return format!("{} MB (running)", mb);
        }
        match descriptor(self.id).ram {
            Some(range) if range.min == range.max => format!("{} MB", range.min),
            Some(range) => format!("{}-{} MB", range.min, range.max),
            None => "-".to_string(),
        }
    }
}

impl Widget for AppInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = descriptor(self.id);
        let inner = modal_overlay::open_panel(buf, area, 44, 16, app.name);

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {:<10}", label), styles::text_muted()),
                Span::styled(value, styles::text_primary()),
            ])
        };
        let version = app.version.map(|v| format!("v{}", v));
        let size = app.storage_kb.map(storage::format_kb);
        let mut lines = vec![
            row("Version", version.unwrap_or_else(|| "-".into())),
            row("Memory", self.memory()),
            row("Storage", size.unwrap_or_else(|| "-".into())),
        ];

        for entry in app.changelog.iter().take(2) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" v{}", entry.version),
                styles::accent_bold(),
            )));
            for note in entry.notes {
                lines.push(Line::from(format!("  • {}", note)));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
