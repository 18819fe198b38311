//! Home screen: launcher grid and dock

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;
use vanguard_app::handler::HOME_COLUMNS;
use vanguard_app::ShellContext;
use vanguard_core::{descriptor, launchable, AppId, DOCK_APPS};

use crate::theme::styles;

const TILE_HEIGHT: u16 = 4;
const DOCK_HEIGHT: u16 = 3;

pub struct HomeScreen<'a> {
    ctx: ShellContext<'a>,
    cursor: usize,
}

impl<'a> HomeScreen<'a> {
    pub fn new(ctx: ShellContext<'a>, cursor: usize) -> Self {
        Self { ctx, cursor }
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let apps: Vec<_> = launchable().collect();
        let rows = apps.len().div_ceil(HOME_COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); rows]).split(area);
        let columns = vec![Constraint::Ratio(1, HOME_COLUMNS as u32); HOME_COLUMNS];

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(columns.clone()).split(*row_area);
            for (col, cell) in cells.iter().enumerate() {
                let index = row * HOME_COLUMNS + col;
                let Some(app) = apps.get(index) else {
                    break;
                };
                self.render_tile(app.id, index == self.cursor, *cell, buf);
            }
        }
    }

    fn render_tile(&self, id: AppId, focused: bool, area: Rect, buf: &mut Buffer) {
        let app = descriptor(id);
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let badge = id == AppId::AppUpdates && self.ctx.has_unread_update();
        let name_width = inner.width.saturating_sub(if badge { 2 } else { 0 }) as usize;
        let mut name = vec![Span::styled(
            fit(app.name, name_width),
            if focused {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            },
        )];
        if badge {
            name.push(Span::styled(" ●", styles::status_red()));
        }

        let glyph_style = if self.ctx.open_apps().contains(&id) {
            styles::accent_bold()
        } else {
            styles::accent()
        };
        Paragraph::new(vec![
            Line::from(Span::styled(app.glyph, glyph_style)),
            Line::from(name),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }

    fn render_dock(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for id in DOCK_APPS {
            let app = descriptor(id);
            let open = self.ctx.open_apps().contains(&id);
            spans.push(Span::styled(app.glyph, styles::accent()));
            spans.push(Span::styled(
                format!(" {}{}   ", app.name, if open { " •" } else { "" }),
                styles::text_muted(),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for HomeScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [grid, dock] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(DOCK_HEIGHT)]).areas(area);
        self.render_grid(grid, buf);
        self.render_dock(dock, buf);
    }
}

/// Truncate to `width` display columns, marking the cut with an ellipsis
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
