//! Shared modal overlay utilities.
//!
//! Centering rects, dimming the screen below an overlay, and drawing a
//! drop shadow under a panel.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a panel.
pub fn render_shadow(buf: &mut Buffer, panel: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = panel.x.saturating_add(panel.width);
    for y in panel.y.saturating_add(1)..panel.y.saturating_add(panel.height).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = panel.y.saturating_add(panel.height);
    for x in panel.x.saturating_add(1)..panel.x.saturating_add(panel.width).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim `area`, then clear and frame a centered panel of the given size.
///
/// Returns the panel's inner area.
pub fn open_panel(buf: &mut Buffer, area: Rect, width: u16, height: u16, title: &str) -> Rect {
    dim_background(buf, area);
    let panel = centered_rect(width, height, area);
    render_shadow(buf, panel);
    Clear.render(panel, buf);

    let block: Block = styles::modal_block(title);
    let inner = block.inner(panel);
    block.render(panel, buf);
    inner
}
