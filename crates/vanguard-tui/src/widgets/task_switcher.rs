//! Task switcher overlay: one card per open app

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::ShellContext;
use vanguard_core::{descriptor, AppId};

use super::modal_overlay;
use crate::theme::styles;

const CARD_WIDTH: u16 = 16;

pub struct TaskSwitcher<'a> {
    ctx: ShellContext<'a>,
    cursor: usize,
}

impl<'a> TaskSwitcher<'a> {
    pub fn new(ctx: ShellContext<'a>, cursor: usize) -> Self {
        Self { ctx, cursor }
    }

    fn render_card(&self, id: AppId, focused: bool, area: Rect, buf: &mut Buffer) {
        let app = descriptor(id);
        let block = styles::glass_block(focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let ram = self
            .ctx
            .app_ram_mb(id)
            .map(|mb| format!("{} MB", mb))
            .unwrap_or_default();
        let name_style = if focused {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let lines = vec![
            Line::from(Span::styled(app.glyph, styles::accent())),
            Line::from(Span::styled(app.name, name_style)),
            Line::from(Span::styled(ram, styles::text_muted())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for TaskSwitcher<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = modal_overlay::open_panel(buf, area, area.width.saturating_sub(4), 9, "Recent apps");
        let [cards_area, hint_area] =
            Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(inner);

        let cards: Vec<AppId> = self
            .ctx
            .open_apps()
            .iter()
            .copied()
            .filter(|id| !id.is_boot())
            .collect();

        if cards.is_empty() {
            Paragraph::new(Line::from(Span::styled("No recent apps", styles::text_muted())))
                .alignment(Alignment::Center)
                .render(cards_area, buf);
        } else {
            // Keep the focused card on screen
            let fits = (cards_area.width / CARD_WIDTH).max(1) as usize;
            let first = self.cursor.saturating_sub(fits - 1);
            let visible = &cards[first..cards.len().min(first + fits)];
            let slots = Layout::horizontal(vec![Constraint::Length(CARD_WIDTH); visible.len()])
                .split(cards_area);
            for (offset, (id, slot)) in visible.iter().zip(slots.iter()).enumerate() {
                self.render_card(*id, first + offset == self.cursor, *slot, buf);
            }
        }

        let hints = Line::from(vec![
            Span::styled("←→", styles::keybinding()),
            Span::styled(" select  ", styles::text_muted()),
            Span::styled("⏎", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("x", styles::keybinding()),
            Span::styled(" close  ", styles::text_muted()),
            Span::styled("esc", styles::keybinding()),
            Span::styled(" back", styles::text_muted()),
        ]);
        Paragraph::new(hints).render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vanguard_app::AppState;

    #[test]
    fn test_empty_switcher() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        term.render_widget(TaskSwitcher::new(state.context(), 0), term.area());
        assert!(term.buffer_contains("Recent apps"));
        assert!(term.buffer_contains("No recent apps"));
    }

    #[test]
    fn test_cards_for_open_apps() {
        let mut state = AppState::new();
        state.session.open_app(AppId::Calculator);
        state.session.open_app(AppId::Clock);

        let mut term = TestTerminal::new();
        term.render_widget(TaskSwitcher::new(state.context(), 1), term.area());
        assert!(term.buffer_contains("Calculator"));
        assert!(term.buffer_contains("Clock"));
        assert!(!term.buffer_contains("No recent apps"));
    }
}
