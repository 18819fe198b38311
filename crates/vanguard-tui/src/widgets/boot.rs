//! Boot animation

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};
use vanguard_app::BootSequence;

use crate::theme::styles;

use super::modal_overlay::centered_rect;
use super::splash::LOGO;

pub struct BootScreen<'a> {
    boot: &'a BootSequence,
}

impl<'a> BootScreen<'a> {
    pub fn new(boot: &'a BootSequence) -> Self {
        Self { boot }
    }
}

impl Widget for BootScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = centered_rect(40, 5, area);
        let [logo, _, gauge, message] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(body);

        Paragraph::new(Line::from(Span::styled(LOGO, styles::accent_bold())))
            .alignment(Alignment::Center)
            .render(logo, buf);

        Gauge::default()
            .gauge_style(styles::accent())
            .ratio(self.boot.progress().clamp(0.0, 1.0))
            .label("")
            .render(gauge, buf);

        Paragraph::new(Line::from(Span::styled(
            self.boot.message(),
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(message, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vanguard_app::boot::BOOT_MESSAGES;

    #[test]
    fn test_shows_current_status_line() {
        let mut boot = BootSequence::new();
        boot.begin();
        boot.advance();

        let mut term = TestTerminal::new();
        term.render_widget(BootScreen::new(&boot), term.area());
        assert!(term.buffer_contains(BOOT_MESSAGES[1]));
    }
}
