//! Pre-boot splash

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

pub const LOGO: &str = "V A N G U A R D";

/// Logo card shown before the form factor picker
pub struct Splash;

impl Widget for Splash {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(LOGO, styles::accent_bold())),
            Line::from(Span::styled("VanguardOS", styles::text_muted())),
            Line::from(""),
            Line::from(vec![
                Span::styled("enter", styles::keybinding()),
                Span::styled(" skip", styles::text_muted().add_modifier(Modifier::ITALIC)),
            ]),
        ];
        let rect = centered_rect(area.width, lines.len() as u16, area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_splash_shows_logo() {
        let mut term = TestTerminal::new();
        term.render_widget(Splash, term.area());
        assert!(term.buffer_contains(LOGO));
        assert!(term.buffer_contains("skip"));
    }
}
