//! Key hints along the bottom edge of the device

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vanguard_app::Screen;

use crate::theme::{palette, styles};

const LOCKED_HINTS: &[(&str, &str)] = &[("0-9", "PIN"), ("⌫", "delete"), ("P", "power")];

const HOME_HINTS: &[(&str, &str)] = &[
    ("⏎", "open"),
    ("i", "info"),
    ("t", "tasks"),
    ("c", "control"),
    ("n", "alerts"),
    ("L", "lock"),
    ("P", "power"),
    ("q", "quit"),
];

const APP_HINTS: &[(&str, &str)] = &[
    ("esc", "home"),
    ("x", "close"),
    ("t", "tasks"),
    ("c", "control"),
    ("n", "alerts"),
    ("L", "lock"),
    ("P", "power"),
];

pub struct NavBar {
    screen: Screen,
}

impl NavBar {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.screen {
            Screen::Locked => LOCKED_HINTS,
            Screen::Home => HOME_HINTS,
            Screen::App(_) => APP_HINTS,
            _ => &[],
        }
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::CARD_BG));

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use vanguard_core::AppId;

    #[test]
    fn test_home_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(NavBar::new(Screen::Home), term.area());
        assert!(term.buffer_contains("tasks"));
        assert!(term.buffer_contains("quit"));
    }

    #[test]
    fn test_app_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(NavBar::new(Screen::App(AppId::Clock)), term.area());
        assert!(term.buffer_contains("esc home"));
        assert!(term.buffer_contains("x close"));
    }

    #[test]
    fn test_no_quit_hint_on_lock_screen() {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(NavBar::new(Screen::Locked), term.area());
        assert!(term.buffer_contains("PIN"));
        assert!(!term.buffer_contains("quit"));
    }
}
