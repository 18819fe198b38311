//! Terminal input: crossterm events to shell messages

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vanguard_app::{InputKey, Message};
use vanguard_core::prelude::*;

/// Map a crossterm key to the shell's key set. Alt chords and function
/// keys have no binding and map to `None`.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        _ => return None,
    };
    Some(input)
}

/// Wait up to `timeout` for a key press
pub fn poll(timeout: Duration) -> Result<Option<Message>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Resize(width, height) => {
            trace!("Terminal resized to {}x{}", width, height);
            None
        }
        _ => None,
    };
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputKey> {
        key_event_to_input(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        for (c, modifiers) in [
            ('t', KeyModifiers::NONE),
            ('W', KeyModifiers::SHIFT),
            ('7', KeyModifiers::NONE),
        ] {
            assert_eq!(key(KeyCode::Char(c), modifiers), Some(InputKey::Char(c)));
        }
    }

    #[test]
    fn test_ctrl_c() {
        assert_eq!(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(InputKey::CharCtrl('c'))
        );
    }

    #[test]
    fn test_alt_chords_ignored() {
        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::ALT), None);
    }

    #[test]
    fn test_special_keys() {
        let cases = [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Left, InputKey::Left),
            (KeyCode::Right, InputKey::Right),
            (KeyCode::Enter, InputKey::Enter),
            (KeyCode::Esc, InputKey::Esc),
            (KeyCode::Backspace, InputKey::Backspace),
            (KeyCode::Delete, InputKey::Delete),
        ];
        for (code, expected) in cases {
            assert_eq!(key(code, KeyModifiers::NONE), Some(expected));
        }
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key(KeyCode::F(5), KeyModifiers::NONE), None);
        assert_eq!(key(KeyCode::Home, KeyModifiers::NONE), None);
    }
}
