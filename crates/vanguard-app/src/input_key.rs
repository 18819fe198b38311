//! Abstract input key event, independent of terminal library.
//!
//! The shell's state machine only ever sees `InputKey`; the TUI converts
//! crossterm key events at its boundary.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols), shifted letters arrive uppercase
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Digit value for number keys
    pub fn digit(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if c.is_ascii_digit() => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('A'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_digit() {
        assert_eq!(InputKey::Char('7').digit(), Some('7'));
        assert_eq!(InputKey::Char('x').digit(), None);
        assert_eq!(InputKey::Enter.digit(), None);
    }
}
