//! PIN entry for the lock screen
//!
//! PIN checking is a presentation concern: the session only ever sees
//! `lock`/`unlock`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    /// Entry not complete yet
    Pending,
    Accepted,
    /// Wrong PIN; entry cleared
    Rejected,
}

#[derive(Debug, Clone)]
pub struct PinPad {
    pin: String,
    entry: String,
    shaking: bool,
}

impl PinPad {
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            entry: String::new(),
            shaking: false,
        }
    }

    pub fn pin_len(&self) -> usize {
        self.pin.chars().count()
    }

    /// Number of digits entered so far
    pub fn entered(&self) -> usize {
        self.entry.chars().count()
    }

    /// True right after a rejected entry, until the next key
    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    pub fn push_digit(&mut self, digit: char) -> PinOutcome {
        self.shaking = false;
        if !digit.is_ascii_digit() {
            return PinOutcome::Pending;
        }
        if self.entered() < self.pin_len() {
            self.entry.push(digit);
        }
        if self.entered() < self.pin_len() {
            return PinOutcome::Pending;
        }

        let outcome = if self.entry == self.pin {
            PinOutcome::Accepted
        } else {
            self.shaking = true;
            PinOutcome::Rejected
        };
        self.entry.clear();
        outcome
    }

    pub fn backspace(&mut self) {
        self.shaking = false;
        self.entry.pop();
    }

    pub fn clear(&mut self) {
        self.entry.clear();
        self.shaking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(pad: &mut PinPad, digits: &str) -> PinOutcome {
        let mut last = PinOutcome::Pending;
        for d in digits.chars() {
            last = pad.push_digit(d);
        }
        last
    }

    #[test]
    fn test_correct_pin_accepted() {
        let mut pad = PinPad::new("1992");
        assert_eq!(enter(&mut pad, "199"), PinOutcome::Pending);
        assert_eq!(pad.entered(), 3);
        assert_eq!(pad.push_digit('2'), PinOutcome::Accepted);
        assert_eq!(pad.entered(), 0);
    }

    #[test]
    fn test_wrong_pin_rejected_and_cleared() {
        let mut pad = PinPad::new("1992");
        assert_eq!(enter(&mut pad, "1234"), PinOutcome::Rejected);
        assert!(pad.is_shaking());
        assert_eq!(pad.entered(), 0);

        pad.push_digit('1');
        assert!(!pad.is_shaking());
    }

    #[test]
    fn test_backspace_removes_last_digit() {
        let mut pad = PinPad::new("1992");
        enter(&mut pad, "18");
        pad.backspace();
        assert_eq!(enter(&mut pad, "992"), PinOutcome::Accepted);
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut pad = PinPad::new("1992");
        assert_eq!(pad.push_digit('x'), PinOutcome::Pending);
        assert_eq!(pad.entered(), 0);
    }
}
