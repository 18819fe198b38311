//! Scripted boot animation state

/// Status lines shown while booting, in order
pub const BOOT_MESSAGES: [&str; 5] = [
    "Starting core services...",
    "Calibrating sensors...",
    "Loading workspace...",
    "Optimizing applications...",
    "Finalizing setup...",
];

/// Tracks the current boot instance.
///
/// Every boot gets a fresh epoch; timer messages carry the epoch they were
/// spawned for so late deliveries from an aborted boot are recognisable.
#[derive(Debug, Clone, Default)]
pub struct BootSequence {
    epoch: u64,
    message_index: usize,
}

impl BootSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new boot instance and return its epoch
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.message_index = 0;
        self.epoch
    }

    /// Invalidate the running instance without starting another
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.message_index = 0;
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    /// Move to the next status line, stopping on the last one
    pub fn advance(&mut self) {
        if self.message_index + 1 < BOOT_MESSAGES.len() {
            self.message_index += 1;
        }
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn message(&self) -> &'static str {
        BOOT_MESSAGES[self.message_index]
    }

    /// Fraction of the script shown so far, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        (self.message_index + 1) as f64 / BOOT_MESSAGES.len() as f64
    }
}
