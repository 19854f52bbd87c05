//! Confirmation-page countdown before returning to the contact form.

/// Seconds remaining before the confirmation page redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub const fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Consumes one second. Returns `true` once the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_finished()
    }
}
