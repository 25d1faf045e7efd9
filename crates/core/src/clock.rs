//! Wall-clock source used to measure time since brew.

use crate::types::UnixSeconds;

/// Supplies the current time in Unix seconds.
pub trait Clock: Send + Sync {
    fn now(&self) -> UnixSeconds;
}

/// The real UTC clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UnixSeconds {
        chrono::Utc::now().timestamp()
    }
}

/// A clock frozen at a fixed instant, for tests and event replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub UnixSeconds);

impl Clock for FixedClock {
    fn now(&self) -> UnixSeconds {
        self.0
    }
}
