//! Time source for the cooperative deadline check.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Supplies the caller-visible current time.
///
/// The pool reads the clock exactly once per mutating operation, at
/// entry, to evaluate the request's deadline.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A manually driven clock for tests.
///
/// Interior mutability lets tests advance time while the pool holds the
/// clock by value.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Creates a clock frozen at the given time.
    #[must_use]
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: Cell::new(now.as_secs()),
        }
    }

    /// Jumps the clock to an absolute time.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now.as_secs());
    }

    /// Advances the clock by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.now.get())
    }
}
