//! Seconds-since-epoch timestamp for deadline checks.

use core::fmt;

/// A point in time, in whole seconds since the Unix epoch.
///
/// Used for the cooperative deadline check at entry to every mutating
/// pool operation: a request whose deadline lies before the current
/// time is stale and rejected. This is not a scheduler-enforced
/// timeout — only a comparison against the caller-visible clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a `Timestamp` from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the timestamp as whole seconds since the Unix epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the timestamp advanced by `secs`, saturating at the
    /// maximum representable time.
    #[must_use]
    pub const fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
