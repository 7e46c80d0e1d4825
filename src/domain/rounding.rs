//! Explicit rounding direction for arithmetic operations.

/// Specifies the rounding direction for division on domain types.
///
/// All division in this library requires an explicit `Rounding`
/// parameter. The pool only ever rounds down — loss always accrues to
/// the pool and existing share holders, never to the caller — but the
/// direction is named at every call site so the bias is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
