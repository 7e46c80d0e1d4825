//! Single-controller administrative capability.
//!
//! The pool's administrative authority is an explicit capability object
//! passed at construction, not implicit global state. Possession of the
//! `AdminCap` value *is* the authority: handing control to a new
//! controller consumes the old capability and issues a fresh one, so
//! stale handles cannot linger. No core pool operation (deposit,
//! redemption, swap, quote) consults the capability.

use crate::domain::AccountId;

/// Unforgeable handle naming the pool's current controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminCap {
    controller: AccountId,
}

impl AdminCap {
    /// Issues a capability for the given controller.
    #[must_use]
    pub const fn new(controller: AccountId) -> Self {
        Self { controller }
    }

    /// Returns the current controller.
    #[must_use]
    pub const fn controller(&self) -> AccountId {
        self.controller
    }

    /// Hands control to `new_controller`, consuming this capability.
    #[must_use]
    pub const fn transfer(self, new_controller: AccountId) -> Self {
        Self {
            controller: new_controller,
        }
    }
}
