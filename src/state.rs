//! The pool's mutable state: reserves, total shares, and the share book.
//!
//! [`PoolState`] is the only place reserves and shares are written.
//! Every mutator is checked and all-or-nothing: it computes every new
//! value before assigning any field, so a failed operation leaves the
//! state exactly as it found it.
//!
//! # Invariants
//!
//! After every successful mutation:
//!
//! - `reserve_a == 0 ⟺ reserve_b == 0 ⟺ total_shares == 0` — an empty
//!   pool is all-or-nothing.
//! - The share book sums to `total_shares`.
//! - A swap never decreases `reserve_a × reserve_b` (floor loss only
//!   ever adds to the product).

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, Shares};
use crate::error::{PoolError, Result};

/// Which asset enters the pool in a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Asset A in, asset B out.
    AToB,
    /// Asset B in, asset A out.
    BToA,
}

/// Reserves, outstanding shares, and per-provider share balances.
///
/// The pool does not issue a transferable asset for shares; the book
/// here is the sole record of who may redeem what.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    total_shares: Shares,
    share_book: BTreeMap<AccountId, Shares>,
}

impl PoolState {
    /// Creates an empty state: no reserves, no shares.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the current reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the share balance recorded for `account`.
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.share_book.get(account).copied().unwrap_or(Shares::ZERO)
    }

    /// Returns `true` if the pool holds nothing and owes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for the given direction.
    #[must_use]
    pub const fn reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Grows both reserves and credits `minted` shares to `recipient`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroSharesMinted`] if `minted` is zero.
    /// - [`PoolError::Overflow`] if any counter would overflow.
    pub fn credit_deposit(
        &mut self,
        recipient: AccountId,
        amount_a: Amount,
        amount_b: Amount,
        minted: Shares,
    ) -> Result<()> {
        if minted.is_zero() {
            return Err(PoolError::ZeroSharesMinted);
        }

        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a on deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b on deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("total shares on deposit"))?;
        let new_balance = self
            .shares_of(&recipient)
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("share balance on deposit"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        self.share_book.insert(recipient, new_balance);

        debug_assert!(self.book_is_consistent());
        Ok(())
    }

    /// Shrinks both reserves and burns `burned` shares from `provider`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`] if `burned` exceeds the
    ///   provider's balance or the total supply.
    /// - [`PoolError::Overflow`] if either reserve would underflow.
    pub fn debit_withdrawal(
        &mut self,
        provider: AccountId,
        burned: Shares,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<()> {
        let balance = self.shares_of(&provider);
        let new_balance = balance
            .checked_sub(&burned)
            .ok_or(PoolError::InsufficientLiquidity)?;
        let new_total = self
            .total_shares
            .checked_sub(&burned)
            .ok_or(PoolError::InsufficientLiquidity)?;
        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::Overflow("reserve_a on withdrawal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::Overflow("reserve_b on withdrawal"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;
        if new_balance.is_zero() {
            self.share_book.remove(&provider);
        } else {
            self.share_book.insert(provider, new_balance);
        }

        debug_assert!(self.book_is_consistent());
        Ok(())
    }

    /// Moves `amount_in` into one reserve and `amount_out` out of the
    /// other. Shares are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the incoming reserve would
    /// overflow or the outgoing reserve would underflow.
    pub fn apply_swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<()> {
        let (reserve_in, reserve_out) = self.reserves(direction);

        let new_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(PoolError::Overflow("reserve_in on swap"))?;
        let new_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve_out on swap"))?;

        match direction {
            SwapDirection::AToB => {
                self.reserve_a = new_in;
                self.reserve_b = new_out;
            }
            SwapDirection::BToA => {
                self.reserve_b = new_in;
                self.reserve_a = new_out;
            }
        }
        Ok(())
    }

    fn book_is_consistent(&self) -> bool {
        let mut sum = Shares::ZERO;
        for balance in self.share_book.values() {
            match sum.checked_add(balance) {
                Some(s) => sum = s,
                None => return false,
            }
        }
        sum == self.total_shares
    }
}
