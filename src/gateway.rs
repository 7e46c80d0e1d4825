//! External ledger collaborator: moves asset units on the pool's behalf.
//!
//! The pool never holds assets itself; it drives an external
//! fungible-asset ledger through [`LedgerGateway`]. Calls are
//! synchronous from the pool's perspective and any non-success is a
//! hard failure of the whole enclosing pool operation.
//!
//! [`InMemoryLedger`] is a complete reference implementation with
//! balances and owner→spender allowances, usable both as a test double
//! and as a model of the semantics the pool expects from a real ledger.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{AccountId, Amount, AssetId};

/// Failure reported by the external ledger.
///
/// The pool maps every variant to
/// [`PoolError::TransferFailed`](crate::error::PoolError::TransferFailed)
/// at its boundary; the distinction matters only to gateway
/// implementors and their tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The owner's balance cannot cover the transfer.
    #[error("insufficient balance")]
    InsufficientBalance,
    /// The spender's allowance from the owner cannot cover the transfer.
    #[error("insufficient allowance")]
    InsufficientAllowance,
    /// The balance being credited would overflow.
    #[error("balance overflow")]
    BalanceOverflow,
}

/// Moves asset units in and out on the pool's behalf.
///
/// `spender` on [`LedgerGateway::transfer_from`] is the party exercising
/// a previously granted allowance — for pool operations, always the
/// pool's own account.
pub trait LedgerGateway {
    /// Transfers `amount` of `asset` from `owner` to `to`, on the
    /// authority of `spender`'s allowance.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if the balance or allowance cannot
    /// cover the transfer.
    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), GatewayError>;

    /// Transfers `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] if `from`'s balance cannot cover the
    /// transfer.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), GatewayError>;

    /// Returns the balance of `asset` held by `account`.
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount;
}

/// In-memory fungible-asset ledger with balances and allowances.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), u128>,
    allowances: HashMap<(AssetId, AccountId, AccountId), u128>,
    /// When set, every transfer fails. Lets tests exercise the pool's
    /// abort-and-refund paths.
    fail_transfers: bool,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    pub fn mint(&mut self, asset: AssetId, account: AccountId, amount: Amount) {
        let balance = self.balances.entry((asset, account)).or_insert(0);
        *balance = balance.saturating_add(amount.get());
    }

    /// Grants `spender` an allowance of `amount` over `owner`'s `asset`.
    pub fn approve(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        spender: AccountId,
        amount: Amount,
    ) {
        self.allowances.insert((asset, owner, spender), amount.get());
    }

    /// Makes every subsequent transfer fail (or succeed again).
    pub fn set_fail_transfers(&mut self, fail: bool) {
        self.fail_transfers = fail;
    }

    fn move_units(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), GatewayError> {
        let from_balance = self.balances.get(&(asset, from)).copied().unwrap_or(0);
        let debited = from_balance
            .checked_sub(amount.get())
            .ok_or(GatewayError::InsufficientBalance)?;
        // Self-transfer is a funded no-op, not a mint.
        if from == to {
            return Ok(());
        }
        let to_balance = self.balances.get(&(asset, to)).copied().unwrap_or(0);
        let credited = to_balance
            .checked_add(amount.get())
            .ok_or(GatewayError::BalanceOverflow)?;

        self.balances.insert((asset, from), debited);
        self.balances.insert((asset, to), credited);
        Ok(())
    }
}

impl LedgerGateway for InMemoryLedger {
    fn transfer_from(
        &mut self,
        asset: AssetId,
        spender: AccountId,
        owner: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), GatewayError> {
        if self.fail_transfers {
            return Err(GatewayError::InsufficientBalance);
        }
        let key = (asset, owner, spender);
        let allowance = self.allowances.get(&key).copied().unwrap_or(0);
        let remaining = allowance
            .checked_sub(amount.get())
            .ok_or(GatewayError::InsufficientAllowance)?;

        self.move_units(asset, owner, to, amount)?;
        self.allowances.insert(key, remaining);
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), GatewayError> {
        if self.fail_transfers {
            return Err(GatewayError::InsufficientBalance);
        }
        self.move_units(asset, from, to, amount)
    }

    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        Amount::new(self.balances.get(&(asset, account)).copied().unwrap_or(0))
    }
}
