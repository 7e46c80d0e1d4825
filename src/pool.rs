//! The fixed-pair exchange pool: deposits, redemptions, and swaps.
//!
//! One [`Pool`] instance manages one asset pair for its whole lifetime.
//! Every mutating entry point follows the same shape:
//!
//! 1. validate (pair, deadline, positive amounts, slippage bounds);
//! 2. compute accepted amounts and the resulting state on a staged copy;
//! 3. drive the external ledger gateway;
//! 4. commit the staged state and append an event record.
//!
//! No operation commits partially: every failure path returns before
//! step 4, and a transfer failure after an earlier pull in the same
//! operation refunds that pull. The swap path pulls the inbound asset
//! before quoting, so the pool never depends on trusting the caller's
//! declared input.
//!
//! # Exclusive access
//!
//! The pool is a single shared mutable resource. Mutating entry points
//! take `&mut self`, which is an exclusive per-pool lock enforced at
//! compile time: no interleaving of reserve reads and writes across
//! concurrent calls, and no re-entrant call while an operation is in
//! flight. Share a pool across threads by wrapping it in a mutex.

use crate::admin::AdminCap;
use crate::clock::Clock;
use crate::domain::{AccountId, Amount, AssetId, AssetPair, Rounding, Shares, Timestamp};
use crate::error::{PoolError, Result};
use crate::events::PoolEvent;
use crate::gateway::LedgerGateway;
use crate::quote;
use crate::state::{PoolState, SwapDirection};

/// A two-asset constant-product exchange pool.
///
/// Holds reserves of two fungible asset types, mints proportional
/// shares for matched-pair deposits, redeems shares for proportional
/// reserves, and swaps one asset for the other at the fee-free
/// constant-product price. Prices derive solely from the reserve ratio.
///
/// # Example
///
/// ```
/// use duopool::admin::AdminCap;
/// use duopool::clock::ManualClock;
/// use duopool::domain::{AccountId, Amount, AssetId, Timestamp};
/// use duopool::gateway::InMemoryLedger;
/// use duopool::pool::Pool;
///
/// let gold = AssetId::from_bytes([1u8; 32]);
/// let silver = AssetId::from_bytes([2u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let pool_acct = AccountId::from_bytes([0xF0u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(gold, alice, Amount::new(10_000));
/// ledger.mint(silver, alice, Amount::new(10_000));
/// ledger.approve(gold, alice, pool_acct, Amount::new(10_000));
/// ledger.approve(silver, alice, pool_acct, Amount::new(10_000));
///
/// let clock = ManualClock::at(Timestamp::from_secs(1_000));
/// let mut pool = Pool::create(gold, silver, pool_acct, AdminCap::new(alice), ledger, clock)
///     .expect("distinct assets");
///
/// pool.add_liquidity(
///     alice,
///     Amount::new(1_000),
///     Amount::new(1_000),
///     Amount::new(1),
///     Amount::new(1),
///     alice,
///     Timestamp::from_secs(2_000),
/// )
/// .expect("deposit accepted");
///
/// assert_eq!(pool.total_shares().get(), 1_000);
/// ```
#[derive(Debug)]
pub struct Pool<G, C> {
    pair: AssetPair,
    account: AccountId,
    admin: AdminCap,
    state: PoolState,
    events: Vec<PoolEvent>,
    gateway: G,
    clock: C,
}

impl<G: LedgerGateway, C: Clock> Pool<G, C> {
    /// Creates an empty pool over the given asset pair.
    ///
    /// The pair is fixed for the pool's lifetime; the lower-sorted
    /// identifier becomes asset A regardless of argument order.
    /// `account` is the pool's own identity on the external ledger and
    /// `admin` the explicit administrative capability.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPair`] if the identifiers are equal.
    pub fn create(
        asset_x: AssetId,
        asset_y: AssetId,
        account: AccountId,
        admin: AdminCap,
        gateway: G,
        clock: C,
    ) -> Result<Self> {
        let pair = AssetPair::new(asset_x, asset_y)?;
        Ok(Self {
            pair,
            account,
            admin,
            state: PoolState::new(),
            events: Vec::new(),
            gateway,
            clock,
        })
    }

    // -- read-only entry points --------------------------------------------

    /// Returns the pool's fixed asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the current reserve of asset A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.state.reserve_a()
    }

    /// Returns the current reserve of asset B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.state.reserve_b()
    }

    /// Returns the outstanding share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.state.total_shares()
    }

    /// Returns the share balance recorded for `account`.
    #[must_use]
    pub fn shares_of(&self, account: &AccountId) -> Shares {
        self.state.shares_of(account)
    }

    /// Returns the caller-visible current time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Returns the append-only event history.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Returns the pool's administrative controller.
    #[must_use]
    pub const fn controller(&self) -> AccountId {
        self.admin.controller()
    }

    /// Returns the pool's identity on the external ledger.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the external ledger gateway.
    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the external ledger gateway mutably.
    ///
    /// Intended for embedding code that owns the collaborator (test
    /// setup, ledger administration); pool invariants do not depend on
    /// gateway state.
    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// Returns the injected time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the spot price of `x` denominated in `y`, scaled by
    /// [`quote::PRICE_SCALE`].
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidPair`] if `{x, y}` is not the pool's pair.
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
    pub fn get_price(&self, x: AssetId, y: AssetId) -> Result<Amount> {
        self.pair.validate(&x, &y)?;
        let (reserve_base, reserve_quote) = if x == self.pair.asset_a() {
            (self.state.reserve_a(), self.state.reserve_b())
        } else {
            (self.state.reserve_b(), self.state.reserve_a())
        };
        quote::spot_price(reserve_base, reserve_quote)
    }

    // -- deposits ----------------------------------------------------------

    /// Deposits a matched pair of assets and mints proportional shares
    /// to `recipient`.
    ///
    /// Into an empty pool both desired amounts are accepted as-is and
    /// `floor(sqrt(a × b))` shares bootstrap the share unit. Into a
    /// non-empty pool one side is adjusted down to the current reserve
    /// ratio, so a deposit never moves the spot price; the mint is the
    /// minimum of the two proportional ratios, rounding in favour of
    /// existing holders.
    ///
    /// Both accepted legs are pulled from `caller`; if the second pull
    /// fails the first is refunded and nothing is committed.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] if either desired amount is zero.
    /// - [`PoolError::SlippageExceeded`] if an accepted amount falls
    ///   below its minimum.
    /// - [`PoolError::ZeroSharesMinted`] if the mint rounds to zero.
    /// - [`PoolError::TransferFailed`] if the gateway rejects a pull.
    /// - [`PoolError::Overflow`] on arithmetic overflow.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<PoolEvent> {
        self.check_deadline(deadline)?;

        if desired_a.is_zero() {
            return Err(PoolError::ZeroAmount("desired amount of asset A"));
        }
        if desired_b.is_zero() {
            return Err(PoolError::ZeroAmount("desired amount of asset B"));
        }

        let (accepted_a, accepted_b) = self.accept_deposit(desired_a, desired_b, min_a, min_b)?;
        let minted = self.shares_for_deposit(accepted_a, accepted_b)?;

        if minted.is_zero() {
            return Err(PoolError::ZeroSharesMinted);
        }
        if accepted_a < min_a || accepted_b < min_b {
            return Err(PoolError::SlippageExceeded(
                "accepted amount below minimum after rounding",
            ));
        }

        // Stage the state change before touching the ledger so a commit
        // can no longer fail once assets have moved.
        let mut staged = self.state.clone();
        staged.credit_deposit(recipient, accepted_a, accepted_b, minted)?;

        self.pull(self.pair.asset_a(), caller, accepted_a, "asset A pull")?;
        if let Err(e) = self.pull(self.pair.asset_b(), caller, accepted_b, "asset B pull") {
            self.refund(self.pair.asset_a(), caller, accepted_a);
            return Err(e);
        }

        self.state = staged;
        let event = PoolEvent::LiquidityAdded {
            provider: caller,
            amount_a: accepted_a,
            amount_b: accepted_b,
            shares_minted: minted,
        };
        self.events.push(event);
        Ok(event)
    }

    // -- redemptions -------------------------------------------------------

    /// Burns `shares` from `caller` and pushes the proportional slice
    /// of both reserves to `recipient`.
    ///
    /// Both payout divisions floor, so redemption never returns more
    /// than the exact proportional share; the rounding loss stays in
    /// the pool.
    ///
    /// Both payouts are pushed to `recipient`; if the second push fails
    /// the first is taken back and nothing is committed.
    ///
    /// # Errors
    ///
    /// - [`PoolError::Expired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] if `shares` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if the pool is empty or
    ///   `shares` exceeds the caller's balance or the total supply.
    /// - [`PoolError::SlippageExceeded`] if a payout falls below its
    ///   minimum.
    /// - [`PoolError::TransferFailed`] if the gateway rejects a push.
    #[allow(clippy::too_many_arguments)]
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        shares: Shares,
        min_a: Amount,
        min_b: Amount,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<PoolEvent> {
        self.check_deadline(deadline)?;

        if shares.is_zero() {
            return Err(PoolError::ZeroAmount("shares to burn"));
        }
        if self.state.is_empty() {
            return Err(PoolError::InsufficientLiquidity);
        }
        if shares > self.state.total_shares() || shares > self.state.shares_of(&caller) {
            return Err(PoolError::InsufficientLiquidity);
        }

        let amount_a = self.proportional_payout(self.state.reserve_a(), shares)?;
        let amount_b = self.proportional_payout(self.state.reserve_b(), shares)?;

        if amount_a < min_a {
            return Err(PoolError::SlippageExceeded("asset A payout below minimum"));
        }
        if amount_b < min_b {
            return Err(PoolError::SlippageExceeded("asset B payout below minimum"));
        }

        let mut staged = self.state.clone();
        staged.debit_withdrawal(caller, shares, amount_a, amount_b)?;

        // Reserves never exceed the pool's ledger balances; verify
        // upfront so a short pool aborts before anything moves. A push
        // can still fail on the recipient side, which the reclaim below
        // compensates.
        self.ensure_pool_balance(self.pair.asset_a(), amount_a)?;
        self.ensure_pool_balance(self.pair.asset_b(), amount_b)?;

        self.push(self.pair.asset_a(), recipient, amount_a, "asset A push")?;
        if let Err(e) = self.push(self.pair.asset_b(), recipient, amount_b, "asset B push") {
            self.reclaim(self.pair.asset_a(), recipient, amount_a);
            return Err(e);
        }

        self.state = staged;
        let event = PoolEvent::LiquidityRemoved {
            receiver: recipient,
            shares_burned: shares,
            amount_a,
            amount_b,
        };
        self.events.push(event);
        Ok(event)
    }

    // -- swaps -------------------------------------------------------------

    /// Swaps an exact input of `asset_in` for `asset_out` at the
    /// constant-product price, pushing the output to `recipient`.
    ///
    /// The inbound leg is pulled from `caller` before the quote is
    /// computed; if any later step fails, the pull is refunded and
    /// nothing is committed. The reserve product never decreases
    /// across a successful swap.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidPair`] if `(asset_in, asset_out)` is not
    ///   the pool's pair.
    /// - [`PoolError::Expired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
    /// - [`PoolError::InsufficientLiquidity`] if either reserve is zero
    ///   or the quote rounds to zero.
    /// - [`PoolError::SlippageExceeded`] if the output falls below
    ///   `min_amount_out`.
    /// - [`PoolError::TransferFailed`] if the gateway rejects a leg.
    #[allow(clippy::too_many_arguments)]
    pub fn swap_exact(
        &mut self,
        caller: AccountId,
        amount_in: Amount,
        min_amount_out: Amount,
        asset_in: AssetId,
        asset_out: AssetId,
        recipient: AccountId,
        deadline: Timestamp,
    ) -> Result<PoolEvent> {
        // The inbound asset must be a member and the outbound its
        // counterpart; rejects foreign assets and same-asset swaps.
        if self.pair.other(&asset_in)? != asset_out {
            return Err(PoolError::InvalidPair);
        }
        self.check_deadline(deadline)?;

        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount("swap input must be positive"));
        }

        let direction = if asset_in == self.pair.asset_a() {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        };
        let (reserve_in, reserve_out) = self.state.reserves(direction);
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }

        // Input is pulled before quoting; the pool prices what it
        // actually received, not what the caller claimed.
        self.pull(asset_in, caller, amount_in, "swap input pull")?;

        let (amount_out, staged) =
            match self.stage_swap(direction, amount_in, min_amount_out, reserve_in, reserve_out) {
                Ok(staged) => staged,
                Err(e) => {
                    self.refund(asset_in, caller, amount_in);
                    return Err(e);
                }
            };

        if let Err(e) = self.push(asset_out, recipient, amount_out, "swap output push") {
            self.refund(asset_in, caller, amount_in);
            return Err(e);
        }

        self.state = staged;
        let event = PoolEvent::Swapped {
            sender: caller,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            recipient,
        };
        self.events.push(event);
        Ok(event)
    }

    // -- internals ---------------------------------------------------------

    fn check_deadline(&self, deadline: Timestamp) -> Result<()> {
        if self.clock.now() > deadline {
            return Err(PoolError::Expired);
        }
        Ok(())
    }

    /// Accepts deposit amounts, adjusting one side down to the current
    /// reserve ratio for a non-empty pool.
    fn accept_deposit(
        &self,
        desired_a: Amount,
        desired_b: Amount,
        min_a: Amount,
        min_b: Amount,
    ) -> Result<(Amount, Amount)> {
        if self.state.is_empty() {
            return Ok((desired_a, desired_b));
        }

        let reserve_a = self.state.reserve_a();
        let reserve_b = self.state.reserve_b();

        let optimal_b = desired_a
            .checked_mul(&reserve_b)
            .ok_or(PoolError::Overflow("optimal_b numerator"))?
            .checked_div(&reserve_a, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;

        if optimal_b <= desired_b {
            if optimal_b < min_b {
                return Err(PoolError::SlippageExceeded("optimal asset B below minimum"));
            }
            return Ok((desired_a, optimal_b));
        }

        let optimal_a = desired_b
            .checked_mul(&reserve_a)
            .ok_or(PoolError::Overflow("optimal_a numerator"))?
            .checked_div(&reserve_b, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;

        if optimal_a < min_a {
            return Err(PoolError::SlippageExceeded("optimal asset A below minimum"));
        }
        Ok((optimal_a, desired_b))
    }

    /// Shares minted for an accepted deposit.
    ///
    /// Empty pool: `floor(sqrt(a × b))`. Otherwise the minimum of the
    /// two proportional ratios, each floored.
    fn shares_for_deposit(&self, accepted_a: Amount, accepted_b: Amount) -> Result<Shares> {
        if self.state.is_empty() {
            let product = accepted_a
                .checked_mul(&accepted_b)
                .ok_or(PoolError::Overflow("bootstrap product"))?;
            return Ok(Shares::new(quote::isqrt(product.get())));
        }

        let total = Amount::new(self.state.total_shares().get());

        let by_a = accepted_a
            .checked_mul(&total)
            .ok_or(PoolError::Overflow("share ratio A numerator"))?
            .checked_div(&self.state.reserve_a(), Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;
        let by_b = accepted_b
            .checked_mul(&total)
            .ok_or(PoolError::Overflow("share ratio B numerator"))?
            .checked_div(&self.state.reserve_b(), Rounding::Down)
            .ok_or(PoolError::DivisionByZero)?;

        Ok(Shares::new(by_a.min(by_b).get()))
    }

    /// Quotes a swap against the current reserves and stages the
    /// resulting state without committing it.
    fn stage_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
        min_amount_out: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<(Amount, PoolState)> {
        let amount_out = quote::amount_out(amount_in, reserve_in, reserve_out)?;
        if amount_out < min_amount_out {
            return Err(PoolError::SlippageExceeded("amount_out below minimum"));
        }
        let mut staged = self.state.clone();
        staged.apply_swap(direction, amount_in, amount_out)?;
        Ok((amount_out, staged))
    }

    /// `reserve × shares / total_shares`, floored.
    fn proportional_payout(&self, reserve: Amount, shares: Shares) -> Result<Amount> {
        let total = Amount::new(self.state.total_shares().get());
        reserve
            .checked_mul(&Amount::new(shares.get()))
            .ok_or(PoolError::Overflow("payout numerator"))?
            .checked_div(&total, Rounding::Down)
            .ok_or(PoolError::DivisionByZero)
    }

    fn pull(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        amount: Amount,
        context: &'static str,
    ) -> Result<()> {
        self.gateway
            .transfer_from(asset, self.account, owner, self.account, amount)
            .map_err(|_| PoolError::TransferFailed(context))
    }

    fn push(
        &mut self,
        asset: AssetId,
        to: AccountId,
        amount: Amount,
        context: &'static str,
    ) -> Result<()> {
        self.gateway
            .transfer(asset, self.account, to, amount)
            .map_err(|_| PoolError::TransferFailed(context))
    }

    /// Returns a previously pulled leg to its owner. Best effort: the
    /// enclosing operation is already failing, and its error is the one
    /// surfaced to the caller.
    fn refund(&mut self, asset: AssetId, owner: AccountId, amount: Amount) {
        let _ = self.gateway.transfer(asset, self.account, owner, amount);
    }

    /// Takes back a previously pushed leg so reserves and pool holdings
    /// stay in sync when a later leg fails. Best effort, like [`refund`].
    ///
    /// [`refund`]: Self::refund
    fn reclaim(&mut self, asset: AssetId, from: AccountId, amount: Amount) {
        let _ = self.gateway.transfer(asset, from, self.account, amount);
    }

    fn ensure_pool_balance(&self, asset: AssetId, amount: Amount) -> Result<()> {
        if self.gateway.balance_of(asset, self.account) < amount {
            return Err(PoolError::TransferFailed("pool balance short of reserves"));
        }
        Ok(())
    }
}
