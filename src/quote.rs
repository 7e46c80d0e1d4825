//! Pure pricing functions — the quoter has no state.
//!
//! The swap rule is fee-free constant product: for a trade of
//! `amount_in` against reserves `(reserve_in, reserve_out)`,
//!
//! ```text
//! amount_out = floor(amount_in × reserve_out / (reserve_in + amount_in))
//! ```
//!
//! Floor division makes the product `reserve_in × reserve_out`
//! non-decreasing across every trade; the rounding loss stays in the
//! pool. Spot prices are integer fixed-point with [`PRICE_SCALE`]
//! (10^18) as the unit.

use crate::domain::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Fixed-point scale for spot prices: one unit of price is `10^18`.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Computes the output amount for an exact-input swap.
///
/// Formula: `floor(amount_in × reserve_out / (reserve_in + amount_in))`.
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `amount_in` is zero.
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero, or
///   the computed output rounds down to zero.
/// - [`PoolError::Overflow`] if `amount_in × reserve_out` exceeds `u128`.
///
/// # Examples
///
/// ```
/// use duopool::domain::Amount;
/// use duopool::quote;
///
/// let out = quote::amount_out(Amount::new(500), Amount::new(1_000), Amount::new(2_000));
/// assert_eq!(out, Ok(Amount::new(666)));
/// ```
pub fn amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(PoolError::ZeroAmount("swap input must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }

    let numerator = amount_in
        .checked_mul(&reserve_out)
        .ok_or(PoolError::Overflow("quote numerator"))?;
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(PoolError::Overflow("quote denominator"))?;

    let out = numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(PoolError::DivisionByZero)?;

    if out.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }

    Ok(out)
}

/// Computes the spot price of the base asset denominated in the quote
/// asset: `floor(reserve_quote × PRICE_SCALE / reserve_base)`.
///
/// A pool holding equal reserves of both assets therefore prices each
/// asset at exactly `PRICE_SCALE`.
///
/// # Errors
///
/// - [`PoolError::InsufficientLiquidity`] if either reserve is zero.
/// - [`PoolError::Overflow`] if `reserve_quote × PRICE_SCALE` exceeds `u128`.
pub fn spot_price(reserve_base: Amount, reserve_quote: Amount) -> Result<Amount> {
    if reserve_base.is_zero() || reserve_quote.is_zero() {
        return Err(PoolError::InsufficientLiquidity);
    }

    let scaled = reserve_quote
        .checked_mul(&Amount::new(PRICE_SCALE))
        .ok_or(PoolError::Overflow("price numerator"))?;

    scaled
        .checked_div(&reserve_base, Rounding::Down)
        .ok_or(PoolError::DivisionByZero)
}

/// Integer square root via Newton's method.
///
/// Used to bootstrap the share unit on the first deposit:
/// `floor(sqrt(a × b))` scales with the geometric mean of the deposit,
/// independent of which asset is larger.
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
