//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers the structural properties of the constant-product pool:
//!
//! 1. **Swap reversibility** — round-trip A→B→A returns ≤ original.
//! 2. **Product preservation** — `reserve_a × reserve_b` non-decreasing
//!    across swaps.
//! 3. **Ratio preservation** — a deposit never moves the reserve ratio
//!    by more than its floor loss.
//! 4. **Liquidity conservation** — add then remove returns ≤ deposited.
//! 5. **Quote monotonicity** — larger input ⇒ larger or equal output.
//! 6. **Price movement direction** — selling A lowers A's spot price.
//! 7. **Payout flooring** — redemption never exceeds the proportional
//!    slice of reserves.
//! 8. **Integer square root** — `isqrt(n)² ≤ n < (isqrt(n)+1)²`.

use proptest::prelude::*;

use crate::admin::AdminCap;
use crate::clock::ManualClock;
use crate::domain::{AccountId, Amount, AssetId, Shares, Timestamp};
use crate::gateway::InMemoryLedger;
use crate::pool::Pool;
use crate::quote;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1 << 80;

fn asset_a() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn asset_b() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn provider() -> AccountId {
    AccountId::from_bytes([10u8; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([11u8; 32])
}

fn pool_acct() -> AccountId {
    AccountId::from_bytes([0xF0u8; 32])
}

fn far_deadline() -> Timestamp {
    Timestamp::from_secs(u64::MAX)
}

/// Fresh pool seeded with reserves `(ra, rb)` by `provider`.
fn seeded_pool(ra: u128, rb: u128) -> Pool<InMemoryLedger, ManualClock> {
    let mut ledger = InMemoryLedger::new();
    for account in [provider(), trader()] {
        for asset in [asset_a(), asset_b()] {
            ledger.mint(asset, account, Amount::new(FUNDING));
            ledger.approve(asset, account, pool_acct(), Amount::new(FUNDING));
        }
    }
    let clock = ManualClock::at(Timestamp::from_secs(0));
    let Ok(mut pool) = Pool::create(
        asset_a(),
        asset_b(),
        pool_acct(),
        AdminCap::new(provider()),
        ledger,
        clock,
    ) else {
        panic!("valid pool");
    };
    let Ok(_) = pool.add_liquidity(
        provider(),
        Amount::new(ra),
        Amount::new(rb),
        Amount::new(1),
        Amount::new(1),
        provider(),
        far_deadline(),
    ) else {
        panic!("valid seed deposit");
    };
    pool
}

fn swap_a_for_b(
    pool: &mut Pool<InMemoryLedger, ManualClock>,
    amount_in: u128,
) -> Option<u128> {
    let event = pool
        .swap_exact(
            trader(),
            Amount::new(amount_in),
            Amount::ZERO,
            asset_a(),
            asset_b(),
            trader(),
            far_deadline(),
        )
        .ok()?;
    match event {
        crate::events::PoolEvent::Swapped { amount_out, .. } => Some(amount_out.get()),
        _ => None,
    }
}

fn swap_b_for_a(
    pool: &mut Pool<InMemoryLedger, ManualClock>,
    amount_in: u128,
) -> Option<u128> {
    let event = pool
        .swap_exact(
            trader(),
            Amount::new(amount_in),
            Amount::ZERO,
            asset_b(),
            asset_a(),
            trader(),
            far_deadline(),
        )
        .ok()?;
    match event {
        crate::events::PoolEvent::Swapped { amount_out, .. } => Some(amount_out.get()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Deposit/swap amounts small relative to the reserve range.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Swap reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);

        let Some(received_b) = swap_a_for_b(&mut pool, swap_in) else {
            return Ok(());
        };
        let Some(final_a) = swap_b_for_a(&mut pool, received_b) else {
            return Ok(());
        };

        prop_assert!(
            final_a <= swap_in,
            "round-trip must not profit: final={} > original={}",
            final_a, swap_in
        );
    }

    #[test]
    fn prop_reserve_product_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let k_before = pool.reserve_a().get() * pool.reserve_b().get();

        if swap_a_for_b(&mut pool, swap_in).is_none() {
            return Ok(());
        }
        let k_after = pool.reserve_a().get() * pool.reserve_b().get();

        prop_assert!(
            k_after >= k_before,
            "product decreased: {} < {}",
            k_after, k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Deposits preserve the reserve ratio
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_preserves_ratio_up_to_floor(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        desired in amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let (ra0, rb0) = (pool.reserve_a().get(), pool.reserve_b().get());

        let result = pool.add_liquidity(
            trader(),
            Amount::new(desired),
            Amount::new(u128::from(u64::MAX)),
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        );
        if result.is_err() {
            return Ok(());
        }
        let (ra1, rb1) = (pool.reserve_a().get(), pool.reserve_b().get());

        // accepted_b = floor(da × rb0 / ra0), so cross-multiplied the new
        // ratio undershoots the old by strictly less than one unit of A:
        // 0 ≤ ra1·rb0 − rb1·ra0 < ra0.
        let lhs = ra1 * rb0;
        let rhs = rb1 * ra0;
        prop_assert!(lhs >= rhs, "ratio overshoot: {} < {}", lhs, rhs);
        prop_assert!(
            lhs - rhs < ra0,
            "ratio drift beyond floor loss: {} − {} ≥ {}",
            lhs, rhs, ra0
        );
    }

    #[test]
    fn prop_add_then_remove_conserves(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        desired in amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);

        let Ok(added) = pool.add_liquidity(
            trader(),
            Amount::new(desired),
            Amount::new(u128::from(u64::MAX)),
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        ) else {
            return Ok(());
        };
        let crate::events::PoolEvent::LiquidityAdded {
            amount_a,
            amount_b,
            shares_minted,
            ..
        } = added
        else {
            panic!("expected LiquidityAdded");
        };

        let Ok(removed) = pool.remove_liquidity(
            trader(),
            shares_minted,
            Amount::ZERO,
            Amount::ZERO,
            trader(),
            far_deadline(),
        ) else {
            panic!("minted shares must redeem");
        };
        let crate::events::PoolEvent::LiquidityRemoved {
            amount_a: back_a,
            amount_b: back_b,
            ..
        } = removed
        else {
            panic!("expected LiquidityRemoved");
        };

        prop_assert!(
            back_a <= amount_a && back_b <= amount_b,
            "redemption exceeded deposit: ({}, {}) > ({}, {})",
            back_a.get(), back_b.get(), amount_a.get(), amount_b.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Quote monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        a1 in amount_strategy(),
        a2 in amount_strategy(),
    ) {
        let (small, large) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
        let out_small = quote::amount_out(
            Amount::new(small),
            Amount::new(ra),
            Amount::new(rb),
        )
        .map_or(0, |a| a.get());
        let out_large = quote::amount_out(
            Amount::new(large),
            Amount::new(ra),
            Amount::new(rb),
        )
        .map_or(0, |a| a.get());

        prop_assert!(
            out_small <= out_large,
            "larger input paid less: {} > {}",
            out_small, out_large
        );
    }

    #[test]
    fn prop_quote_never_drains_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
    ) {
        let Ok(out) = quote::amount_out(
            Amount::new(amount_in),
            Amount::new(ra),
            Amount::new(rb),
        ) else {
            return Ok(());
        };
        prop_assert!(
            out.get() < rb,
            "quote emptied the output reserve: {} ≥ {}",
            out.get(), rb
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Price movement direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_selling_a_lowers_price_of_a(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in amount_strategy(),
    ) {
        let mut pool = seeded_pool(ra, rb);
        let Ok(price_before) = pool.get_price(asset_a(), asset_b()) else {
            return Ok(());
        };
        if swap_a_for_b(&mut pool, swap_in).is_none() {
            return Ok(());
        }
        let Ok(price_after) = pool.get_price(asset_a(), asset_b()) else {
            panic!("price must exist after a swap");
        };

        prop_assert!(
            price_after <= price_before,
            "selling A raised A's price: {} > {}",
            price_after.get(), price_before.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 7: Redemption payouts floor
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_redemption_never_exceeds_proportional_slice(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in 1u128..=100u128,
    ) {
        let mut pool = seeded_pool(ra, rb);
        let total = pool.total_shares().get();
        let burn = (total * fraction / 100).max(1);
        let (reserve_a, reserve_b) = (pool.reserve_a().get(), pool.reserve_b().get());

        let Ok(removed) = pool.remove_liquidity(
            provider(),
            Shares::new(burn),
            Amount::ZERO,
            Amount::ZERO,
            provider(),
            far_deadline(),
        ) else {
            return Ok(());
        };
        let crate::events::PoolEvent::LiquidityRemoved {
            amount_a, amount_b, ..
        } = removed
        else {
            panic!("expected LiquidityRemoved");
        };

        prop_assert!(amount_a.get() * total <= reserve_a * burn);
        prop_assert!(amount_b.get() * total <= reserve_b * burn);
    }
}

// ---------------------------------------------------------------------------
// Property 8: Integer square root bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_isqrt_bounds(n in any::<u128>()) {
        let root = quote::isqrt(n);
        prop_assert!(root.checked_mul(root).is_some_and(|sq| sq <= n));
        let next = root + 1;
        let upper = next.checked_mul(next);
        prop_assert!(
            upper.is_none() || upper.is_some_and(|sq| sq > n),
            "isqrt too small for {}",
            n
        );
    }
}
