//! # Duopool
//!
//! A two-asset constant-product exchange pool: matched-pair deposits
//! mint proportional ownership shares, shares redeem for proportional
//! slices of both reserves, and either asset swaps for the other at a
//! fee-free price derived solely from the reserve ratio.
//!
//! The pool follows the invariant `reserve_a × reserve_b = k`: a swap
//! of `in` units against reserves `(r_in, r_out)` pays out
//! `floor(in × r_out / (r_in + in))`, so the reserve product never
//! decreases. Every division floors in the pool's favour; rounding
//! residue accrues to existing share holders and is never paid out.
//!
//! Custody lives on an external fungible-asset ledger reached through
//! the [`gateway::LedgerGateway`] trait; the pool itself only tracks
//! reserves and the per-provider share book. Deadlines come from an
//! injected [`clock::Clock`], so time is deterministic under test.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on domain types and events |
//!
//! # Quick Start
//!
//! ```rust
//! use duopool::admin::AdminCap;
//! use duopool::clock::ManualClock;
//! use duopool::domain::{AccountId, Amount, AssetId, Timestamp};
//! use duopool::gateway::InMemoryLedger;
//! use duopool::pool::Pool;
//!
//! // 1. Two distinct fungible asset types and the participating accounts.
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let silver = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let pool_acct = AccountId::from_bytes([0xF0u8; 32]);
//!
//! // 2. Fund the ledger and authorize the pool to pull deposits.
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(gold, alice, Amount::new(10_000));
//! ledger.mint(silver, alice, Amount::new(10_000));
//! ledger.approve(gold, alice, pool_acct, Amount::new(10_000));
//! ledger.approve(silver, alice, pool_acct, Amount::new(10_000));
//!
//! // 3. Create the pool and seed it.
//! let clock = ManualClock::at(Timestamp::from_secs(100));
//! let mut pool =
//!     Pool::create(gold, silver, pool_acct, AdminCap::new(alice), ledger, clock)
//!         .expect("distinct assets");
//! pool.add_liquidity(
//!     alice,
//!     Amount::new(1_000),
//!     Amount::new(1_000),
//!     Amount::new(1),
//!     Amount::new(1),
//!     alice,
//!     Timestamp::from_secs(200),
//! )
//! .expect("deposit accepted");
//!
//! // 4. Swap 500 gold for silver at the constant-product price.
//! let event = pool
//!     .swap_exact(
//!         alice,
//!         Amount::new(500),
//!         Amount::new(1),
//!         gold,
//!         silver,
//!         alice,
//!         Timestamp::from_secs(200),
//!     )
//!     .expect("swap accepted");
//!
//! assert_eq!(pool.reserve_a(), Amount::new(1_500));
//! # let _ = event;
//! ```
//!
//! # Concurrency
//!
//! Mutating entry points take `&mut self`: one operation per pool at a
//! time, enforced at compile time. There is no re-entrant path back
//! into the pool while an operation is in flight, and state commits
//! only after every external transfer has succeeded.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`AssetId`](domain::AssetId), [`AssetPair`](domain::AssetPair), [`Shares`](domain::Shares), etc. |
//! | [`pool`] | [`Pool`](pool::Pool): deposits, redemptions, swaps, read-only getters |
//! | [`quote`] | Pure pricing math: [`amount_out`](quote::amount_out), [`spot_price`](quote::spot_price), [`isqrt`](quote::isqrt) |
//! | [`state`] | [`PoolState`](state::PoolState): reserves, share supply, per-provider share book |
//! | [`gateway`] | [`LedgerGateway`](gateway::LedgerGateway) custody trait and [`InMemoryLedger`](gateway::InMemoryLedger) |
//! | [`clock`] | [`Clock`](clock::Clock) time source, [`SystemClock`](clock::SystemClock), [`ManualClock`](clock::ManualClock) |
//! | [`events`] | [`PoolEvent`](events::PoolEvent) append-only history records |
//! | [`admin`] | [`AdminCap`](admin::AdminCap) administrative capability |
//! | [`error`] | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod admin;
pub mod clock;
pub mod domain;
pub mod error;
pub mod events;
pub mod gateway;
pub mod pool;
pub mod prelude;
pub mod quote;
pub mod state;

#[cfg(test)]
mod proptest_properties;
