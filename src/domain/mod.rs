//! Fundamental domain value types used throughout the pool library.
//!
//! This module contains the core value types that model the exchange
//! domain: asset and account identifiers, amounts, share units,
//! timestamps, and the canonical asset pair. All types are newtypes
//! with validated constructors where invariants exist.

mod account;
mod amount;
mod asset_id;
mod asset_pair;
mod rounding;
mod shares;
mod timestamp;

pub use account::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use rounding::Rounding;
pub use shares::Shares;
pub use timestamp::Timestamp;
