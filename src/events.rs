//! Append-only records of successful pool operations.

use crate::domain::{AccountId, Amount, AssetId, Shares};

/// A record produced as the byproduct of one successful mutating
/// operation. Events are appended to the pool's history and never
/// mutated or deleted afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// A matched-pair deposit minted shares.
    LiquidityAdded {
        /// Account whose assets were pulled.
        provider: AccountId,
        /// Accepted amount of asset A.
        amount_a: Amount,
        /// Accepted amount of asset B.
        amount_b: Amount,
        /// Shares credited to the recipient.
        shares_minted: Shares,
    },
    /// Shares were redeemed for a proportional slice of reserves.
    LiquidityRemoved {
        /// Account the redeemed assets were pushed to.
        receiver: AccountId,
        /// Shares burned.
        shares_burned: Shares,
        /// Asset A returned.
        amount_a: Amount,
        /// Asset B returned.
        amount_b: Amount,
    },
    /// One asset was traded for the other.
    Swapped {
        /// Account the input was pulled from.
        sender: AccountId,
        /// Asset sold to the pool.
        asset_in: AssetId,
        /// Asset bought from the pool.
        asset_out: AssetId,
        /// Input quantity.
        amount_in: Amount,
        /// Output quantity.
        amount_out: Amount,
        /// Account the output was pushed to.
        recipient: AccountId,
    },
}
