//! Canonically ordered pair of distinct assets.

use super::AssetId;
use crate::error::PoolError;

/// An unordered pair of distinct assets stored in canonical order.
///
/// The canonical ordering guarantees `asset_a() < asset_b()`
/// lexicographically, so storage layout and every pricing calculation
/// are independent of caller-supplied argument order. The roles "A" and
/// "B" are fixed for the pair's lifetime.
///
/// # Examples
///
/// ```
/// use duopool::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([2u8; 32]);
/// let y = AssetId::from_bytes([1u8; 32]);
///
/// // Order is enforced automatically:
/// let pair = AssetPair::new(x, y).expect("distinct assets");
/// assert_eq!(pair.asset_a(), y);
/// assert_eq!(pair.asset_b(), x);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new canonically ordered `AssetPair`.
    ///
    /// The two assets are sorted so that `asset_a < asset_b`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPair`] if both identifiers are equal.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, PoolError> {
        if first == second {
            return Err(PoolError::InvalidPair);
        }

        let (asset_a, asset_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A (the lower-sorted identifier).
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns asset B (the higher-sorted identifier).
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Succeeds iff `{x, y}` equals this pair as an unordered pair.
    ///
    /// Every public entry point that names assets calls this first, so
    /// callers may pass the pair in either order.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPair`] otherwise.
    pub fn validate(&self, x: &AssetId, y: &AssetId) -> Result<(), PoolError> {
        let matches_forward = *x == self.asset_a && *y == self.asset_b;
        let matches_reverse = *x == self.asset_b && *y == self.asset_a;
        if matches_forward || matches_reverse {
            Ok(())
        } else {
            Err(PoolError::InvalidPair)
        }
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidPair`] if `asset` is not a member.
    pub fn other(&self, asset: &AssetId) -> Result<AssetId, PoolError> {
        if *asset == self.asset_a {
            Ok(self.asset_b)
        } else if *asset == self.asset_b {
            Ok(self.asset_a)
        } else {
            Err(PoolError::InvalidPair)
        }
    }
}
