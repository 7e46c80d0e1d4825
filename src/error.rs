//! Unified error types for the duopool library.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every `require`-like check in the pool surfaces a distinct,
//! caller-visible reason; nothing is silently ignored, and no failure
//! leaves a partially committed operation behind.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// Unified error enum for all pool operations.
///
/// Variants carrying a `&'static str` include a short description of the
/// exact check that failed, so two failures of the same kind at different
/// sites remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// The named assets do not form the pool's fixed pair.
    #[error("asset pair does not match the pool's fixed pair")]
    InvalidPair,

    /// The caller-supplied deadline lies in the past.
    #[error("operation deadline has passed")]
    Expired,

    /// A positive amount was required but zero was supplied or computed.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The computed share mint rounded down to zero.
    #[error("deposit too small to mint any shares")]
    ZeroSharesMinted,

    /// A final accepted amount fell below the caller's stated minimum.
    #[error("slippage bound violated: {0}")]
    SlippageExceeded(&'static str),

    /// The pool cannot satisfy the request: empty pool, zero reserve,
    /// over-burn, or a quote that rounds to nothing.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The external ledger gateway reported non-success.
    #[error("ledger transfer failed: {0}")]
    TransferFailed(&'static str),

    /// Checked `u128` arithmetic overflowed or underflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}
