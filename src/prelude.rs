//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use duopool::prelude::*;
//! ```
//!
//! This re-exports the domain newtypes, the pool itself, the gateway and
//! clock traits with their in-memory implementations, the event and error
//! types, and the pure quoting functions, so that consumers don't need to
//! import from individual submodules.

// Re-export domain types
pub use crate::domain::{AccountId, Amount, AssetId, AssetPair, Rounding, Shares, Timestamp};

// Re-export the pool and its collaborators
pub use crate::admin::AdminCap;
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::gateway::{GatewayError, InMemoryLedger, LedgerGateway};
pub use crate::pool::Pool;

// Re-export events and state views
pub use crate::events::PoolEvent;
pub use crate::state::SwapDirection;

// Re-export pure pricing math
pub use crate::quote::{amount_out, spot_price, PRICE_SCALE};

// Re-export error types
pub use crate::error::{PoolError, Result};
