//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_quote::prelude::*;
//! ```

pub use crate::config::{ComputeBudget, GlobalState, PoolConfig, PoolIdentity};
pub use crate::domain::{
    Amount, AssetId, BasisPoints, PoolId, PoolType, Quote, QuoteKind, Rounding, Side, Timestamp,
};
pub use crate::error::{AmmError, Result};
pub use crate::pool::{AmplificationSchedule, PoolState, TargetRatioSchedule, RATIO_SCALE};
pub use crate::quote::{QuoteEngine, ZapSolver};
pub use crate::traits::{FromConfig, Invariant};
