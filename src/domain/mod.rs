//! Fundamental domain value types used throughout the quoting engine.
//!
//! Amounts, fees, identifiers, timestamps, pool families and the
//! [`Quote`] result type. All types are small `Copy` newtypes or enums
//! so pool snapshots and quotes can be passed by value.

mod amount;
mod asset_id;
mod basis_points;
mod pool_type;
mod quote;
mod rounding;
mod side;
mod timestamp;

pub use amount::Amount;
pub use asset_id::{AssetId, PoolId};
pub use basis_points::BasisPoints;
pub use pool_type::PoolType;
pub use quote::{Quote, QuoteKind};
pub use rounding::Rounding;
pub use side::Side;
pub use timestamp::Timestamp;
