//! Pool blueprints, ledger-state decoding and fee sizing.
//!
//! [`PoolConfig`] is the declarative, validated description of one pool
//! snapshot; [`GlobalState`] decodes it from a pool application's
//! tagged key-value state; [`ComputeBudget`] turns a quote's solver cost
//! into a transaction fee.

mod compute_budget;
mod global_state;
mod pool_config;

pub use compute_budget::ComputeBudget;
pub use global_state::{GlobalState, StateValue};
pub use pool_config::{PoolConfig, PoolIdentity};
