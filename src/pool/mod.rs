//! Pool snapshots and their time-ramped parameters.
//!
//! A [`PoolState`] is built fresh for every quote request from ledger
//! state and consumed read-only. The StableSwap amplification and the
//! moving-ratio target ratio are kept as schedules and resolved against
//! the quote's explicit timestamp, never against the wall clock.

mod schedule;
mod state;

pub use schedule::{AmplificationSchedule, TargetRatioSchedule, RATIO_SCALE};
pub use state::PoolState;
