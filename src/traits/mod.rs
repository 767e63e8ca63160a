//! Core trait abstractions.
//!
//! [`Invariant`] is the seam between the shared quote logic and each pool
//! family's curve; [`FromConfig`] is the validated construction path for
//! pool snapshots.

mod from_config;
mod invariant;

pub use from_config::FromConfig;
pub use invariant::Invariant;
