//! Exact integer arithmetic for quote calculations.
//!
//! - Exact integer helpers: [`mul_div`], [`sqrt_product`] and [`isqrt`],
//!   plus big-integer conversions.
//! - [`div_round`] for `u128` division with an explicit [`Rounding`](crate::domain::Rounding).
//! - [`CheckedArithmetic`] for `Result`-returning arithmetic on domain types.
//! - The StableSwap invariant solver: [`compute_d`] and [`compute_y`].
//!
//! Nothing in this module uses floating point.

mod checked;
mod fixed_point;
mod invariant;
mod rounding;

pub use checked::CheckedArithmetic;
pub use fixed_point::{big, div_round_big, isqrt, mul_div, narrow, sqrt_product};
pub use invariant::{compute_d, compute_y, Solution, MAX_SOLVER_ITERATIONS};
pub use rounding::div_round;
