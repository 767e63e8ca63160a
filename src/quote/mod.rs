//! Quote computation.
//!
//! [`QuoteEngine`] prices every pool operation against one snapshot at one
//! timestamp. [`ZapSolver`] composes the engine's swap and deposit quotes
//! into a single-sided deposit.
//!
//! | Operation | Method | Solver cost |
//! |-----------|--------|-------------|
//! | Seed an empty pool | [`QuoteEngine::empty_pool_quote`] | one `D` (StableSwap) |
//! | Proportional deposit | [`QuoteEngine::pool_quote`] | two `D` (StableSwap) |
//! | Withdrawal | [`QuoteEngine::burn_quote`] | none |
//! | Exact-input swap | [`QuoteEngine::swap_exact_for_quote`] | `D` + `y` (StableSwap) |
//! | Exact-output swap | [`QuoteEngine::swap_for_exact_quote`] | `D` + `y` (StableSwap) |
//! | Zap | [`QuoteEngine::zap_quote`] | bisection steps + every probe + final legs |

mod engine;
mod zap;

pub use engine::QuoteEngine;
pub use zap::{ZapSolver, MAX_BISECTION_STEPS};

#[cfg(test)]
mod proptest_properties;
