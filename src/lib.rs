//! # Hydra Quote
//!
//! Off-ledger quoting engine for two-asset AMM pools.
//!
//! Given a snapshot of a pool's on-chain state, this crate predicts the
//! amounts, LP tokens and solver cost of every pool operation exactly as
//! the authoritative ledger program will compute them, using integer
//! arithmetic with the program's own rounding. Four pool families are
//! supported:
//!
//! - **Constant Product**, low and high fee tiers (`x · y = k`)
//! - **StableSwap** with a time-ramped amplification coefficient
//! - **StableSwap Moving Ratio**, which also ramps asset 1's target price
//!
//! Quotes never read the wall clock: every call takes an explicit
//! timestamp at which ramps are evaluated, so the same snapshot and
//! timestamp always produce the same quote.
//!
//! ## Quote a swap
//!
//! ```rust
//! use hydra_quote::config::{PoolConfig, PoolIdentity};
//! use hydra_quote::domain::{Amount, AssetId, PoolId, PoolType, Timestamp};
//! use hydra_quote::pool::{AmplificationSchedule, PoolState};
//! use hydra_quote::quote::QuoteEngine;
//! use hydra_quote::traits::FromConfig;
//!
//! // 1. Describe the pool as read from the ledger
//! let identity = PoolIdentity::new(PoolId::new(77), AssetId::new(1), AssetId::new(2), AssetId::new(3));
//! let config = PoolConfig::new(identity, PoolType::StableSwap)
//!     .with_balances(Amount::new(1_000_000), Amount::new(1_000_000), Amount::new(2_000_000))
//!     .with_amplification(AmplificationSchedule::fixed(100));
//!
//! // 2. Build the snapshot (validates the blueprint)
//! let Ok(pool) = PoolState::from_config(&config) else { panic!("valid pool") };
//!
//! // 3. Quote a swap as of a fixed instant
//! let engine = QuoteEngine::new(&pool, Timestamp::from_secs(1_700_000_000));
//! let Ok(quote) = engine.swap_exact_for_quote(AssetId::new(1), Amount::new(1_000)) else {
//!     panic!("swap quote");
//! };
//!
//! assert_eq!(quote.asset1_delta(), -1_000);
//! assert!(quote.asset2_delta() > 990);
//! assert!(quote.solver_iterations() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ GlobalState  │  tagged key-value ledger state
//! └──────┬───────┘
//!        │ decode
//!        ▼
//! ┌──────────────┐
//! │  PoolConfig  │  validated blueprint
//! └──────┬───────┘
//!        │ FromConfig
//!        ▼
//! ┌──────────────┐
//! │  PoolState   │  snapshot + schedules, resolves a CurveBox at `as_of`
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐      ┌─────────────┐
//! │ QuoteEngine  │◀────▶│  ZapSolver  │
//! └──────┬───────┘      └─────────────┘
//!        │ Invariant trait
//!        ▼
//! ┌──────────────┐
//! │    Curves    │  ConstantProduct, StableSwap (compute_d / compute_y)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`Quote`](domain::Quote), etc. |
//! | [`math`] | Exact integer helpers and the StableSwap invariant solver |
//! | [`traits`] | [`Invariant`](traits::Invariant) curve seam and [`FromConfig`](traits::FromConfig) |
//! | [`curves`] | Per-family curves and the [`CurveBox`](curves::CurveBox) dispatch enum |
//! | [`pool`] | [`PoolState`](pool::PoolState) snapshots and ramp schedules |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), [`GlobalState`](config::GlobalState) decoding, [`ComputeBudget`](config::ComputeBudget) |
//! | [`quote`] | [`QuoteEngine`](quote::QuoteEngine) and [`ZapSolver`](quote::ZapSolver) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod curves;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod quote;
pub mod traits;
