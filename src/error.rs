//! Unified error types for the quoting engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error is a deterministic consequence of the pool
//! snapshot and the request, so callers should surface it rather than
//! retry: a missing quote is always preferable to a wrong one.

use thiserror::Error;

/// Errors produced while building pool snapshots or computing quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The pool has no LP tokens in circulation.
    #[error("pool is empty: no LP tokens in circulation")]
    EmptyPool,

    /// The pool cannot supply the requested amount.
    #[error("insufficient liquidity in pool")]
    InsufficientLiquidity,

    /// The asset id does not belong to the pool.
    #[error("invalid asset pair: {0}")]
    InvalidAssetPair(&'static str),

    /// A Newton or bisection search exhausted its iteration cap.
    #[error("search did not converge: {0}")]
    NonConvergence(&'static str),

    /// An amount is outside the domain the operation accepts.
    #[error("domain violation: {0}")]
    DomainViolation(&'static str),

    /// An intermediate result does not fit the target type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would go negative.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A pool blueprint or decoded ledger state failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
