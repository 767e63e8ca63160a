//! Predicted outcome of a single pool operation.

use core::fmt;

use super::Side;
use crate::error::AmmError;

/// The operation a [`Quote`] predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// Deposit of both assets in exchange for LP tokens.
    Pool,
    /// Redemption of LP tokens for both assets.
    Burn,
    /// Swap of a fixed input amount.
    SwapExactFor,
    /// Swap for a fixed output amount.
    SwapForExact,
    /// Single-sided deposit: a balancing swap followed by a deposit.
    Zap,
}

/// The result of one engine call.
///
/// Deltas are signed from the caller's point of view: negative amounts are
/// paid into the pool, positive amounts are received. For [`QuoteKind::Zap`]
/// the `asset*_delta` and `lp_delta` fields describe the deposit leg and the
/// `zap_asset*_swap_delta` fields describe the balancing swap that precedes
/// it.
///
/// `solver_iterations` is the total number of Newton and bisection steps
/// consumed. The ledger charges compute per iteration, so this count sizes
/// the transaction fee budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Quote {
    kind: QuoteKind,
    asset1_delta: i128,
    asset2_delta: i128,
    lp_delta: i128,
    solver_iterations: u32,
    zap_asset1_swap_delta: i128,
    zap_asset2_swap_delta: i128,
}

impl Quote {
    /// Creates a quote without a zap swap leg.
    pub const fn new(
        kind: QuoteKind,
        asset1_delta: i128,
        asset2_delta: i128,
        lp_delta: i128,
        solver_iterations: u32,
    ) -> Self {
        Self {
            kind,
            asset1_delta,
            asset2_delta,
            lp_delta,
            solver_iterations,
            zap_asset1_swap_delta: 0,
            zap_asset2_swap_delta: 0,
        }
    }

    /// A quote of the given kind in which nothing moves.
    pub const fn zero(kind: QuoteKind) -> Self {
        Self::new(kind, 0, 0, 0, 0)
    }

    /// Attaches the balancing swap leg of a zap.
    pub const fn with_zap_swap(mut self, asset1_delta: i128, asset2_delta: i128) -> Self {
        self.zap_asset1_swap_delta = asset1_delta;
        self.zap_asset2_swap_delta = asset2_delta;
        self
    }

    /// Adds `extra` iterations to the reported solver cost.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the total exceeds `u32::MAX`.
    pub fn with_extra_iterations(mut self, extra: u32) -> crate::error::Result<Self> {
        self.solver_iterations = self
            .solver_iterations
            .checked_add(extra)
            .ok_or(AmmError::Overflow("solver iteration count overflow"))?;
        Ok(self)
    }

    /// The operation this quote predicts.
    #[must_use]
    pub const fn kind(&self) -> QuoteKind {
        self.kind
    }

    /// Signed change of the caller's asset 1 holdings.
    #[must_use]
    pub const fn asset1_delta(&self) -> i128 {
        self.asset1_delta
    }

    /// Signed change of the caller's asset 2 holdings.
    #[must_use]
    pub const fn asset2_delta(&self) -> i128 {
        self.asset2_delta
    }

    /// Signed delta for the given side.
    #[must_use]
    pub const fn delta(&self, side: Side) -> i128 {
        match side {
            Side::First => self.asset1_delta,
            Side::Second => self.asset2_delta,
        }
    }

    /// Signed change of the caller's LP token holdings.
    #[must_use]
    pub const fn lp_delta(&self) -> i128 {
        self.lp_delta
    }

    /// Newton and bisection steps consumed to produce this quote.
    #[must_use]
    pub const fn solver_iterations(&self) -> u32 {
        self.solver_iterations
    }

    /// Asset 1 delta of the zap's balancing swap.
    #[must_use]
    pub const fn zap_asset1_swap_delta(&self) -> i128 {
        self.zap_asset1_swap_delta
    }

    /// Asset 2 delta of the zap's balancing swap.
    #[must_use]
    pub const fn zap_asset2_swap_delta(&self) -> i128 {
        self.zap_asset2_swap_delta
    }

    /// Returns `true` if no amount moves and no iterations were spent.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.asset1_delta == 0
            && self.asset2_delta == 0
            && self.lp_delta == 0
            && self.solver_iterations == 0
            && self.zap_asset1_swap_delta == 0
            && self.zap_asset2_swap_delta == 0
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: asset1 {:+}, asset2 {:+}, lp {:+} ({} iterations)",
            self.kind, self.asset1_delta, self.asset2_delta, self.lp_delta, self.solver_iterations
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn zero_quote() {
        let q = Quote::zero(QuoteKind::Zap);
        assert!(q.is_zero());
        assert_eq!(q.kind(), QuoteKind::Zap);
    }

    #[test]
    fn zap_leg_is_not_zero() {
        let q = Quote::zero(QuoteKind::Zap).with_zap_swap(-10, 9);
        assert!(!q.is_zero());
        assert_eq!(q.zap_asset1_swap_delta(), -10);
        assert_eq!(q.zap_asset2_swap_delta(), 9);
    }

    #[test]
    fn delta_by_side() {
        let q = Quote::new(QuoteKind::Burn, 5, 7, -3, 0);
        assert_eq!(q.delta(Side::First), 5);
        assert_eq!(q.delta(Side::Second), 7);
    }

    #[test]
    fn extra_iterations_overflow() {
        let q = Quote::new(QuoteKind::Pool, 0, 0, 0, u32::MAX);
        let Err(AmmError::Overflow(_)) = q.with_extra_iterations(1) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn display() {
        let q = Quote::new(QuoteKind::SwapExactFor, -1_000, 995, 0, 0);
        assert_eq!(
            q.to_string(),
            "SwapExactFor: asset1 -1000, asset2 +995, lp +0 (0 iterations)"
        );
    }
}
