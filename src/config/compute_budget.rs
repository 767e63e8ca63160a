//! Transaction fee sizing from a quote's solver cost.

use crate::domain::Quote;
use crate::error::{AmmError, Result};

/// Linear fee schedule for the ledger transaction that executes a quote.
///
/// Every Newton or bisection step the ledger program repeats must be
/// pre-paid, so the fee is `base_fee + solver_iterations · per_iteration_fee`.
/// Underpaying makes the transaction fail; overpaying wastes funds.
///
/// # Examples
///
/// ```
/// use hydra_quote::config::ComputeBudget;
/// use hydra_quote::domain::{Quote, QuoteKind};
///
/// let budget = ComputeBudget::new(2_000, 1_000);
/// let quote = Quote::new(QuoteKind::SwapExactFor, -1_000, 990, 0, 7);
/// assert_eq!(budget.fee_for(&quote), Ok(9_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputeBudget {
    base_fee: u64,
    per_iteration_fee: u64,
}

impl ComputeBudget {
    /// Creates a fee schedule.
    #[must_use]
    pub const fn new(base_fee: u64, per_iteration_fee: u64) -> Self {
        Self {
            base_fee,
            per_iteration_fee,
        }
    }

    /// Fee charged regardless of solver cost.
    #[must_use]
    pub const fn base_fee(&self) -> u64 {
        self.base_fee
    }

    /// Fee charged per solver iteration.
    #[must_use]
    pub const fn per_iteration_fee(&self) -> u64 {
        self.per_iteration_fee
    }

    /// Fee for `iterations` solver steps.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the fee exceeds `u64`.
    pub fn fee_for_iterations(&self, iterations: u32) -> Result<u64> {
        self.per_iteration_fee
            .checked_mul(u64::from(iterations))
            .and_then(|v| v.checked_add(self.base_fee))
            .ok_or(AmmError::Overflow("compute fee overflow"))
    }

    /// Fee for executing `quote`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the fee exceeds `u64`.
    pub fn fee_for(&self, quote: &Quote) -> Result<u64> {
        self.fee_for_iterations(quote.solver_iterations())
    }
}

impl Default for ComputeBudget {
    /// One minimum ledger fee (1 000 base units) for the call plus one per iteration.
    fn default() -> Self {
        Self::new(1_000, 1_000)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::QuoteKind;

    #[test]
    fn zero_iterations_costs_base_fee() {
        let budget = ComputeBudget::default();
        assert_eq!(budget.fee_for(&Quote::zero(QuoteKind::Zap)), Ok(1_000));
    }

    #[test]
    fn linear_in_iterations() {
        let budget = ComputeBudget::new(500, 250);
        assert_eq!(budget.fee_for_iterations(4), Ok(1_500));
    }

    #[test]
    fn overflow_reported() {
        let budget = ComputeBudget::new(u64::MAX, 1);
        let Err(AmmError::Overflow(_)) = budget.fee_for_iterations(1) else {
            panic!("expected Overflow");
        };
    }
}
