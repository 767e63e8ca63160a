//! Balancing search for single-sided deposits.
//!
//! A zap deposits arbitrary amounts `(a₁, a₂)`. Pooling them directly
//! would leave the over-represented asset behind, so part of it, `dx`, is
//! first swapped for the other asset. `dx` is chosen so that what remains
//! matches the pool's ratio *after* that swap:
//!
//! ```text
//! (this − dx) / (thisBalance + dx)  =  (other + out(dx)) / (otherBalance − out(dx))
//! ```
//!
//! # Search
//!
//! Integer bisection over `dx ∈ [0, this]`, run as a bounded loop. The sign
//! of the difference of the two sides is compared by cross-multiplying in
//! arbitrary precision, so no division rounds the decision. When the
//! bracket closes without an exact hit the lower bound is taken: the
//! result is best effort, and the deposit leg absorbs the last unit of
//! imbalance.
//!
//! Every probe runs a full swap pricing, so for StableSwap pools each
//! bisection step also costs Newton iterations. Both are reported.

use core::cmp::Ordering;

use super::QuoteEngine;
use crate::domain::{Amount, Quote, QuoteKind, Side};
use crate::error::{AmmError, Result};
use crate::math::{big, CheckedArithmetic};
use crate::pool::PoolState;

/// Upper bound on bisection steps; enough to bisect the whole `u128` range.
pub const MAX_BISECTION_STEPS: u32 = 128;

/// Outcome of the bisection: the swap amount and the cost of finding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Search {
    swap_in: Amount,
    steps: u32,
    solver_iterations: u32,
}

/// Finds the balancing swap of a zap and composes the swap and deposit legs.
#[derive(Debug, Clone, Copy)]
pub struct ZapSolver<'a> {
    engine: QuoteEngine<'a>,
    step_limit: u32,
}

impl<'a> ZapSolver<'a> {
    /// Binds the solver to an engine (and so to its snapshot and timestamp).
    #[must_use]
    pub const fn new(engine: QuoteEngine<'a>) -> Self {
        Self {
            engine,
            step_limit: MAX_BISECTION_STEPS,
        }
    }

    /// Lowers the bisection step limit below [`MAX_BISECTION_STEPS`].
    #[must_use]
    pub const fn with_step_limit(mut self, limit: u32) -> Self {
        if limit < MAX_BISECTION_STEPS {
            self.step_limit = limit;
        }
        self
    }

    /// Quotes a zap of `amount1` and `amount2`.
    ///
    /// The returned quote has kind [`QuoteKind::Zap`]; its asset and LP
    /// deltas describe the deposit leg and its `zap_*` deltas the balancing
    /// swap. Its iteration count sums bisection steps, the solver
    /// iterations of every probe, the final swap and the deposit.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if no LP tokens are outstanding.
    /// - [`AmmError::NonConvergence`] if the bisection exceeds its step limit.
    /// - [`AmmError::DomainViolation`] if the balanced remainder is too
    ///   small to deposit or to mint LP tokens.
    /// - Solver and arithmetic errors.
    pub fn solve(&self, amount1: Amount, amount2: Amount) -> Result<Quote> {
        if amount1.is_zero() && amount2.is_zero() {
            return Ok(Quote::zero(QuoteKind::Zap));
        }
        self.engine.ensure_funded()?;

        let amounts = [amount1, amount2];
        let (swap, search_cost) = match self.over_represented(amounts) {
            Some(side) => {
                let search = self.bisect(side, amounts[side.index()], amounts[side.other().index()])?;
                let cost = search
                    .steps
                    .checked_add(search.solver_iterations)
                    .ok_or(AmmError::Overflow("solver iteration count overflow"))?;
                (self.balancing_swap(side, search.swap_in)?, cost)
            }
            None => (Quote::zero(QuoteKind::SwapExactFor), 0),
        };

        let post = self.engine.pool().apply(&swap)?;
        let remaining1 = remainder(amount1, swap.asset1_delta())?;
        let remaining2 = remainder(amount2, swap.asset2_delta())?;
        let deposit = self.deposit_leg(&post, remaining1, remaining2)?;

        let quote = Quote::new(
            QuoteKind::Zap,
            deposit.asset1_delta(),
            deposit.asset2_delta(),
            deposit.lp_delta(),
            0,
        )
        .with_zap_swap(swap.asset1_delta(), swap.asset2_delta())
        .with_extra_iterations(search_cost)?
        .with_extra_iterations(swap.solver_iterations())?
        .with_extra_iterations(deposit.solver_iterations())?;
        Ok(quote)
    }

    /// The side whose share of the deposit exceeds its share of the pool,
    /// or `None` when the deposit already matches the pool ratio.
    fn over_represented(&self, amounts: [Amount; 2]) -> Option<Side> {
        let [balance1, balance2] = self.engine.pool().balances();
        let lhs = big(amounts[0].get()) * big(balance2);
        let rhs = big(amounts[1].get()) * big(balance1);
        match lhs.cmp(&rhs) {
            Ordering::Greater => Some(Side::First),
            Ordering::Less => Some(Side::Second),
            Ordering::Equal => None,
        }
    }

    /// Bisects the amount of `this` side to swap.
    fn bisect(&self, this: Side, this_amount: Amount, other_amount: Amount) -> Result<Search> {
        let mut lower = 0u128;
        let mut upper = this_amount.get();
        let mut steps = 0u32;
        let mut solver_iterations = 0u32;

        let found = loop {
            if lower > upper {
                tracing::trace!(steps, swap_in = lower, "zap bisection closed without exact hit");
                break lower;
            }
            if steps == self.step_limit {
                return Err(AmmError::NonConvergence(
                    "zap bisection exceeded its step limit",
                ));
            }
            steps += 1;

            let mid = lower + (upper - lower) / 2;
            let (ordering, iterations) =
                self.imbalance(this, this_amount, other_amount, Amount::new(mid))?;
            solver_iterations = solver_iterations
                .checked_add(iterations)
                .ok_or(AmmError::Overflow("solver iteration count overflow"))?;

            match ordering {
                Ordering::Less => lower = mid.saturating_add(1),
                Ordering::Greater if mid == 0 => break 0,
                Ordering::Greater => upper = mid - 1,
                Ordering::Equal => {
                    tracing::trace!(steps, swap_in = mid, "zap bisection hit exact balance");
                    break mid;
                }
            }
        };

        Ok(Search {
            swap_in: Amount::new(found.min(this_amount.get())),
            steps,
            solver_iterations,
        })
    }

    /// Compares the other side's post-swap share with this side's.
    ///
    /// `Less` means too little was swapped, `Greater` too much.
    fn imbalance(
        &self,
        this: Side,
        this_amount: Amount,
        other_amount: Amount,
        swap_in: Amount,
    ) -> Result<(Ordering, u32)> {
        let pool = self.engine.pool();
        let out = self.engine.swap_output(this, swap_in)?;
        let this_balance = pool.balance(this).get();
        let other_balance = pool.balance(this.other()).get();

        let other_left = other_balance.saturating_sub(out.value());
        let lhs = (big(other_amount.get()) + big(out.value())) * (big(this_balance) + big(swap_in.get()));
        let rhs = big(this_amount.get() - swap_in.get()) * big(other_left);
        Ok((lhs.cmp(&rhs), out.iterations()))
    }

    /// The exact-input swap of `swap_in` of `this`, or a zero swap when it
    /// would produce nothing.
    fn balancing_swap(&self, this: Side, swap_in: Amount) -> Result<Quote> {
        if swap_in.is_zero() {
            return Ok(Quote::zero(QuoteKind::SwapExactFor));
        }
        let out = self.engine.swap_output(this, swap_in)?;
        if out.value() == 0 {
            return Ok(Quote::zero(QuoteKind::SwapExactFor));
        }
        self.engine
            .swap(this, swap_in, Amount::new(out.value()), out.iterations())
    }

    /// Deposits as much of the remainder as the post-swap ratio allows,
    /// driven by whichever asset runs out first.
    fn deposit_leg(
        &self,
        post: &PoolState,
        remaining1: Amount,
        remaining2: Amount,
    ) -> Result<Quote> {
        let engine = self.engine.rebind(post);
        let asset1 = post.asset(Side::First);
        let asset2 = post.asset(Side::Second);
        if remaining1.is_zero() {
            return engine.pool_quote(asset2, nonzero(remaining2)?);
        }
        let by_first = engine.pool_quote(asset1, remaining1)?;
        if by_first.asset2_delta().unsigned_abs() <= remaining2.get() {
            return Ok(by_first);
        }
        engine.pool_quote(asset2, nonzero(remaining2)?)
    }
}

fn nonzero(remaining: Amount) -> Result<Amount> {
    if remaining.is_zero() {
        return Err(AmmError::DomainViolation("zap remainder too small to deposit"));
    }
    Ok(remaining)
}

/// What is left of `amount` after the caller's holdings move by `delta`.
fn remainder(amount: Amount, delta: i128) -> Result<Amount> {
    let magnitude = Amount::new(delta.unsigned_abs());
    if delta < 0 {
        amount.safe_sub(&magnitude)
    } else {
        amount.safe_add(&magnitude)
    }
}
