//! StableSwap curve, with optional asset-1 ratio rescaling.
//!
//! Prices through the invariant solver in [`crate::math`]. For the
//! moving-ratio variant asset 1 is rescaled before every solve:
//!
//! ```text
//! scaled₁ = floor(x₁ · ratio / RATIO_SCALE)
//! ```
//!
//! and any asset-1 amount coming out of a solve is mapped back with the
//! inverse, `floor(s · RATIO_SCALE / ratio)` for outputs and the ceiling
//! for required inputs. Plain StableSwap pools use a ratio of exactly
//! `RATIO_SCALE`, which makes both maps the identity.
//!
//! # Swap Algorithm
//!
//! 1. `D = compute_d(scaled balances)`.
//! 2. Replace the input balance by `x_in + Δx` (rescaled if asset 1).
//! 3. `y = compute_y(...)` for the output balance at the same `D`.
//! 4. `out = scaled_out − y − 1`, floored at zero and mapped back.

use crate::domain::{Rounding, Side};
use crate::error::AmmError;
use crate::math::{compute_d, compute_y, mul_div, Solution};
use crate::pool::RATIO_SCALE;
use crate::traits::Invariant;

/// StableSwap pricing at a fixed amplification and target ratio.
///
/// Built by [`PoolState::curve`](crate::pool::PoolState::curve) with the
/// ramped parameters already evaluated at the quote's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableSwapCurve {
    amplification: u64,
    ratio: u128,
}

impl StableSwapCurve {
    /// A curve over two equally weighted assets.
    #[must_use]
    pub const fn new(amplification: u64) -> Self {
        Self {
            amplification,
            ratio: RATIO_SCALE,
        }
    }

    /// A curve whose asset 1 is rescaled by `ratio / RATIO_SCALE`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DomainViolation`] if `ratio` is zero.
    pub const fn with_ratio(amplification: u64, ratio: u128) -> Result<Self, AmmError> {
        if ratio == 0 {
            return Err(AmmError::DomainViolation("target ratio must be positive"));
        }
        Ok(Self {
            amplification,
            ratio,
        })
    }

    /// The amplification coefficient in force.
    #[must_use]
    pub const fn amplification(&self) -> u64 {
        self.amplification
    }

    /// The asset-1 target ratio in force, scaled by [`RATIO_SCALE`].
    #[must_use]
    pub const fn ratio(&self) -> u128 {
        self.ratio
    }

    fn is_rescaled(&self) -> bool {
        self.ratio != RATIO_SCALE
    }

    /// Maps a raw amount of `side` into invariant units.
    fn to_invariant(&self, side: Side, amount: u128, rounding: Rounding) -> Result<u128, AmmError> {
        match side {
            Side::First if self.is_rescaled() => mul_div(amount, self.ratio, RATIO_SCALE, rounding),
            _ => Ok(amount),
        }
    }

    /// Maps an amount of `side` in invariant units back to raw units.
    fn from_invariant(
        &self,
        side: Side,
        amount: u128,
        rounding: Rounding,
    ) -> Result<u128, AmmError> {
        match side {
            Side::First if self.is_rescaled() => mul_div(amount, RATIO_SCALE, self.ratio, rounding),
            _ => Ok(amount),
        }
    }

    fn scaled(&self, balances: [u128; 2]) -> Result<[u128; 2], AmmError> {
        Ok([
            self.to_invariant(Side::First, balances[0], Rounding::Down)?,
            balances[1],
        ])
    }

    fn solve_d(&self, scaled: &[u128; 2]) -> Result<Solution, AmmError> {
        compute_d(scaled, self.amplification)
    }
}

fn total(a: u32, b: u32) -> Result<u32, AmmError> {
    a.checked_add(b)
        .ok_or(AmmError::Overflow("solver iteration count overflow"))
}

impl Invariant for StableSwapCurve {
    fn seed_liquidity(&self, amounts: [u128; 2]) -> Result<Solution, AmmError> {
        self.solve_d(&self.scaled(amounts)?)
    }

    fn mint_liquidity(
        &self,
        balances: [u128; 2],
        deposits: [u128; 2],
        lp_circulation: u128,
    ) -> Result<Solution, AmmError> {
        let after = [
            balances[0]
                .checked_add(deposits[0])
                .ok_or(AmmError::Overflow("balance1 overflow on deposit"))?,
            balances[1]
                .checked_add(deposits[1])
                .ok_or(AmmError::Overflow("balance2 overflow on deposit"))?,
        ];
        let d0 = self.solve_d(&self.scaled(balances)?)?;
        let d1 = self.solve_d(&self.scaled(after)?)?;
        if d0.value() == 0 {
            return Err(AmmError::DivisionByZero);
        }
        // Newton tolerance can leave d1 a unit below d0 for dust deposits.
        let growth = d1.value().saturating_sub(d0.value());
        let mut issued = mul_div(lp_circulation, growth, d0.value(), Rounding::Down)?;
        // Scaling floors and solver tolerance may overstate growth; never
        // issue more than the pro-rata share of either deposit.
        for (balance, deposit) in balances.into_iter().zip(deposits) {
            if balance > 0 {
                issued = issued.min(mul_div(lp_circulation, deposit, balance, Rounding::Down)?);
            }
        }
        Ok(Solution::new(
            issued,
            total(d0.iterations(), d1.iterations())?,
        ))
    }

    fn output_given_input(
        &self,
        balances: [u128; 2],
        input: Side,
        amount_less_fee: u128,
    ) -> Result<Solution, AmmError> {
        let output = input.other();
        let scaled = self.scaled(balances)?;
        let new_raw_in = balances[input.index()]
            .checked_add(amount_less_fee)
            .ok_or(AmmError::Overflow("reserve_in overflow"))?;
        let new_in = self.to_invariant(input, new_raw_in, Rounding::Down)?;

        let d = self.solve_d(&scaled)?;
        let y = compute_y(
            input.index(),
            output.index(),
            new_in,
            &scaled,
            d.value(),
            self.amplification,
        )?;

        let scaled_out = scaled[output.index()]
            .saturating_sub(y.value())
            .saturating_sub(1);
        let out = self.from_invariant(output, scaled_out, Rounding::Down)?;
        Ok(Solution::new(out, total(d.iterations(), y.iterations())?))
    }

    fn input_given_output(
        &self,
        balances: [u128; 2],
        output: Side,
        amount_out: u128,
    ) -> Result<Solution, AmmError> {
        let input = output.other();
        let scaled = self.scaled(balances)?;
        let scaled_amount = self.to_invariant(output, amount_out, Rounding::Up)?;
        // the guard unit is charged on the input side only
        let new_out = scaled[output.index()]
            .checked_sub(scaled_amount)
            .filter(|v| *v > 0)
            .ok_or(AmmError::DomainViolation(
                "output would drain the pool balance",
            ))?;

        let d = self.solve_d(&scaled)?;
        let x = compute_y(
            output.index(),
            input.index(),
            new_out,
            &scaled,
            d.value(),
            self.amplification,
        )?;

        let scaled_in = x
            .value()
            .saturating_sub(scaled[input.index()])
            .checked_add(1)
            .ok_or(AmmError::Overflow("required input overflow"))?;
        let needed = self.from_invariant(input, scaled_in, Rounding::Up)?;
        Ok(Solution::new(needed, total(d.iterations(), x.iterations())?))
    }
}
