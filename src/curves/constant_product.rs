//! Constant-product curve (`x · y = k`).
//!
//! Every quantity has a closed form, so no solver iterations are spent:
//!
//! ```text
//! seed LP  = floor(√a₁ · √a₂)
//! mint LP  = floor(d₁ · L / x₁)
//! out      = floor(y · Δx / (x + Δx))
//! in       = ceil(x · Δy / (y − Δy)) + 1
//! ```
//!
//! The `+ 1` on the required input mirrors the `- 1` guard applied to the
//! post-fee input of an exact-input swap, so an exact-output quote never
//! asks for less than the ledger program would accept.

use crate::domain::{Rounding, Side};
use crate::error::AmmError;
use crate::math::{mul_div, sqrt_product, Solution};
use crate::traits::Invariant;

/// Closed-form pricing for constant-product pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstantProductCurve;

impl Invariant for ConstantProductCurve {
    fn seed_liquidity(&self, amounts: [u128; 2]) -> Result<Solution, AmmError> {
        Ok(Solution::new(sqrt_product(amounts[0], amounts[1])?, 0))
    }

    fn mint_liquidity(
        &self,
        balances: [u128; 2],
        deposits: [u128; 2],
        lp_circulation: u128,
    ) -> Result<Solution, AmmError> {
        let issued = mul_div(deposits[0], lp_circulation, balances[0], Rounding::Down)?;
        Ok(Solution::new(issued, 0))
    }

    fn output_given_input(
        &self,
        balances: [u128; 2],
        input: Side,
        amount_less_fee: u128,
    ) -> Result<Solution, AmmError> {
        let reserve_in = balances[input.index()];
        let reserve_out = balances[input.other().index()];
        let new_reserve_in = reserve_in
            .checked_add(amount_less_fee)
            .ok_or(AmmError::Overflow("reserve_in overflow"))?;
        let out = mul_div(reserve_out, amount_less_fee, new_reserve_in, Rounding::Down)?;
        Ok(Solution::new(out, 0))
    }

    fn input_given_output(
        &self,
        balances: [u128; 2],
        output: Side,
        amount_out: u128,
    ) -> Result<Solution, AmmError> {
        let reserve_out = balances[output.index()];
        let reserve_in = balances[output.other().index()];
        let remaining = reserve_out
            .checked_sub(amount_out)
            .filter(|r| *r > 0)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let exact = mul_div(reserve_in, amount_out, remaining, Rounding::Up)?;
        let guarded = exact
            .checked_add(1)
            .ok_or(AmmError::Overflow("required input overflow"))?;
        Ok(Solution::new(guarded, 0))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const CURVE: ConstantProductCurve = ConstantProductCurve;

    #[test]
    fn seed_is_geometric_mean() {
        let Ok(lp) = CURVE.seed_liquidity([1_000_000, 4_000_000]) else {
            panic!("expected Ok");
        };
        assert_eq!(lp, Solution::new(2_000_000, 0));
    }

    #[test]
    fn mint_is_proportional_to_asset1() {
        let Ok(lp) = CURVE.mint_liquidity([1_000, 2_000], [100, 200], 1_414) else {
            panic!("expected Ok");
        };
        assert_eq!(lp.value(), 141);
    }

    #[test]
    fn output_closed_form() {
        let Ok(out) = CURVE.output_given_input([1_000_000, 1_000_000], Side::First, 996) else {
            panic!("expected Ok");
        };
        // floor(1e6 · 996 / 1_000_996)
        assert_eq!(out.value(), 995);
        assert_eq!(out.iterations(), 0);
    }

    #[test]
    fn output_direction_uses_matching_reserves() {
        let Ok(out) = CURVE.output_given_input([1_000, 4_000], Side::Second, 1_000) else {
            panic!("expected Ok");
        };
        // floor(1 000 · 1 000 / 5 000)
        assert_eq!(out.value(), 200);
    }

    #[test]
    fn input_covers_requested_output() {
        let balances = [1_000_000u128, 1_000_000];
        let Ok(needed) = CURVE.input_given_output(balances, Side::Second, 5_000) else {
            panic!("expected Ok");
        };
        let Ok(out) = CURVE.output_given_input(balances, Side::First, needed.value() - 1) else {
            panic!("expected Ok");
        };
        assert!(out.value() >= 5_000, "out = {}", out.value());
    }

    #[test]
    fn input_for_entire_reserve_rejected() {
        let Err(AmmError::InsufficientLiquidity) =
            CURVE.input_given_output([1_000, 1_000], Side::Second, 1_000)
        else {
            panic!("expected InsufficientLiquidity");
        };
    }
}
