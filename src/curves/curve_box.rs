//! Enum dispatch over the curve families.
//!
//! [`CurveBox`] wraps each concrete [`Invariant`] implementation behind a
//! single enum so a [`PoolState`](crate::pool::PoolState) can hand out
//! the right curve for its family without `dyn` trait objects.

use super::constant_product::ConstantProductCurve;
use super::stable_swap::StableSwapCurve;
use crate::domain::Side;
use crate::error::AmmError;
use crate::math::Solution;
use crate::traits::Invariant;

/// Static dispatch over every supported curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveBox {
    /// `x · y = k`, used by both constant-product fee tiers.
    ConstantProduct(ConstantProductCurve),
    /// StableSwap, with or without a moving target ratio.
    StableSwap(StableSwapCurve),
}

/// Delegates a method call to the inner curve of every variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            CurveBox::ConstantProduct(c) => c.$method($($arg),*),
            CurveBox::StableSwap(c) => c.$method($($arg),*),
        }
    };
}

impl Invariant for CurveBox {
    fn seed_liquidity(&self, amounts: [u128; 2]) -> Result<Solution, AmmError> {
        delegate!(self, seed_liquidity(amounts))
    }

    fn mint_liquidity(
        &self,
        balances: [u128; 2],
        deposits: [u128; 2],
        lp_circulation: u128,
    ) -> Result<Solution, AmmError> {
        delegate!(self, mint_liquidity(balances, deposits, lp_circulation))
    }

    fn output_given_input(
        &self,
        balances: [u128; 2],
        input: Side,
        amount_less_fee: u128,
    ) -> Result<Solution, AmmError> {
        delegate!(self, output_given_input(balances, input, amount_less_fee))
    }

    fn input_given_output(
        &self,
        balances: [u128; 2],
        output: Side,
        amount_out: u128,
    ) -> Result<Solution, AmmError> {
        delegate!(self, input_given_output(balances, output, amount_out))
    }
}

impl From<ConstantProductCurve> for CurveBox {
    fn from(curve: ConstantProductCurve) -> Self {
        Self::ConstantProduct(curve)
    }
}

impl From<StableSwapCurve> for CurveBox {
    fn from(curve: StableSwapCurve) -> Self {
        Self::StableSwap(curve)
    }
}
