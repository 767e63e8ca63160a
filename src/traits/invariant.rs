//! The per-family pricing seam.
//!
//! [`Invariant`] captures everything that differs between constant-product
//! and StableSwap pools: how LP tokens are issued and how a swap amount
//! maps across the curve. Fees, rounding guards on inputs, empty-pool and
//! domain checks live in the quote engine and are shared by every family.
//!
//! Balances passed in are always raw ledger balances in `[asset1, asset2]`
//! order; any rescaling of asset 1 is internal to the implementation.
//!
//! # Dispatch Model
//!
//! Curves are dispatched through the [`CurveBox`](crate::curves::CurveBox)
//! enum, not `dyn` trait objects.

use crate::domain::Side;
use crate::error::AmmError;
use crate::math::Solution;

/// Pricing rules of one pool family.
///
/// Every method returns a [`Solution`]: the computed quantity plus the
/// solver iterations spent on it (zero for closed-form families).
pub trait Invariant {
    /// LP tokens issued when seeding an empty pool with `amounts`.
    ///
    /// # Errors
    ///
    /// Propagates solver and arithmetic errors.
    fn seed_liquidity(&self, amounts: [u128; 2]) -> Result<Solution, AmmError>;

    /// LP tokens issued for depositing `deposits` into a pool holding
    /// `balances` with `lp_circulation` LP tokens outstanding.
    ///
    /// # Errors
    ///
    /// Propagates solver and arithmetic errors.
    fn mint_liquidity(
        &self,
        balances: [u128; 2],
        deposits: [u128; 2],
        lp_circulation: u128,
    ) -> Result<Solution, AmmError>;

    /// Output paid for `amount_less_fee` of `input` entering the pool.
    ///
    /// May be zero when the input is too small to move the curve.
    ///
    /// # Errors
    ///
    /// Propagates solver and arithmetic errors.
    fn output_given_input(
        &self,
        balances: [u128; 2],
        input: Side,
        amount_less_fee: u128,
    ) -> Result<Solution, AmmError>;

    /// Post-fee input needed to take `amount_out` of `output` out of the pool.
    ///
    /// Callers guarantee `amount_out` is below the output balance.
    ///
    /// # Errors
    ///
    /// Propagates solver and arithmetic errors.
    fn input_given_output(
        &self,
        balances: [u128; 2],
        output: Side,
        amount_out: u128,
    ) -> Result<Solution, AmmError>;
}
