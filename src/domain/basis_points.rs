//! Basis-point representation for pool fees.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Value that represents 100%.
pub(crate) const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Pool fees are stored in basis points so that `floor(amount * fee)` can
/// be evaluated exactly: `floor(amount * bps / 10_000)`.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(30);
/// let Ok(charged) = fee.apply(Amount::new(1_000), Rounding::Down) else {
///     panic!("no overflow");
/// };
/// assert_eq!(charged, Amount::new(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the range `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 - self`, the share of an input left after the fee.
    ///
    /// Saturates at zero for values above 100%.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        MAX_BPS.saturating_sub(self.0)
    }

    /// Computes `amount * (self / 10_000)` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("basis points apply overflow")),
        };
        match crate::math::div_round(product, MAX_BPS as u128, rounding) {
            Some(v) => Ok(Amount::new(v)),
            None => Err(AmmError::DivisionByZero),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
