//! Rounding helpers for integer division.
//!
//! [`div_round`] divides `u128` values with an explicit [`Rounding`]
//! direction. The engine rounds against the caller everywhere:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output amount, LP issued | [`Rounding::Down`] |
//! | Required input, paired deposit | [`Rounding::Up`] |
//! | Fee charged on input | [`Rounding::Down`] (then guarded by `-1`) |
//!
//! # Examples
//!
//! ```
//! use hydra_quote::domain::Rounding;
//! use hydra_quote::math::div_round;
//!
//! assert_eq!(div_round(10, 3, Rounding::Down), Some(3));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

use crate::domain::Rounding;

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero. Never overflows: the ceiling
/// is taken as `floor + (remainder != 0)`.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            if numerator % denominator != 0 {
                // quotient < u128::MAX whenever a remainder exists
                Some(quotient + 1)
            } else {
                Some(quotient)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn remainder_directions() {
        assert_eq!(div_round(9, 10, Rounding::Down), Some(0));
        assert_eq!(div_round(9, 10, Rounding::Up), Some(1));
    }

    #[test]
    fn extremes() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(div_round(u128::MAX, 2, Rounding::Up), Some(u128::MAX / 2 + 1));
        assert_eq!(div_round(1, u128::MAX, Rounding::Up), Some(1));
    }
}
