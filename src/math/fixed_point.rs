//! Exact integer primitives over arbitrary-precision intermediates.
//!
//! Ledger quantities fit in `u64`, but products such as `D³` or
//! `balance · lp_circulation` do not, so every intermediate here is a
//! [`BigUint`]. Results are narrowed back to `u128` with an explicit
//! overflow check.

use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::{ToPrimitive, Zero};

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Lifts a `u128` into an arbitrary-precision integer.
#[inline]
#[must_use]
pub fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

/// Narrows a [`BigUint`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if the value does not fit.
pub fn narrow(value: &BigUint, context: &'static str) -> Result<u128> {
    value.to_u128().ok_or(AmmError::Overflow(context))
}

/// Divides two big integers with an explicit rounding direction.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn div_round_big(
    numerator: &BigUint,
    denominator: &BigUint,
    rounding: Rounding,
) -> Result<BigUint> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if rounding.is_up() && !(numerator % denominator).is_zero() {
        return Ok(quotient + 1u32);
    }
    Ok(quotient)
}

/// Computes `a · b / c` exactly, rounding as requested.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::Rounding;
/// use hydra_quote::math::mul_div;
///
/// // 2^127 · 6 overflows a u128 product but the quotient fits.
/// let a = 1u128 << 127;
/// assert_eq!(mul_div(a, 6, 4, Rounding::Down), Ok(3u128 << 126));
/// assert!(mul_div(a, 4, 1, Rounding::Down).is_err());
/// assert_eq!(mul_div(7, 3, 2, Rounding::Up), Ok(11));
/// ```
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Result<u128> {
    let product = big(a) * big(b);
    let quotient = div_round_big(&product, &big(c), rounding)?;
    narrow(&quotient, "mul_div result exceeds u128")
}

/// Integer square root: the largest `r` with `r² ≤ value`.
#[must_use]
pub fn isqrt(value: &BigUint) -> BigUint {
    Roots::sqrt(value)
}

/// Computes `floor(√a · √b)` exactly.
///
/// Equal to `floor(√(a·b))`, evaluated without ever rounding the
/// intermediate product.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the root exceeds `u128` (impossible
/// for `u128` inputs, but checked rather than assumed).
pub fn sqrt_product(a: u128, b: u128) -> Result<u128> {
    narrow(&isqrt(&(big(a) * big(b))), "square root exceeds u128")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_exceeds_u128_product() {
        let Ok(v) = mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(v, u128::MAX);
    }

    #[test]
    fn mul_div_rounding() {
        assert_eq!(mul_div(10, 1, 3, Rounding::Down), Ok(3));
        assert_eq!(mul_div(10, 1, 3, Rounding::Up), Ok(4));
        assert_eq!(mul_div(9, 2, 3, Rounding::Up), Ok(6));
    }

    #[test]
    fn mul_div_by_zero() {
        assert_eq!(
            mul_div(1, 1, 0, Rounding::Down),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_result_overflow() {
        let Err(AmmError::Overflow(_)) = mul_div(u128::MAX, 2, 1, Rounding::Down) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn sqrt_product_is_floor() {
        assert_eq!(sqrt_product(0, 5), Ok(0));
        assert_eq!(sqrt_product(4, 9), Ok(6));
        // √2·√3 = 2.449…
        assert_eq!(sqrt_product(2, 3), Ok(2));
        // product of two u64::MAX values overflows f64 precision but not us
        let m = u128::from(u64::MAX);
        assert_eq!(sqrt_product(m, m), Ok(m));
    }

    #[test]
    fn isqrt_bounds() {
        let v = big(1_000_000_007);
        let r = isqrt(&v);
        assert!(&r * &r <= v);
        assert!((&r + 1u32) * (&r + 1u32) > v);
    }

    #[test]
    fn div_round_big_up() {
        let Ok(q) = div_round_big(&big(7), &big(2), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(q, big(4));
    }
}
