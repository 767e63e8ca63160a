//! StableSwap invariant solver.
//!
//! # Invariant
//!
//! ```text
//! A·nⁿ·Σxᵢ + D = A·D·nⁿ + Dⁿ⁺¹ / (nⁿ·Πxᵢ)
//! ```
//!
//! which for the two-asset pools quoted here reads
//! `A·4·(x₀+x₁) + D = A·D·4 + D³/(4·x₀·x₁)`.
//!
//! Both [`compute_d`] and [`compute_y`] iterate Newton-Raphson over
//! arbitrary-precision integers with floor division at every step, stop
//! once two consecutive iterates differ by at most one unit, and give up
//! after [`MAX_SOLVER_ITERATIONS`] steps. The cap and the rounding are the
//! ledger program's own: the reported iteration count is billed as compute,
//! and any deviation in rounding changes the predicted amounts.

use num_bigint::BigUint;
use num_traits::Zero;

use super::fixed_point::{big, narrow};
use crate::error::{AmmError, Result};

/// Newton-Raphson iteration cap shared with the ledger program.
pub const MAX_SOLVER_ITERATIONS: u32 = 255;

/// Consecutive iterates closer than this (in raw units) have converged.
const CONVERGENCE_THRESHOLD: u32 = 1;

/// A solved value together with the iterations spent finding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Solution {
    value: u128,
    iterations: u32,
}

impl Solution {
    /// Creates a solution.
    pub const fn new(value: u128, iterations: u32) -> Self {
        Self { value, iterations }
    }

    /// The solved quantity.
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Newton steps consumed.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

fn converged(current: &BigUint, previous: &BigUint) -> bool {
    let diff = if current > previous {
        current - previous
    } else {
        previous - current
    };
    diff <= BigUint::from(CONVERGENCE_THRESHOLD)
}

/// `A · nⁿ` as a big integer.
fn leverage(amplification: u64, n: usize) -> Result<BigUint> {
    if amplification == 0 {
        return Err(AmmError::DomainViolation("amplification must be positive"));
    }
    let n = u32::try_from(n).map_err(|_| AmmError::Overflow("asset count exceeds u32"))?;
    Ok(BigUint::from(amplification) * BigUint::from(n).pow(n))
}

/// Computes the StableSwap invariant `D` for `balances`.
///
/// Starts from `D₀ = Σxᵢ` and iterates
///
/// ```text
/// D_P    = D · D/(n·x₀) · D/(n·x₁) · …
/// D_next = (Ann·S + n·D_P) · D / ((Ann − 1)·D + (n + 1)·D_P)
/// ```
///
/// with `Ann = A·nⁿ`. An all-zero pool has `D = 0` and costs no
/// iterations.
///
/// # Errors
///
/// - [`AmmError::DomainViolation`] if fewer than two balances are given,
///   `amplification` is zero, or some (but not all) balances are zero.
/// - [`AmmError::NonConvergence`] if the cap is reached.
/// - [`AmmError::Overflow`] if `D` does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_quote::math::compute_d;
///
/// // At peg the invariant equals the sum of balances.
/// let Ok(d) = compute_d(&[500_000, 500_000], 100) else {
///     panic!("converges");
/// };
/// assert_eq!(d.value(), 1_000_000);
/// ```
pub fn compute_d(balances: &[u128], amplification: u64) -> Result<Solution> {
    let n = balances.len();
    if n < 2 {
        return Err(AmmError::DomainViolation(
            "invariant needs at least two balances",
        ));
    }

    let s = balances.iter().fold(BigUint::zero(), |acc, x| acc + *x);
    if s.is_zero() {
        return Ok(Solution::new(0, 0));
    }
    if balances.iter().any(|x| *x == 0) {
        return Err(AmmError::DomainViolation(
            "invariant requires every balance to be positive",
        ));
    }

    let ann = leverage(amplification, n)?;
    let n_big = BigUint::from(n);
    let ann_s = &ann * &s;
    let ann_minus_one = &ann - 1u32;
    let n_plus_one = &n_big + 1u32;

    let mut d = s;
    for step in 1..=MAX_SOLVER_ITERATIONS {
        let mut d_p = d.clone();
        for x in balances {
            d_p = d_p * &d / (big(*x) * &n_big);
        }

        let numerator = (&ann_s + &d_p * &n_big) * &d;
        let denominator = &ann_minus_one * &d + &n_plus_one * &d_p;
        let next = numerator / denominator;

        if converged(&next, &d) {
            tracing::trace!(iterations = step, "invariant D converged");
            return Ok(Solution::new(
                narrow(&next, "invariant D exceeds u128")?,
                step,
            ));
        }
        d = next;
    }

    Err(AmmError::NonConvergence(
        "invariant D did not converge within the iteration cap",
    ))
}

/// Solves for the balance at `unknown` that keeps the invariant at `d`
/// once the balance at `known` is replaced by `new_known_balance`.
///
/// Every other balance is taken from `balances`. Starts from `y₀ = D` and
/// iterates
///
/// ```text
/// c      = D · D/(n·x'₀) · … · D/(Ann·n)     over every x' except y
/// b      = Σx' + D/Ann
/// y_next = (y² + c) / (2y + b − D)
/// ```
///
/// # Errors
///
/// - [`AmmError::DomainViolation`] if the indices coincide or are out of
///   range, `amplification` or `d` is zero, a contributing balance is zero,
///   or the iteration denominator stops being positive.
/// - [`AmmError::NonConvergence`] if the cap is reached.
/// - [`AmmError::Overflow`] if `y` does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use hydra_quote::math::{compute_d, compute_y};
///
/// let balances = [1_000_000u128, 1_000_000];
/// let Ok(d) = compute_d(&balances, 200) else { panic!("converges") };
/// // Adding 1 000 of asset 0 leaves a little under 1 000 000 − 1 000 of asset 1.
/// let Ok(y) = compute_y(0, 1, 1_001_000, &balances, d.value(), 200) else {
///     panic!("converges");
/// };
/// assert!(y.value() > 998_990 && y.value() < 999_010);
/// ```
pub fn compute_y(
    known: usize,
    unknown: usize,
    new_known_balance: u128,
    balances: &[u128],
    d: u128,
    amplification: u64,
) -> Result<Solution> {
    let n = balances.len();
    if known == unknown {
        return Err(AmmError::DomainViolation(
            "known and unknown balance must differ",
        ));
    }
    if known >= n || unknown >= n {
        return Err(AmmError::DomainViolation("balance index out of range"));
    }
    if d == 0 {
        return Err(AmmError::DomainViolation("invariant must be positive"));
    }

    let ann = leverage(amplification, n)?;
    let n_big = BigUint::from(n);
    let d_big = big(d);

    let mut c = d_big.clone();
    let mut s = BigUint::zero();
    for (index, balance) in balances.iter().enumerate() {
        if index == unknown {
            continue;
        }
        let x = if index == known {
            new_known_balance
        } else {
            *balance
        };
        if x == 0 {
            return Err(AmmError::DomainViolation(
                "invariant requires every balance to be positive",
            ));
        }
        s += x;
        c = c * &d_big / (big(x) * &n_big);
    }
    c = c * &d_big / (&ann * &n_big);
    let b = s + &d_big / &ann;

    let mut y = d_big.clone();
    for step in 1..=MAX_SOLVER_ITERATIONS {
        let numerator = &y * &y + &c;
        let partial = &y * 2u32 + &b;
        if partial <= d_big {
            return Err(AmmError::DomainViolation(
                "balance solver denominator is not positive",
            ));
        }
        let next = numerator / (partial - &d_big);

        if converged(&next, &y) {
            tracing::trace!(iterations = step, "balance y converged");
            return Ok(Solution::new(narrow(&next, "balance y exceeds u128")?, step));
        }
        y = next;
    }

    Err(AmmError::NonConvergence(
        "balance y did not converge within the iteration cap",
    ))
}
