//! Raw asset amount with checked arithmetic.

use core::fmt;

use crate::error::AmmError;

/// A raw asset amount in the smallest ledger unit.
///
/// `Amount` never interprets decimals. Balances, deposits, LP supply and
/// swap legs are all expressed as `Amount`; signed quantities only appear
/// in [`Quote`](super::Quote) deltas.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// The amount as a caller outflow: a negative delta.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds `i128::MAX`.
    pub fn as_outflow(&self) -> crate::error::Result<i128> {
        i128::try_from(self.0)
            .map(|v| -v)
            .map_err(|_| AmmError::Overflow("amount does not fit a signed delta"))
    }

    /// The amount as a caller inflow: a positive delta.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds `i128::MAX`.
    pub fn as_inflow(&self) -> crate::error::Result<i128> {
        i128::try_from(self.0).map_err(|_| AmmError::Overflow("amount does not fit a signed delta"))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn from_ledger_u64() {
        assert_eq!(Amount::from(u64::MAX).get(), u128::from(u64::MAX));
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn signed_deltas() {
        let Ok(out) = Amount::new(500).as_outflow() else {
            panic!("expected Ok");
        };
        assert_eq!(out, -500);
        let Ok(inflow) = Amount::new(500).as_inflow() else {
            panic!("expected Ok");
        };
        assert_eq!(inflow, 500);
        let Err(AmmError::Overflow(_)) = Amount::MAX.as_inflow() else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }
}
