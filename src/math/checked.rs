//! Checked arithmetic that reports failures as [`AmmError`].
//!
//! [`Amount`]'s inherent methods return `Option`; the engine works with
//! `Result` so failures carry a variant the caller can match on.
//!
//! # Examples
//!
//! ```
//! use hydra_quote::domain::Amount;
//! use hydra_quote::math::CheckedArithmetic;
//!
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for domain wrapper types.
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: a saturated balance would silently misprice a quote.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] on overflow.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn add_ok_and_overflow() {
        let Ok(r) = Amount::new(100).safe_add(&Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(300));
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn sub_underflow() {
        let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected Underflow");
        };
    }
}
