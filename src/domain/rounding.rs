//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the engine.
///
/// Quotes must never be more optimistic than the ledger program, so each
/// division site picks a direction explicitly: outputs round down, required
/// inputs and paired deposits round up.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
