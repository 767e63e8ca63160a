//! Which side of a two-asset pool an amount belongs to.

/// One of the two asset slots of a pool.
///
/// `First` is asset 1 (the side rescaled by the target ratio in
/// moving-ratio pools), `Second` is asset 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Asset 1.
    First,
    /// Asset 2.
    Second,
}

impl Side {
    /// Index of this side in a `[balance1, balance2]` array.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_other() {
        assert_eq!(Side::First.index(), 0);
        assert_eq!(Side::Second.index(), 1);
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other().other(), Side::Second);
    }
}
