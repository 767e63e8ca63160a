//! Closed set of pool families.

use core::fmt;

use super::BasisPoints;

/// The pool family, which selects the invariant and the standard fee.
///
/// | Variant | Invariant | Standard fee |
/// |---------|-----------|--------------|
/// | `ConstantProductLowFee` | `x · y = k` | 25 bp |
/// | `ConstantProductHighFee` | `x · y = k` | 75 bp |
/// | `StableSwap` | StableSwap, ramped `A` | 10 bp |
/// | `StableSwapMovingRatio` | StableSwap, ramped `A` and target ratio | 10 bp |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolType {
    /// Constant-product pool with the low fee tier.
    ConstantProductLowFee,
    /// Constant-product pool with the high fee tier.
    ConstantProductHighFee,
    /// StableSwap pool over two equally weighted assets.
    StableSwap,
    /// StableSwap pool whose asset 1 is rescaled by a ramped target ratio.
    StableSwapMovingRatio,
}

impl PoolType {
    /// Returns `true` for both StableSwap variants.
    #[must_use]
    pub const fn is_stable_swap(&self) -> bool {
        matches!(self, Self::StableSwap | Self::StableSwapMovingRatio)
    }

    /// Returns `true` if asset 1 balances are rescaled by a target ratio.
    #[must_use]
    pub const fn has_target_ratio(&self) -> bool {
        matches!(self, Self::StableSwapMovingRatio)
    }

    /// The fee the ledger program charges for this family by default.
    #[must_use]
    pub const fn default_fee(&self) -> BasisPoints {
        match self {
            Self::ConstantProductLowFee => BasisPoints::new(25),
            Self::ConstantProductHighFee => BasisPoints::new(75),
            Self::StableSwap | Self::StableSwapMovingRatio => BasisPoints::new(10),
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConstantProductLowFee => "constant-product (low fee)",
            Self::ConstantProductHighFee => "constant-product (high fee)",
            Self::StableSwap => "stableswap",
            Self::StableSwapMovingRatio => "stableswap (moving ratio)",
        };
        f.write_str(name)
    }
}
