//! Declarative blueprint of one pool snapshot.

use crate::domain::{Amount, AssetId, BasisPoints, PoolId, PoolType};
use crate::error::AmmError;
use crate::pool::{AmplificationSchedule, TargetRatioSchedule};

/// Ledger identity of a pool: its application and the three assets it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolIdentity {
    pool_id: PoolId,
    asset1: AssetId,
    asset2: AssetId,
    lp_asset: AssetId,
}

impl PoolIdentity {
    /// Creates a pool identity.
    #[must_use]
    pub const fn new(pool_id: PoolId, asset1: AssetId, asset2: AssetId, lp_asset: AssetId) -> Self {
        Self {
            pool_id,
            asset1,
            asset2,
            lp_asset,
        }
    }

    /// The pool's application id.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }

    /// Asset 1.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.asset1
    }

    /// Asset 2.
    #[must_use]
    pub const fn asset2(&self) -> AssetId {
        self.asset2
    }

    /// The LP token minted by the pool.
    #[must_use]
    pub const fn lp_asset(&self) -> AssetId {
        self.lp_asset
    }
}

/// Everything needed to build a [`PoolState`](crate::pool::PoolState).
///
/// Built with [`PoolConfig::new`] and the `with_*` methods, then checked
/// by [`validate`](Self::validate) when the snapshot is constructed.
///
/// # Validation
///
/// - The three asset ids are pairwise distinct.
/// - The fee is below 100%.
/// - StableSwap variants carry a valid amplification schedule.
/// - The moving-ratio variant carries a valid target-ratio schedule, and
///   no other variant carries one.
///
/// # Examples
///
/// ```
/// use hydra_quote::config::{PoolConfig, PoolIdentity};
/// use hydra_quote::domain::{Amount, AssetId, PoolId, PoolType};
/// use hydra_quote::pool::AmplificationSchedule;
///
/// let identity = PoolIdentity::new(PoolId::new(1), AssetId::new(10), AssetId::new(20), AssetId::new(30));
/// let config = PoolConfig::new(identity, PoolType::StableSwap)
///     .with_balances(Amount::new(1_000), Amount::new(1_000), Amount::new(2_000))
///     .with_amplification(AmplificationSchedule::fixed(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    identity: PoolIdentity,
    pool_type: PoolType,
    fee: BasisPoints,
    balance1: Amount,
    balance2: Amount,
    lp_circulation: Amount,
    amplification: Option<AmplificationSchedule>,
    target_ratio: Option<TargetRatioSchedule>,
}

impl PoolConfig {
    /// Starts a blueprint for an empty pool charging the family's default fee.
    #[must_use]
    pub const fn new(identity: PoolIdentity, pool_type: PoolType) -> Self {
        Self {
            identity,
            pool_type,
            fee: pool_type.default_fee(),
            balance1: Amount::ZERO,
            balance2: Amount::ZERO,
            lp_circulation: Amount::ZERO,
            amplification: None,
            target_ratio: None,
        }
    }

    /// Overrides the fee.
    #[must_use]
    pub const fn with_fee(mut self, fee: BasisPoints) -> Self {
        self.fee = fee;
        self
    }

    /// Sets the pool balances and LP circulation.
    #[must_use]
    pub const fn with_balances(
        mut self,
        balance1: Amount,
        balance2: Amount,
        lp_circulation: Amount,
    ) -> Self {
        self.balance1 = balance1;
        self.balance2 = balance2;
        self.lp_circulation = lp_circulation;
        self
    }

    /// Sets the amplification schedule (StableSwap variants).
    #[must_use]
    pub const fn with_amplification(mut self, schedule: AmplificationSchedule) -> Self {
        self.amplification = Some(schedule);
        self
    }

    /// Sets the target-ratio schedule (moving-ratio variant).
    #[must_use]
    pub const fn with_target_ratio(mut self, schedule: TargetRatioSchedule) -> Self {
        self.target_ratio = Some(schedule);
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAssetPair`] if asset ids repeat.
    /// - [`AmmError::InvalidConfiguration`] for a fee of 100% or more, or a
    ///   missing, superfluous or malformed schedule.
    pub fn validate(&self) -> Result<(), AmmError> {
        let id = &self.identity;
        if id.asset1 == id.asset2 {
            return Err(AmmError::InvalidAssetPair("pool assets must be distinct"));
        }
        if id.lp_asset == id.asset1 || id.lp_asset == id.asset2 {
            return Err(AmmError::InvalidAssetPair(
                "LP asset must differ from the pooled assets",
            ));
        }
        if self.fee >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidConfiguration("fee must be below 100%"));
        }

        match (self.pool_type.is_stable_swap(), self.amplification) {
            (true, Some(schedule)) => schedule.validate()?,
            (true, None) => {
                return Err(AmmError::InvalidConfiguration(
                    "stableswap pool requires an amplification schedule",
                ));
            }
            (false, Some(_)) => {
                return Err(AmmError::InvalidConfiguration(
                    "constant-product pool takes no amplification schedule",
                ));
            }
            (false, None) => {}
        }

        match (self.pool_type.has_target_ratio(), self.target_ratio) {
            (true, Some(schedule)) => schedule.validate(),
            (true, None) => Err(AmmError::InvalidConfiguration(
                "moving-ratio pool requires a target ratio schedule",
            )),
            (false, Some(_)) => Err(AmmError::InvalidConfiguration(
                "only moving-ratio pools take a target ratio schedule",
            )),
            (false, None) => Ok(()),
        }
    }

    /// Ledger identity.
    #[must_use]
    pub const fn identity(&self) -> &PoolIdentity {
        &self.identity
    }

    /// Pool family.
    #[must_use]
    pub const fn pool_type(&self) -> PoolType {
        self.pool_type
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }

    /// Balance of asset 1.
    pub const fn balance1(&self) -> Amount {
        self.balance1
    }

    /// Balance of asset 2.
    pub const fn balance2(&self) -> Amount {
        self.balance2
    }

    /// Outstanding LP tokens.
    pub const fn lp_circulation(&self) -> Amount {
        self.lp_circulation
    }

    /// Amplification schedule, if any.
    #[must_use]
    pub const fn amplification(&self) -> Option<AmplificationSchedule> {
        self.amplification
    }

    /// Target-ratio schedule, if any.
    #[must_use]
    pub const fn target_ratio(&self) -> Option<TargetRatioSchedule> {
        self.target_ratio
    }
}
