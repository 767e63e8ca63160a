//! Immutable snapshot of one pool.

use core::fmt;

use super::{AmplificationSchedule, TargetRatioSchedule, RATIO_SCALE};
use crate::config::{PoolConfig, PoolIdentity};
use crate::curves::{ConstantProductCurve, CurveBox, StableSwapCurve};
use crate::domain::{Amount, AssetId, BasisPoints, PoolType, Quote, QuoteKind, Side, Timestamp};
use crate::error::{AmmError, Result};
use crate::traits::FromConfig;

/// A pool's parameters and balances, fixed for the duration of one quote.
///
/// Created from a [`PoolConfig`] via [`FromConfig`], which runs the
/// blueprint's validation, and never mutated afterwards. Time-dependent
/// parameters are stored as schedules and only evaluated against an
/// explicit timestamp, so the same snapshot always prices the same way
/// for the same `as_of`.
///
/// # Example
///
/// ```rust
/// use hydra_quote::config::{PoolConfig, PoolIdentity};
/// use hydra_quote::domain::{Amount, AssetId, PoolId, PoolType, Side};
/// use hydra_quote::pool::PoolState;
/// use hydra_quote::traits::FromConfig;
///
/// let identity = PoolIdentity::new(PoolId::new(1), AssetId::new(10), AssetId::new(20), AssetId::new(30));
/// let config = PoolConfig::new(identity, PoolType::ConstantProductLowFee)
///     .with_balances(Amount::new(4_000), Amount::new(9_000), Amount::new(6_000));
/// let Ok(pool) = PoolState::from_config(&config) else { panic!("valid config") };
///
/// assert_eq!(pool.side_of(AssetId::new(20)), Ok(Side::Second));
/// assert_eq!(pool.balance(Side::First), Amount::new(4_000));
/// assert!(!pool.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolState {
    identity: PoolIdentity,
    pool_type: PoolType,
    fee: BasisPoints,
    balance1: Amount,
    balance2: Amount,
    lp_circulation: Amount,
    amplification: Option<AmplificationSchedule>,
    target_ratio: Option<TargetRatioSchedule>,
}

impl PoolState {
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

    /// Outstanding LP tokens.
    #[must_use]
    pub const fn lp_circulation(&self) -> Amount {
        self.lp_circulation
    }

    /// Amplification schedule (StableSwap variants only).
    #[must_use]
    pub const fn amplification(&self) -> Option<AmplificationSchedule> {
        self.amplification
    }

    /// Target-ratio schedule (moving-ratio variant only).
    #[must_use]
    pub const fn target_ratio(&self) -> Option<TargetRatioSchedule> {
        self.target_ratio
    }

    /// Balance held on `side`.
    #[must_use]
    pub const fn balance(&self, side: Side) -> Amount {
        match side {
            Side::First => self.balance1,
            Side::Second => self.balance2,
        }
    }

    /// Raw balances in `[asset1, asset2]` order.
    #[must_use]
    pub const fn balances(&self) -> [u128; 2] {
        [self.balance1.get(), self.balance2.get()]
    }

    /// Asset id on `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> AssetId {
        match side {
            Side::First => self.identity.asset1(),
            Side::Second => self.identity.asset2(),
        }
    }

    /// Returns `true` when no LP tokens are outstanding.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lp_circulation.is_zero()
    }

    /// Which side of the pool holds `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAssetPair`] if `asset` is neither pooled asset.
    pub fn side_of(&self, asset: AssetId) -> Result<Side> {
        if asset == self.identity.asset1() {
            Ok(Side::First)
        } else if asset == self.identity.asset2() {
            Ok(Side::Second)
        } else {
            Err(AmmError::InvalidAssetPair("asset is not traded by this pool"))
        }
    }

    /// Amplification coefficient at `now`, or `None` for constant-product pools.
    ///
    /// # Errors
    ///
    /// Propagates interpolation errors from the schedule.
    pub fn amplification_at(&self, now: Timestamp) -> Result<Option<u64>> {
        self.amplification.map(|s| s.at(now)).transpose()
    }

    /// Asset-1 target ratio at `now`, scaled by [`RATIO_SCALE`].
    ///
    /// Pools without a ratio schedule trade at par and report `RATIO_SCALE`.
    ///
    /// # Errors
    ///
    /// Propagates interpolation errors from the schedule.
    pub fn target_ratio_at(&self, now: Timestamp) -> Result<u128> {
        self.target_ratio.map_or(Ok(RATIO_SCALE), |s| s.at(now))
    }

    /// The pricing curve in force at `now`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a StableSwap pool lacks its schedule.
    /// - Propagates interpolation errors from the schedules.
    pub fn curve(&self, now: Timestamp) -> Result<CurveBox> {
        if !self.pool_type.is_stable_swap() {
            return Ok(CurveBox::from(ConstantProductCurve));
        }
        let amplification = self
            .amplification_at(now)?
            .ok_or(AmmError::InvalidConfiguration(
                "stableswap pool requires an amplification schedule",
            ))?;
        let ratio = self.target_ratio_at(now)?;
        tracing::trace!(pool = %self.identity.pool_id(), amplification, ratio, %now, "resolved curve");
        Ok(CurveBox::from(StableSwapCurve::with_ratio(
            amplification,
            ratio,
        )?))
    }

    /// The snapshot that results from executing `quote` against this pool.
    ///
    /// The pool's balances move opposite to the caller's deltas and LP
    /// circulation moves with the caller's LP delta. A zap applies its
    /// balancing swap first and its deposit second.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if a balance or the LP circulation would go negative.
    /// - [`AmmError::Overflow`] if one would exceed `u128`.
    pub fn apply(&self, quote: &Quote) -> Result<Self> {
        let start = if quote.kind() == QuoteKind::Zap {
            self.shifted(
                quote.zap_asset1_swap_delta(),
                quote.zap_asset2_swap_delta(),
                0,
            )?
        } else {
            *self
        };
        start.shifted(quote.asset1_delta(), quote.asset2_delta(), quote.lp_delta())
    }

    fn shifted(&self, delta1: i128, delta2: i128, lp_delta: i128) -> Result<Self> {
        Ok(Self {
            balance1: pool_side(self.balance1, delta1)?,
            balance2: pool_side(self.balance2, delta2)?,
            lp_circulation: caller_side(self.lp_circulation, lp_delta)?,
            ..*self
        })
    }
}

/// A pool balance after the caller's holdings change by `delta`.
fn pool_side(balance: Amount, delta: i128) -> Result<Amount> {
    let magnitude = Amount::new(delta.unsigned_abs());
    if delta <= 0 {
        balance
            .checked_add(&magnitude)
            .ok_or(AmmError::Overflow("pool balance overflow"))
    } else {
        balance
            .checked_sub(&magnitude)
            .ok_or(AmmError::Underflow("pool balance would go negative"))
    }
}

/// A supply figure that moves with the caller's `delta`.
fn caller_side(supply: Amount, delta: i128) -> Result<Amount> {
    let magnitude = Amount::new(delta.unsigned_abs());
    if delta >= 0 {
        supply
            .checked_add(&magnitude)
            .ok_or(AmmError::Overflow("LP circulation overflow"))
    } else {
        supply
            .checked_sub(&magnitude)
            .ok_or(AmmError::Underflow("LP circulation would go negative"))
    }
}

impl FromConfig<PoolConfig> for PoolState {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            identity: *config.identity(),
            pool_type: config.pool_type(),
            fee: config.fee(),
            balance1: config.balance1(),
            balance2: config.balance2(),
            lp_circulation: config.lp_circulation(),
            amplification: config.amplification(),
            target_ratio: config.target_ratio(),
        })
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{} {}, {} {}] lp {} fee {}",
            self.identity.pool_id(),
            self.pool_type,
            self.identity.asset1(),
            self.balance1,
            self.identity.asset2(),
            self.balance2,
            self.lp_circulation,
            self.fee
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::PoolId;
    use crate::traits::Invariant;

    fn identity() -> PoolIdentity {
        PoolIdentity::new(
            PoolId::new(7),
            AssetId::new(1),
            AssetId::new(2),
            AssetId::new(3),
        )
    }

    fn cp_pool(b1: u128, b2: u128, lpc: u128) -> PoolState {
        let cfg = PoolConfig::new(identity(), PoolType::ConstantProductLowFee).with_balances(
            Amount::new(b1),
            Amount::new(b2),
            Amount::new(lpc),
        );
        let Ok(pool) = PoolState::from_config(&cfg) else {
            panic!("valid config");
        };
        pool
    }

    fn ts(secs: u64) -> Timestamp {
        Timestamp::from_secs(secs)
    }

    #[test]
    fn from_config_validates() {
        let cfg = PoolConfig::new(identity(), PoolType::StableSwap);
        let Err(AmmError::InvalidConfiguration(_)) = PoolState::from_config(&cfg) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn side_lookup() {
        let pool = cp_pool(1, 1, 1);
        assert_eq!(pool.side_of(AssetId::new(1)), Ok(Side::First));
        assert_eq!(pool.side_of(AssetId::new(2)), Ok(Side::Second));
        let Err(AmmError::InvalidAssetPair(_)) = pool.side_of(AssetId::new(3)) else {
            panic!("LP asset is not a pooled asset");
        };
        assert_eq!(pool.asset(Side::Second), AssetId::new(2));
    }

    #[test]
    fn empty_means_no_lp() {
        assert!(cp_pool(0, 0, 0).is_empty());
        assert!(!cp_pool(10, 10, 10).is_empty());
    }

    #[test]
    fn constant_product_has_no_amplification() {
        let pool = cp_pool(10, 10, 10);
        assert_eq!(pool.amplification_at(ts(0)), Ok(None));
        assert_eq!(pool.target_ratio_at(ts(0)), Ok(RATIO_SCALE));
        assert_eq!(pool.curve(ts(0)), Ok(CurveBox::from(ConstantProductCurve)));
    }

    #[test]
    fn moving_ratio_curve_follows_clock() {
        let cfg = PoolConfig::new(identity(), PoolType::StableSwapMovingRatio)
            .with_balances(Amount::new(1_000), Amount::new(1_000), Amount::new(2_000))
            .with_amplification(AmplificationSchedule::new(100, 300, ts(0), ts(100)))
            .with_target_ratio(TargetRatioSchedule::new(
                RATIO_SCALE,
                2 * RATIO_SCALE,
                ts(0),
                ts(100),
            ));
        let Ok(pool) = PoolState::from_config(&cfg) else {
            panic!("valid config");
        };
        let Ok(CurveBox::StableSwap(mid)) = pool.curve(ts(50)) else {
            panic!("expected stableswap curve");
        };
        assert_eq!(mid.amplification(), 200);
        assert_eq!(mid.ratio(), 1_500_000_000);

        let Ok(CurveBox::StableSwap(done)) = pool.curve(ts(10_000)) else {
            panic!("expected stableswap curve");
        };
        assert_eq!(done.amplification(), 300);
        assert_eq!(done.ratio(), 2 * RATIO_SCALE);
        assert!(done.seed_liquidity([1_000, 1_000]).is_ok());
    }

    #[test]
    fn apply_swap_moves_balances_opposite_to_caller() {
        let pool = cp_pool(1_000, 2_000, 1_400);
        let swap = Quote::new(QuoteKind::SwapExactFor, -100, 180, 0, 0);
        let Ok(after) = pool.apply(&swap) else {
            panic!("expected Ok");
        };
        assert_eq!(after.balances(), [1_100, 1_820]);
        assert_eq!(after.lp_circulation(), Amount::new(1_400));
    }

    #[test]
    fn apply_zap_runs_swap_then_deposit() {
        let pool = cp_pool(1_000, 1_000, 1_000);
        let zap = Quote::new(QuoteKind::Zap, -40, -36, 38, 0).with_zap_swap(-50, 45);
        let Ok(after) = pool.apply(&zap) else {
            panic!("expected Ok");
        };
        assert_eq!(after.balances(), [1_090, 991]);
        assert_eq!(after.lp_circulation(), Amount::new(1_038));
    }

    #[test]
    fn apply_burn_reduces_circulation() {
        let pool = cp_pool(1_000, 1_000, 1_000);
        let burn = Quote::new(QuoteKind::Burn, 100, 100, -100, 0);
        let Ok(after) = pool.apply(&burn) else {
            panic!("expected Ok");
        };
        assert_eq!(after.balances(), [900, 900]);
        assert_eq!(after.lp_circulation(), Amount::new(900));
    }

    #[test]
    fn apply_rejects_overdraw() {
        let pool = cp_pool(10, 10, 10);
        let Err(AmmError::Underflow(_)) =
            pool.apply(&Quote::new(QuoteKind::Burn, 11, 0, 0, 0))
        else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn display_mentions_family() {
        let s = cp_pool(5, 6, 7).to_string();
        assert!(s.contains("pool#7"), "{s}");
        assert!(s.contains("25bp"), "{s}");
    }
}
