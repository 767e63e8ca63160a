//! Decoding of a pool application's key-value global state.
//!
//! The ledger exposes a pool's parameters as a flat map keyed by short
//! ASCII tags. [`GlobalState::decode`] turns that map into a validated
//! [`PoolConfig`], so the rest of the engine only ever sees named fields.
//!
//! | Tag | Field | Required for |
//! |-----|-------|--------------|
//! | `a1`, `a2` | asset ids | all |
//! | `lp` | LP asset id | all |
//! | `b1`, `b2` | balances | all |
//! | `lc` | LP circulation | all |
//! | `fb` | fee in basis points | optional, family default otherwise |
//! | `ia`, `fa` | initial / future amplification | StableSwap variants |
//! | `iat`, `fat` | amplification ramp start / end | StableSwap variants |
//! | `itr`, `gtr` | initial / goal target ratio | moving ratio |
//! | `trs`, `tre` | target ratio ramp start / end | moving ratio |

use std::collections::BTreeMap;

use super::{PoolConfig, PoolIdentity};
use crate::domain::{Amount, AssetId, BasisPoints, PoolId, PoolType, Timestamp};
use crate::error::{AmmError, Result};
use crate::pool::{AmplificationSchedule, TargetRatioSchedule};

/// A single global-state value as stored on the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    /// Unsigned 64-bit integer.
    Uint(u64),
    /// Raw bytes.
    Bytes(Vec<u8>),
}

/// A pool application's global state, keyed by ASCII tag.
///
/// # Examples
///
/// ```
/// use hydra_quote::config::GlobalState;
/// use hydra_quote::domain::{PoolId, PoolType};
///
/// let state: GlobalState = [
///     ("a1", 1u64), ("a2", 2), ("lp", 3),
///     ("b1", 1_000), ("b2", 2_000), ("lc", 1_414),
/// ]
/// .into_iter()
/// .collect();
/// let Ok(config) = state.decode(PoolId::new(9), PoolType::ConstantProductLowFee) else {
///     panic!("valid state");
/// };
/// assert_eq!(config.balance2().get(), 2_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalState {
    entries: BTreeMap<String, StateValue>,
}

impl GlobalState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value.
    pub fn insert(&mut self, tag: impl Into<String>, value: StateValue) {
        self.entries.insert(tag.into(), value);
    }

    /// Returns the raw value stored under `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&StateValue> {
        self.entries.get(tag)
    }

    /// Returns the integer stored under `tag`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the value is not an integer.
    pub fn optional_uint(&self, tag: &str) -> Result<Option<u64>> {
        match self.entries.get(tag) {
            None => Ok(None),
            Some(StateValue::Uint(v)) => Ok(Some(*v)),
            Some(StateValue::Bytes(_)) => Err(AmmError::InvalidConfiguration(
                "global state value is not an integer",
            )),
        }
    }

    /// Returns the integer stored under `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the tag is missing or
    /// not an integer.
    pub fn uint(&self, tag: &str) -> Result<u64> {
        self.optional_uint(tag)?
            .ok_or(AmmError::InvalidConfiguration("global state key missing"))
    }

    fn timestamp(&self, tag: &str) -> Result<Timestamp> {
        self.uint(tag).map(Timestamp::from_secs)
    }

    /// Decodes and validates the pool described by this state.
    ///
    /// The pool family is not stored in global state; the caller knows it
    /// from the application it read.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for a missing or malformed tag.
    /// - Any error from [`PoolConfig::validate`].
    pub fn decode(&self, pool_id: PoolId, pool_type: PoolType) -> Result<PoolConfig> {
        let identity = PoolIdentity::new(
            pool_id,
            AssetId::new(self.uint("a1")?),
            AssetId::new(self.uint("a2")?),
            AssetId::new(self.uint("lp")?),
        );

        let fee = match self.optional_uint("fb")? {
            Some(bps) => BasisPoints::new(
                u32::try_from(bps)
                    .map_err(|_| AmmError::InvalidConfiguration("fee does not fit u32"))?,
            ),
            None => pool_type.default_fee(),
        };

        let mut config = PoolConfig::new(identity, pool_type)
            .with_fee(fee)
            .with_balances(
                Amount::from(self.uint("b1")?),
                Amount::from(self.uint("b2")?),
                Amount::from(self.uint("lc")?),
            );

        if pool_type.is_stable_swap() {
            config = config.with_amplification(AmplificationSchedule::new(
                self.uint("ia")?,
                self.uint("fa")?,
                self.timestamp("iat")?,
                self.timestamp("fat")?,
            ));
        }
        if pool_type.has_target_ratio() {
            config = config.with_target_ratio(TargetRatioSchedule::new(
                u128::from(self.uint("itr")?),
                u128::from(self.uint("gtr")?),
                self.timestamp("trs")?,
                self.timestamp("tre")?,
            ));
        }

        config.validate()?;
        tracing::debug!(pool = %pool_id, %pool_type, "decoded pool global state");
        Ok(config)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for GlobalState {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (tag, value) in iter {
            state.insert(tag, StateValue::Uint(value));
        }
        state
    }
}
