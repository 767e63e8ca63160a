//! Construction of validated values from declarative configuration.
//!
//! [`FromConfig`] is the single entry point for turning a blueprint into
//! a value the engine trusts. Implementations **must** run the
//! blueprint's validation, so anything successfully constructed is
//! internally consistent (distinct assets, fee below 100%, schedules
//! present exactly where the pool family needs them).
//!
//! ```text
//! GlobalState ──decode──▶ PoolConfig ──from_config──▶ PoolState
//! ```

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolState`
pub trait FromConfig<C> {
    /// Validates `config` and builds the value it describes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is out of range.
    /// - [`AmmError::InvalidAssetPair`] if asset ids are inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
