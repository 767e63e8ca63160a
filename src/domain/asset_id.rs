//! Ledger identifiers for assets and pools.

use core::fmt;

/// Identifier of a fungible asset on the ledger.
///
/// Asset ids are opaque 64-bit integers assigned by the ledger. The
/// engine only compares them for equality when resolving which side of a
/// pool a request refers to.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::AssetId;
///
/// let usdc = AssetId::new(31_566_704);
/// assert_eq!(usdc.get(), 31_566_704);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId(u64);

impl AssetId {
    /// Creates an `AssetId` from its raw ledger value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ledger value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

/// Identifier of the application that holds a pool's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId(u64);

impl PoolId {
    /// Creates a `PoolId` from its raw ledger value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ledger value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}
