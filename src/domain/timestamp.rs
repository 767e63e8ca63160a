//! Wall-clock instants used to evaluate time-ramped pool parameters.

use core::fmt;

/// Unix time in whole seconds.
///
/// Quotes never read the system clock. Callers pass the instant at which
/// ramped parameters should be evaluated, which keeps every quote a pure
/// function of its inputs.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::Timestamp;
///
/// let t = Timestamp::from_secs(1_700_000_000);
/// assert!(t > Timestamp::EPOCH);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch.
    pub const EPOCH: Self = Self(0);

    /// Creates a timestamp from seconds since the Unix epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns seconds since the Unix epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`, or zero if `earlier` is later.
    #[must_use]
    pub const fn saturating_since(&self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
