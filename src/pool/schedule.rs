//! Time-ramped pool parameters.
//!
//! StableSwap pools move their amplification coefficient, and moving-ratio
//! pools their asset-1 target ratio, linearly between two configured
//! values over a wall-clock window:
//!
//! ```text
//! value(now) = initial                                        now ≤ start
//!            = initial ± |goal − initial| · (now − start) / (end − start)
//!            = goal                                           now ≥ end
//! ```
//!
//! The interpolated delta is floored, so a ramp up lags and a ramp down
//! leads the exact line by less than one unit, as on the ledger.

use crate::domain::{Rounding, Timestamp};
use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// Fixed-point scale of target ratios: a ratio of `RATIO_SCALE` is 1.0.
pub const RATIO_SCALE: u128 = 1_000_000_000;

fn interpolate(
    initial: u128,
    goal: u128,
    start: Timestamp,
    end: Timestamp,
    now: Timestamp,
) -> Result<u128> {
    if now >= end {
        return Ok(goal);
    }
    if now <= start {
        return Ok(initial);
    }
    let elapsed = u128::from(now.saturating_since(start));
    let span = u128::from(end.saturating_since(start));
    if goal >= initial {
        let delta = mul_div(goal - initial, elapsed, span, Rounding::Down)?;
        Ok(initial + delta)
    } else {
        let delta = mul_div(initial - goal, elapsed, span, Rounding::Down)?;
        Ok(initial - delta)
    }
}

/// Linear ramp of the StableSwap amplification coefficient `A`.
///
/// # Examples
///
/// ```
/// use hydra_quote::domain::Timestamp;
/// use hydra_quote::pool::AmplificationSchedule;
///
/// let ramp = AmplificationSchedule::new(
///     100,
///     200,
///     Timestamp::from_secs(1_000),
///     Timestamp::from_secs(2_000),
/// );
/// assert_eq!(ramp.at(Timestamp::from_secs(1_500)), Ok(150));
/// assert_eq!(ramp.at(Timestamp::from_secs(9_999)), Ok(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmplificationSchedule {
    initial: u64,
    future: u64,
    initial_at: Timestamp,
    future_at: Timestamp,
}

impl AmplificationSchedule {
    /// Creates a ramp from `initial` at `initial_at` to `future` at `future_at`.
    #[must_use]
    pub const fn new(initial: u64, future: u64, initial_at: Timestamp, future_at: Timestamp) -> Self {
        Self {
            initial,
            future,
            initial_at,
            future_at,
        }
    }

    /// A schedule that holds `amplification` forever.
    #[must_use]
    pub const fn fixed(amplification: u64) -> Self {
        Self::new(amplification, amplification, Timestamp::EPOCH, Timestamp::EPOCH)
    }

    /// Amplification at the start of the ramp.
    #[must_use]
    pub const fn initial(&self) -> u64 {
        self.initial
    }

    /// Amplification once the ramp completes.
    #[must_use]
    pub const fn future(&self) -> u64 {
        self.future
    }

    /// When the ramp starts.
    #[must_use]
    pub const fn initial_at(&self) -> Timestamp {
        self.initial_at
    }

    /// When the ramp completes.
    #[must_use]
    pub const fn future_at(&self) -> Timestamp {
        self.future_at
    }

    /// Checks that both endpoints are positive and the window is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on violation.
    pub const fn validate(&self) -> Result<()> {
        if self.initial == 0 || self.future == 0 {
            return Err(AmmError::InvalidConfiguration(
                "amplification must be greater than zero",
            ));
        }
        if self.future_at.as_secs() < self.initial_at.as_secs() {
            return Err(AmmError::InvalidConfiguration(
                "amplification ramp ends before it starts",
            ));
        }
        Ok(())
    }

    /// The amplification in force at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the interpolated value does not fit `u64`.
    pub fn at(&self, now: Timestamp) -> Result<u64> {
        let value = interpolate(
            u128::from(self.initial),
            u128::from(self.future),
            self.initial_at,
            self.future_at,
            now,
        )?;
        u64::try_from(value).map_err(|_| AmmError::Overflow("amplification exceeds u64"))
    }
}

/// Linear ramp of the asset-1 to asset-2 target ratio, scaled by [`RATIO_SCALE`].
///
/// Before every invariant computation asset 1's balance is rescaled to
/// `floor(balance1 · ratio / RATIO_SCALE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetRatioSchedule {
    initial: u128,
    goal: u128,
    start_at: Timestamp,
    end_at: Timestamp,
}

impl TargetRatioSchedule {
    /// Creates a ramp from `initial` at `start_at` to `goal` at `end_at`.
    #[must_use]
    pub const fn new(initial: u128, goal: u128, start_at: Timestamp, end_at: Timestamp) -> Self {
        Self {
            initial,
            goal,
            start_at,
            end_at,
        }
    }

    /// A schedule that holds `ratio` forever.
    #[must_use]
    pub const fn fixed(ratio: u128) -> Self {
        Self::new(ratio, ratio, Timestamp::EPOCH, Timestamp::EPOCH)
    }

    /// Ratio at the start of the ramp.
    #[must_use]
    pub const fn initial(&self) -> u128 {
        self.initial
    }

    /// Ratio once the ramp completes.
    #[must_use]
    pub const fn goal(&self) -> u128 {
        self.goal
    }

    /// When the ramp starts.
    #[must_use]
    pub const fn start_at(&self) -> Timestamp {
        self.start_at
    }

    /// When the ramp completes.
    #[must_use]
    pub const fn end_at(&self) -> Timestamp {
        self.end_at
    }

    /// Checks that both ratios are positive and the window is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on violation.
    pub const fn validate(&self) -> Result<()> {
        if self.initial == 0 || self.goal == 0 {
            return Err(AmmError::InvalidConfiguration(
                "target ratio must be greater than zero",
            ));
        }
        if self.end_at.as_secs() < self.start_at.as_secs() {
            return Err(AmmError::InvalidConfiguration(
                "target ratio ramp ends before it starts",
            ));
        }
        Ok(())
    }

    /// The ratio in force at `now`.
    ///
    /// Once `now` reaches the end of the window the goal ratio is returned
    /// as is; the window bounds are not consulted again.
    ///
    /// # Errors
    ///
    /// Propagates arithmetic errors from the interpolation.
    pub fn at(&self, now: Timestamp) -> Result<u128> {
        interpolate(self.initial, self.goal, self.start_at, self.end_at, now)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ts(secs: u64) -> Timestamp {
        Timestamp::from_secs(secs)
    }

    #[test]
    fn amplification_ramps_up_linearly() {
        let ramp = AmplificationSchedule::new(100, 400, ts(1_000), ts(4_000));
        assert_eq!(ramp.at(ts(0)), Ok(100));
        assert_eq!(ramp.at(ts(1_000)), Ok(100));
        assert_eq!(ramp.at(ts(2_000)), Ok(200));
        assert_eq!(ramp.at(ts(3_999)), Ok(399));
        assert_eq!(ramp.at(ts(4_000)), Ok(400));
        assert_eq!(ramp.at(ts(u64::MAX)), Ok(400));
    }

    #[test]
    fn amplification_ramps_down_linearly() {
        let ramp = AmplificationSchedule::new(400, 100, ts(1_000), ts(4_000));
        assert_eq!(ramp.at(ts(2_000)), Ok(300));
        // floor of the delta: 400 - floor(300 · 1/3000) = 400
        assert_eq!(ramp.at(ts(1_001)), Ok(400));
        assert_eq!(ramp.at(ts(5_000)), Ok(100));
    }

    #[test]
    fn fixed_amplification_never_moves() {
        let ramp = AmplificationSchedule::fixed(85);
        assert_eq!(ramp.at(ts(0)), Ok(85));
        assert_eq!(ramp.at(ts(1_700_000_000)), Ok(85));
    }

    #[test]
    fn amplification_validation() {
        assert!(AmplificationSchedule::fixed(1).validate().is_ok());
        let Err(AmmError::InvalidConfiguration(_)) = AmplificationSchedule::fixed(0).validate()
        else {
            panic!("expected InvalidConfiguration");
        };
        let inverted = AmplificationSchedule::new(10, 20, ts(50), ts(10));
        let Err(AmmError::InvalidConfiguration(_)) = inverted.validate() else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn expired_ratio_ramp_ignores_window() {
        let goal = 1_250_000_000;
        let a = TargetRatioSchedule::new(RATIO_SCALE, goal, ts(100), ts(200));
        let b = TargetRatioSchedule::new(RATIO_SCALE, goal, ts(150), ts(900));
        let c = TargetRatioSchedule::new(777, goal, ts(0), ts(0));
        let now = ts(1_000);
        assert_eq!(a.at(now), Ok(goal));
        assert_eq!(b.at(now), Ok(goal));
        assert_eq!(c.at(now), Ok(goal));
    }

    #[test]
    fn ratio_midpoint() {
        let ramp = TargetRatioSchedule::new(RATIO_SCALE, 2 * RATIO_SCALE, ts(0), ts(100));
        assert_eq!(ramp.at(ts(50)), Ok(1_500_000_000));
    }

    #[test]
    fn ratio_validation() {
        let Err(AmmError::InvalidConfiguration(_)) = TargetRatioSchedule::fixed(0).validate()
        else {
            panic!("expected InvalidConfiguration");
        };
        assert!(TargetRatioSchedule::fixed(RATIO_SCALE).validate().is_ok());
    }
}
