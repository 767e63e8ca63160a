//! Property-based tests using `proptest` for quote validation.
//!
//! 1. **Invariant monotonicity**: growing either balance never shrinks `D`.
//! 2. **Solver inverse**: `compute_y` recovers a balance from its own `D`.
//! 3. **Round-trip**: burning the LP of a deposit returns at most the deposit.
//! 4. **Fee monotonicity**: a higher fee strictly lowers the swap output.
//! 5. **Zap composition**: replaying a zap's swap leg then its deposit leg
//!    reproduces the zap.
//!
//! Engine properties run over every pool family, moving-ratio pools at a
//! random target ratio. Apart from dust rejections every quote must succeed.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use super::QuoteEngine;
use crate::config::{PoolConfig, PoolIdentity};
use crate::domain::{Amount, AssetId, BasisPoints, PoolId, PoolType, Quote, QuoteKind, Timestamp};
use crate::error::AmmError;
use crate::math::{compute_d, compute_y};
use crate::pool::{AmplificationSchedule, PoolState, TargetRatioSchedule, RATIO_SCALE};
use crate::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const A1: AssetId = AssetId::new(1);
const A2: AssetId = AssetId::new(2);

/// The only rejections a well-funded pool may return for these inputs.
const DUST_DEPOSIT: AmmError = AmmError::DomainViolation("deposit too small to mint LP tokens");
const DUST_ZAP: AmmError = AmmError::DomainViolation("zap remainder too small to deposit");

fn identity() -> PoolIdentity {
    PoolIdentity::new(PoolId::new(1), A1, A2, AssetId::new(3))
}

fn make_pool(
    (pool_type, ratio): (PoolType, u128),
    b1: u128,
    b2: u128,
    lpc: u128,
    fee: u32,
    amp: u64,
) -> PoolState {
    let mut cfg = PoolConfig::new(identity(), pool_type)
        .with_fee(BasisPoints::new(fee))
        .with_balances(Amount::new(b1), Amount::new(b2), Amount::new(lpc));
    if pool_type.is_stable_swap() {
        cfg = cfg.with_amplification(AmplificationSchedule::fixed(amp));
    }
    if pool_type.has_target_ratio() {
        cfg = cfg.with_target_ratio(TargetRatioSchedule::fixed(ratio));
    }
    let Ok(pool) = PoolState::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn as_of() -> Timestamp {
    Timestamp::from_secs(1_700_000_000)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Balances in [10_000, 10_000_000] to avoid dust pools.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Amplification coefficients in [1, 2_000].
fn amplification_strategy() -> impl Strategy<Value = u64> {
    1u64..=2_000u64
}

/// Every pool family, paired with the target ratio it runs at.
fn pool_type_strategy() -> impl Strategy<Value = (PoolType, u128)> {
    prop_oneof![
        Just((PoolType::ConstantProductLowFee, RATIO_SCALE)),
        Just((PoolType::ConstantProductHighFee, RATIO_SCALE)),
        Just((PoolType::StableSwap, RATIO_SCALE)),
        (RATIO_SCALE / 2..=2 * RATIO_SCALE)
            .prop_map(|ratio| (PoolType::StableSwapMovingRatio, ratio)),
    ]
}

// ---------------------------------------------------------------------------
// Invariant solver
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_d_non_decreasing_in_each_balance(
        x0 in reserve_strategy(),
        x1 in reserve_strategy(),
        bump in 0u128..=1_000_000u128,
        amp in amplification_strategy(),
    ) {
        let Ok(base) = compute_d(&[x0, x1], amp) else {
            panic!("D converges");
        };
        let Ok(grown0) = compute_d(&[x0 + bump, x1], amp) else {
            panic!("D converges");
        };
        let Ok(grown1) = compute_d(&[x0, x1 + bump], amp) else {
            panic!("D converges");
        };
        prop_assert!(grown0.value() >= base.value());
        prop_assert!(grown1.value() >= base.value());
    }

    #[test]
    fn prop_y_recovers_balance(
        x0 in reserve_strategy(),
        x1 in reserve_strategy(),
        amp in amplification_strategy(),
    ) {
        let balances = [x0, x1];
        let Ok(d) = compute_d(&balances, amp) else {
            panic!("D converges");
        };
        let Ok(y) = compute_y(1, 0, x1, &balances, d.value(), amp) else {
            panic!("y converges");
        };
        prop_assert!(
            y.value().abs_diff(x0) <= 2,
            "recovered {} for balance {}", y.value(), x0
        );
    }
}

// ---------------------------------------------------------------------------
// Quote engine
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burn_of_deposit_never_exceeds_deposit(
        pool_type in pool_type_strategy(),
        b1 in reserve_strategy(),
        b2 in reserve_strategy(),
        amp in amplification_strategy(),
        share in 1u128..=100u128,
    ) {
        let pool = make_pool(pool_type, b1, b2, b1.min(b2), 30, amp);
        let engine = QuoteEngine::new(&pool, as_of());
        let deposit_amount = Amount::new((b1 * share / 1_000).max(1));
        let deposit = match engine.pool_quote(A1, deposit_amount) {
            Ok(q) => q,
            Err(e) => {
                prop_assume!(e != DUST_DEPOSIT);
                return Err(TestCaseError::fail(format!("deposit rejected: {e}")));
            }
        };
        let Ok(after) = pool.apply(&deposit) else {
            panic!("deposit applies");
        };
        let lp = Amount::new(deposit.lp_delta().unsigned_abs());
        let Ok(burn) = engine.rebind(&after).burn_quote(lp) else {
            panic!("burn of freshly minted LP succeeds");
        };
        prop_assert!(burn.asset1_delta() <= -deposit.asset1_delta());
        prop_assert!(burn.asset2_delta() <= -deposit.asset2_delta());
    }

    #[test]
    fn prop_higher_fee_pays_strictly_less(
        pool_type in pool_type_strategy(),
        b1 in reserve_strategy(),
        skew in 50u128..=200u128,
        amp in amplification_strategy(),
        fee in 0u32..=100u32,
    ) {
        let b2 = b1 * skew / 100;
        let input = Amount::new(b1 / 20);
        let cheap = make_pool(pool_type, b1, b2, b1, fee, amp);
        let dear = make_pool(pool_type, b1, b2, b1, fee + 100, amp);
        let low = QuoteEngine::new(&cheap, as_of())
            .swap_exact_for_quote(A1, input)
            .map_err(|e| TestCaseError::fail(format!("swap at {fee}bp rejected: {e}")))?;
        let high = QuoteEngine::new(&dear, as_of())
            .swap_exact_for_quote(A1, input)
            .map_err(|e| TestCaseError::fail(format!("swap at {}bp rejected: {e}", fee + 100)))?;
        prop_assert!(
            high.asset2_delta() < low.asset2_delta(),
            "fee {}bp paid {}, fee {}bp paid {}",
            fee + 100, high.asset2_delta(), fee, low.asset2_delta()
        );
    }
}

// ---------------------------------------------------------------------------
// Zap composition
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_zap_legs_replay_to_same_quote(
        pool_type in pool_type_strategy(),
        b1 in reserve_strategy(),
        b2 in reserve_strategy(),
        amp in amplification_strategy(),
        a1 in 0u128..=100_000u128,
        a2 in 0u128..=100_000u128,
    ) {
        let pool = make_pool(pool_type, b1, b2, b1, 30, amp);
        let engine = QuoteEngine::new(&pool, as_of());
        let zap = match engine.zap_quote(Amount::new(a1), Amount::new(a2)) {
            Ok(q) => q,
            Err(e) => {
                prop_assume!(e != DUST_DEPOSIT && e != DUST_ZAP);
                return Err(TestCaseError::fail(format!("zap rejected: {e}")));
            }
        };
        prop_assert_eq!(zap.kind(), QuoteKind::Zap);
        if zap.is_zero() {
            prop_assert!(a1 == 0 && a2 == 0);
            return Ok(());
        }

        // the deposit never takes more than was offered
        let used1 = zap.asset1_delta() + zap.zap_asset1_swap_delta();
        let used2 = zap.asset2_delta() + zap.zap_asset2_swap_delta();
        prop_assert!(used1.unsigned_abs() <= a1 || used1 >= 0);
        prop_assert!(used2.unsigned_abs() <= a2 || used2 >= 0);

        let swap_leg = Quote::new(
            QuoteKind::SwapExactFor,
            zap.zap_asset1_swap_delta(),
            zap.zap_asset2_swap_delta(),
            0,
            0,
        );
        let Ok(post) = pool.apply(&swap_leg) else {
            panic!("swap leg applies");
        };
        let replay = engine.rebind(&post);
        let by_first = replay.pool_quote(A1, Amount::new(zap.asset1_delta().unsigned_abs()));
        let by_second = replay.pool_quote(A2, Amount::new(zap.asset2_delta().unsigned_abs()));
        let matches = |q: &Quote| {
            q.asset1_delta() == zap.asset1_delta()
                && q.asset2_delta() == zap.asset2_delta()
                && q.lp_delta() == zap.lp_delta()
        };
        prop_assert!(
            by_first.as_ref().is_ok_and(matches) || by_second.as_ref().is_ok_and(matches),
            "zap {} not reproduced by its legs", zap
        );

        let Ok(direct) = pool.apply(&zap) else {
            panic!("zap applies");
        };
        prop_assert_eq!(direct.lp_circulation().get(), b1 + zap.lp_delta().unsigned_abs());
    }
}
