//! Deposit, withdrawal and swap quotes against a pool snapshot.
//!
//! Every operation is a pure function of the [`PoolState`] and the
//! engine's `as_of` timestamp. The per-family arithmetic lives behind the
//! [`Invariant`] trait; this module owns what every family shares:
//!
//! - empty-pool and asset-id checks,
//! - the swap fee and its rounding guard,
//! - proportional pairing of single-sided deposits,
//! - pro-rata withdrawal,
//! - signing of the resulting deltas.
//!
//! # Fee Model
//!
//! ```text
//! exact input : Δx_net = Δx − floor(Δx · fee / 10 000) − 1
//! exact output: Δx     = ceil(Δx_net · 10 000 / (10 000 − fee))
//! ```
//!
//! The `− 1` keeps a predicted output at or below what the ledger program
//! will actually pay.

use super::ZapSolver;
use crate::domain::{Amount, AssetId, Quote, QuoteKind, Rounding, Side, Timestamp};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, CheckedArithmetic, Solution};
use crate::pool::PoolState;
use crate::traits::Invariant;

const BPS_DENOMINATOR: u128 = 10_000;

/// Quote calculator bound to one pool snapshot and one point in time.
///
/// # Example
///
/// ```rust
/// use hydra_quote::config::{PoolConfig, PoolIdentity};
/// use hydra_quote::domain::{Amount, AssetId, BasisPoints, PoolId, PoolType, Timestamp};
/// use hydra_quote::pool::PoolState;
/// use hydra_quote::quote::QuoteEngine;
/// use hydra_quote::traits::FromConfig;
///
/// let identity = PoolIdentity::new(PoolId::new(1), AssetId::new(10), AssetId::new(20), AssetId::new(30));
/// let config = PoolConfig::new(identity, PoolType::ConstantProductLowFee)
///     .with_fee(BasisPoints::new(30))
///     .with_balances(Amount::new(1_000_000), Amount::new(1_000_000), Amount::new(1_000_000));
/// let Ok(pool) = PoolState::from_config(&config) else { panic!("valid config") };
///
/// let engine = QuoteEngine::new(&pool, Timestamp::from_secs(1_700_000_000));
/// let Ok(quote) = engine.swap_exact_for_quote(AssetId::new(10), Amount::new(1_000)) else {
///     panic!("swap quote");
/// };
/// assert_eq!(quote.asset1_delta(), -1_000);
/// assert_eq!(quote.asset2_delta(), 995);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteEngine<'a> {
    pool: &'a PoolState,
    as_of: Timestamp,
}

impl<'a> QuoteEngine<'a> {
    /// Binds an engine to `pool`, evaluating ramps at `as_of`.
    #[must_use]
    pub const fn new(pool: &'a PoolState, as_of: Timestamp) -> Self {
        Self { pool, as_of }
    }

    /// The snapshot being quoted.
    #[must_use]
    pub const fn pool(&self) -> &'a PoolState {
        self.pool
    }

    /// The timestamp ramps are evaluated at.
    #[must_use]
    pub const fn as_of(&self) -> Timestamp {
        self.as_of
    }

    /// The same engine over a different snapshot, at the same timestamp.
    #[must_use]
    pub const fn rebind<'b>(&self, pool: &'b PoolState) -> QuoteEngine<'b> {
        QuoteEngine::new(pool, self.as_of)
    }

    /// Amplification coefficient at `as_of`, or `None` for constant-product pools.
    ///
    /// # Errors
    ///
    /// Propagates interpolation errors.
    pub fn current_amplification(&self) -> Result<Option<u64>> {
        self.pool.amplification_at(self.as_of)
    }

    /// Asset-1 target ratio at `as_of`, scaled by [`RATIO_SCALE`](crate::pool::RATIO_SCALE).
    ///
    /// # Errors
    ///
    /// Propagates interpolation errors.
    pub fn current_target_ratio(&self) -> Result<u128> {
        self.pool.target_ratio_at(self.as_of)
    }

    // -- liquidity --------------------------------------------------------

    /// Quote for seeding an empty pool with both assets.
    ///
    /// Constant-product pools issue `floor(√amount1 · √amount2)` LP tokens;
    /// StableSwap pools issue the invariant `D` of the (ratio-scaled) seed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DomainViolation`] if the pool already has liquidity,
    ///   either amount is zero, or no LP tokens would be issued.
    /// - Solver and arithmetic errors.
    pub fn empty_pool_quote(&self, amount1: Amount, amount2: Amount) -> Result<Quote> {
        if !self.pool.is_empty() {
            return Err(AmmError::DomainViolation(
                "pool already has liquidity outstanding",
            ));
        }
        if amount1.is_zero() || amount2.is_zero() {
            return Err(AmmError::DomainViolation(
                "seeding a pool requires both assets",
            ));
        }

        let issued = self
            .pool
            .curve(self.as_of)?
            .seed_liquidity([amount1.get(), amount2.get()])?;
        let quote = self.deposit(amount1, amount2, issued)?;
        self.trace(&quote);
        Ok(quote)
    }

    /// Quote for depositing `amount` of `asset` together with the matching
    /// amount of the other asset at the current balance ratio.
    ///
    /// The paired amount is rounded up, so rounding never dilutes the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAssetPair`] if `asset` is not pooled here.
    /// - [`AmmError::EmptyPool`] if no LP tokens are outstanding.
    /// - [`AmmError::DomainViolation`] if `amount` is zero or too small to
    ///   mint any LP tokens.
    /// - Solver and arithmetic errors.
    pub fn pool_quote(&self, asset: AssetId, amount: Amount) -> Result<Quote> {
        let side = self.pool.side_of(asset)?;
        self.ensure_funded()?;
        if amount.is_zero() {
            return Err(AmmError::DomainViolation("deposit amount must be positive"));
        }

        let paired = Amount::new(mul_div(
            amount.get(),
            self.pool.balance(side.other()).get(),
            self.pool.balance(side).get(),
            Rounding::Up,
        )?);
        let (amount1, amount2) = match side {
            Side::First => (amount, paired),
            Side::Second => (paired, amount),
        };

        let issued = self.pool.curve(self.as_of)?.mint_liquidity(
            self.pool.balances(),
            [amount1.get(), amount2.get()],
            self.pool.lp_circulation().get(),
        )?;
        let quote = self.deposit(amount1, amount2, issued)?;
        self.trace(&quote);
        Ok(quote)
    }

    /// Quote for redeeming `lp_amount` LP tokens pro rata.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if no LP tokens are outstanding.
    /// - [`AmmError::DomainViolation`] if `lp_amount` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `lp_amount` exceeds the circulation.
    pub fn burn_quote(&self, lp_amount: Amount) -> Result<Quote> {
        self.ensure_funded()?;
        if lp_amount.is_zero() {
            return Err(AmmError::DomainViolation("burn amount must be positive"));
        }
        let circulation = self.pool.lp_circulation();
        if lp_amount > circulation {
            return Err(AmmError::InsufficientLiquidity);
        }

        let [balance1, balance2] = self.pool.balances();
        let out1 = Amount::new(mul_div(lp_amount.get(), balance1, circulation.get(), Rounding::Down)?);
        let out2 = Amount::new(mul_div(lp_amount.get(), balance2, circulation.get(), Rounding::Down)?);

        let quote = Quote::new(
            QuoteKind::Burn,
            out1.as_inflow()?,
            out2.as_inflow()?,
            lp_amount.as_outflow()?,
            0,
        );
        self.trace(&quote);
        Ok(quote)
    }

    // -- swaps ------------------------------------------------------------

    /// Quote for swapping exactly `amount` of `asset` for the other asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAssetPair`] if `asset` is not pooled here.
    /// - [`AmmError::EmptyPool`] if no LP tokens are outstanding.
    /// - [`AmmError::DomainViolation`] if `amount` is zero or too small to
    ///   produce any output after the fee.
    /// - Solver and arithmetic errors.
    pub fn swap_exact_for_quote(&self, asset: AssetId, amount: Amount) -> Result<Quote> {
        let input = self.pool.side_of(asset)?;
        self.ensure_funded()?;
        if amount.is_zero() {
            return Err(AmmError::DomainViolation("swap input must be positive"));
        }

        let net = self.net_of_fee(amount)?.ok_or(AmmError::DomainViolation(
            "swap input does not cover the fee",
        ))?;
        let out = self.pool.curve(self.as_of)?.output_given_input(
            self.pool.balances(),
            input,
            net.get(),
        )?;
        if out.value() == 0 {
            return Err(AmmError::DomainViolation(
                "swap input too small to produce any output",
            ));
        }

        let quote = self.swap(input, amount, Amount::new(out.value()), out.iterations())?;
        self.trace(&quote);
        Ok(quote)
    }

    /// Quote for receiving exactly `amount` of `asset` in exchange for the
    /// other asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAssetPair`] if `asset` is not pooled here.
    /// - [`AmmError::EmptyPool`] if no LP tokens are outstanding.
    /// - [`AmmError::InsufficientLiquidity`] if `amount` exceeds the balance.
    /// - [`AmmError::DomainViolation`] if `amount` is zero or would drain
    ///   the balance.
    /// - Solver and arithmetic errors.
    pub fn swap_for_exact_quote(&self, asset: AssetId, amount: Amount) -> Result<Quote> {
        let output = self.pool.side_of(asset)?;
        self.ensure_funded()?;
        if amount.is_zero() {
            return Err(AmmError::DomainViolation("swap output must be positive"));
        }
        let balance = self.pool.balance(output);
        if amount > balance {
            return Err(AmmError::InsufficientLiquidity);
        }
        if amount == balance {
            return Err(AmmError::DomainViolation(
                "swap output would drain the pool balance",
            ));
        }

        let net = self.pool.curve(self.as_of)?.input_given_output(
            self.pool.balances(),
            output,
            amount.get(),
        )?;
        let gross = mul_div(
            net.value(),
            BPS_DENOMINATOR,
            u128::from(self.pool.fee().complement()),
            Rounding::Up,
        )?;

        let quote = signed_swap(
            QuoteKind::SwapForExact,
            output.other(),
            Amount::new(gross),
            amount,
            net.iterations(),
        )?;
        self.trace(&quote);
        Ok(quote)
    }

    /// Quote for depositing arbitrary amounts of both assets, swapping
    /// part of the over-represented one first so the rest pools at the
    /// current ratio.
    ///
    /// Both amounts zero yields a zero quote with no iterations spent.
    ///
    /// # Errors
    ///
    /// See [`ZapSolver::solve`].
    pub fn zap_quote(&self, amount1: Amount, amount2: Amount) -> Result<Quote> {
        let quote = ZapSolver::new(*self).solve(amount1, amount2)?;
        self.trace(&quote);
        Ok(quote)
    }

    // -- shared with the zap solver ---------------------------------------

    /// Output for `amount` of `input`, reporting zero instead of failing
    /// when the input is too small to move the curve.
    ///
    /// Used where a zero output is a legitimate probe result rather than
    /// a user error.
    pub(crate) fn swap_output(&self, input: Side, amount: Amount) -> Result<Solution> {
        let Some(net) = self.net_of_fee(amount)? else {
            return Ok(Solution::new(0, 0));
        };
        self.pool
            .curve(self.as_of)?
            .output_given_input(self.pool.balances(), input, net.get())
    }

    /// Builds an exact-input swap quote from already computed amounts.
    pub(crate) fn swap(
        &self,
        input: Side,
        amount_in: Amount,
        amount_out: Amount,
        iterations: u32,
    ) -> Result<Quote> {
        if amount_out >= self.pool.balance(input.other()) {
            return Err(AmmError::InsufficientLiquidity);
        }
        signed_swap(QuoteKind::SwapExactFor, input, amount_in, amount_out, iterations)
    }

    pub(crate) fn ensure_funded(&self) -> Result<()> {
        if self.pool.is_empty() {
            return Err(AmmError::EmptyPool);
        }
        Ok(())
    }

    // -- helpers ----------------------------------------------------------

    /// `amount − floor(amount · fee) − 1`, or `None` when nothing is left.
    fn net_of_fee(&self, amount: Amount) -> Result<Option<Amount>> {
        let fee = self.pool.fee().apply(amount, Rounding::Down)?;
        Ok(amount
            .safe_sub(&fee)
            .and_then(|v| v.safe_sub(&Amount::new(1)))
            .ok()
            .filter(|v| !v.is_zero()))
    }

    fn deposit(&self, amount1: Amount, amount2: Amount, issued: Solution) -> Result<Quote> {
        if issued.value() == 0 {
            return Err(AmmError::DomainViolation(
                "deposit too small to mint LP tokens",
            ));
        }
        Ok(Quote::new(
            QuoteKind::Pool,
            amount1.as_outflow()?,
            amount2.as_outflow()?,
            Amount::new(issued.value()).as_inflow()?,
            issued.iterations(),
        ))
    }

    fn trace(&self, quote: &Quote) {
        tracing::debug!(
            pool = %self.pool.identity().pool_id(),
            pool_type = %self.pool.pool_type(),
            as_of = %self.as_of,
            %quote,
            "quote computed"
        );
    }
}

/// A swap quote in which `amount_in` of `input` is paid and `amount_out`
/// of the other side is received.
fn signed_swap(
    kind: QuoteKind,
    input: Side,
    amount_in: Amount,
    amount_out: Amount,
    iterations: u32,
) -> Result<Quote> {
    let paid = amount_in.as_outflow()?;
    let received = amount_out.as_inflow()?;
    let (delta1, delta2) = match input {
        Side::First => (paid, received),
        Side::Second => (received, paid),
    };
    Ok(Quote::new(kind, delta1, delta2, 0, iterations))
}
