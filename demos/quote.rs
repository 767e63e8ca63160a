//! Quoting walkthrough for a StableSwap pool decoded from ledger state.
//!
//! Decodes a pool from its global-state key/value pairs, runs every quote
//! operation against one snapshot and prints the solver work each one
//! needed together with the fee a [`ComputeBudget`] would charge for it.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quote
//! ```

use hydra_quote::config::{ComputeBudget, GlobalState};
use hydra_quote::domain::{Amount, AssetId, PoolId, PoolType, Quote, Timestamp};
use hydra_quote::pool::PoolState;
use hydra_quote::quote::QuoteEngine;
use hydra_quote::traits::FromConfig;

const USDC: AssetId = AssetId::new(31_566_704);
const USDT: AssetId = AssetId::new(312_769);

fn report(label: &str, quote: &Quote, budget: &ComputeBudget) -> Result<(), Box<dyn std::error::Error>> {
    println!("  {label:<16} {quote}");
    println!(
        "  {:<16} {} solver iterations, fee {}",
        "",
        quote.solver_iterations(),
        budget.fee_for(quote)?
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== StableSwap quoting ===\n");

    // ── 1. Ledger state as read from the pool application ──────────────
    let state: GlobalState = [
        ("a1", USDC.get()),
        ("a2", USDT.get()),
        ("lp", 1_000_001),
        ("b1", 10_000_000_000),
        ("b2", 9_800_000_000),
        ("lc", 19_700_000_000),
        ("fb", 10),
        ("ia", 100),
        ("fa", 400),
        ("iat", 1_699_000_000),
        ("fat", 1_701_000_000),
    ]
    .into_iter()
    .collect();

    let config = state.decode(PoolId::new(1_002_541_853), PoolType::StableSwap)?;
    let pool = PoolState::from_config(&config)?;
    println!("Pool: {pool}");

    // ── 2. Bind an engine to the snapshot at a fixed instant ───────────
    //    The amplification ramp is halfway through at this timestamp.
    let as_of = Timestamp::from_secs(1_700_000_000);
    let engine = QuoteEngine::new(&pool, as_of);
    if let Some(amp) = engine.current_amplification()? {
        println!("Amplification at {as_of}: {amp}\n");
    }

    let budget = ComputeBudget::new(1_000, 1_000);

    // ── 3. Swaps in both directions ────────────────────────────────────
    println!("--- Swaps ---");
    let sell = engine.swap_exact_for_quote(USDC, Amount::new(50_000_000))?;
    report("exact input", &sell, &budget)?;
    let buy = engine.swap_for_exact_quote(USDT, Amount::new(50_000_000))?;
    report("exact output", &buy, &budget)?;

    // ── 4. Liquidity ───────────────────────────────────────────────────
    println!("\n--- Liquidity ---");
    let deposit = engine.pool_quote(USDC, Amount::new(100_000_000))?;
    report("deposit", &deposit, &budget)?;
    let burn = engine.burn_quote(Amount::new(100_000_000))?;
    report("burn", &burn, &budget)?;

    // ── 5. Single-sided deposit ────────────────────────────────────────
    println!("\n--- Zap ---");
    let zap = engine.zap_quote(Amount::new(200_000_000), Amount::ZERO)?;
    report("zap", &zap, &budget)?;
    println!(
        "  {:<16} swap leg {:+} / {:+}",
        "",
        zap.zap_asset1_swap_delta(),
        zap.zap_asset2_swap_delta()
    );

    // ── 6. Apply the zap and quote again on the new snapshot ───────────
    let after = pool.apply(&zap)?;
    println!("\nAfter zap: {after}");
    let again = engine.rebind(&after).swap_exact_for_quote(USDC, Amount::new(50_000_000))?;
    report("exact input", &again, &budget)?;

    Ok(())
}
