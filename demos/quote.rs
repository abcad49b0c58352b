//! Quoting example across both curves.
//!
//! Builds a constant-product pool and a StableSwap pool over the same pair,
//! quotes a range of trade sizes through each, and shows how a reserve
//! refresh changes the next quote.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quote --all-features
//! ```

use amm_quote::config::{ConstantProductConfig, PoolConfig, StableSwapConfig};
use amm_quote::domain::{Amount, Assets, BasisPoints, Unit, UnitPair};
use amm_quote::factory::DefaultPoolFactory;
use amm_quote::pools::PoolBox;
use amm_quote::traits::SwapPool;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Swap quotes: constant product vs StableSwap ===\n");

    // ── 1. Define units ─────────────────────────────────────────────────
    let usdm = Unit::new("c48cbb3d5e57ed56e276bc45f99ab39abe94e6cd7ac39fb402da47ad0014df105553444d")?;
    let djed = Unit::new("8db269c3ec630e06ae29f74bc39edd1f87c819f1056206e879a1cd61446a65644d6963726f555344")?;
    let pair = UnitPair::new(usdm.clone(), djed.clone())?;

    println!("Unit A policy: {}", usdm.policy_id().unwrap_or("-"));
    println!("Unit B policy: {}", djed.policy_id().unwrap_or("-"));

    // ── 2. Configure both pools with the same reserves ──────────────────
    let reserve = Amount::new(50_000_000_000);
    let cp = PoolConfig::ConstantProduct(ConstantProductConfig::new(
        pair.clone(),
        BasisPoints::new(30),
        reserve,
        reserve,
        "usdm-djed-cp",
        "VyFi",
    )?);
    let stable = PoolConfig::StableSwap(
        StableSwapConfig::new(
            pair,
            BasisPoints::new(4),
            reserve,
            reserve,
            "usdm-djed-stable",
            "Stable",
        )?
        .with_amplification(100)?,
    );

    let mut pools: Vec<PoolBox> = vec![
        DefaultPoolFactory::create(&cp)?,
        DefaultPoolFactory::create(&stable)?,
    ];

    for pool in &pools {
        println!(
            "Pool {} on {}: {} (fee {})",
            pool.pool_id(),
            pool.dex(),
            pool.curve(),
            pool.state().volume_fee()
        );
    }

    // ── 3. Quote increasing trade sizes ─────────────────────────────────
    println!("\n{:>16} | {:>16} {:>10} | {:>16}", "in", "cp out", "impact", "stable out");
    for size in [1_000_000u128, 100_000_000, 1_000_000_000, 10_000_000_000] {
        let input = Assets::single(usdm.clone(), Amount::new(size));
        let cp_quote = pools[0].get_amount_out(&input)?;
        let stable_quote = pools[1].get_amount_out(&input)?;
        println!(
            "{:>16} | {:>16} {:>9.4}% | {:>16}",
            size,
            cp_quote.quantity_out(),
            cp_quote.price_impact() * 100.0,
            stable_quote.quantity_out()
        );
    }

    // ── 4. Refresh reserves after an on-chain update ────────────────────
    pools[1]
        .state_mut()
        .set_reserves(Amount::new(80_000_000_000), Amount::new(20_000_000_000));
    let quote = pools[1].get_amount_out(&Assets::single(usdm, Amount::new(1_000_000_000)))?;
    println!("\nAfter imbalance, StableSwap quote: {quote}");

    Ok(())
}
