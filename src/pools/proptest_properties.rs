//! Property-based tests using `proptest` for quoting invariants.
//!
//! Covers:
//!
//! 1. **Bounded output**: a constant-product quote never drains the pool.
//! 2. **Input monotonicity**: more input never yields less output.
//! 3. **Fee monotonicity**: a higher fee never yields more output.
//! 4. **Direction symmetry**: mirrored pools quote mirrored results.
//! 5. **Zero short-circuit**: a zero output always carries zero impact.
//! 6. **StableSwap determinism**: repeated solves are bit-identical.

use proptest::prelude::*;

use crate::config::{ConstantProductConfig, StableSwapConfig};
use crate::domain::{Amount, Assets, BasisPoints, SwapQuote, Unit, UnitPair};
use crate::pools::{ConstantProductPool, StableSwapPool};
use crate::traits::{FromConfig, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn unit_a() -> Unit {
    Unit::lovelace()
}

fn unit_b() -> Unit {
    let Ok(u) = Unit::new("c0ffee") else {
        panic!("valid unit");
    };
    u
}

fn make_pair() -> UnitPair {
    let Ok(pair) = UnitPair::new(unit_a(), unit_b()) else {
        panic!("valid pair");
    };
    pair
}

fn make_cp(ra: u128, rb: u128, fee: u32) -> ConstantProductPool {
    let Ok(cfg) = ConstantProductConfig::new(
        make_pair(),
        BasisPoints::new(fee),
        Amount::new(ra),
        Amount::new(rb),
        "cp",
        "VyFi",
    ) else {
        panic!("valid CP config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid CP pool");
    };
    pool
}

fn make_stable(ra: u128, rb: u128, amp: u32) -> StableSwapPool {
    let Ok(cfg) = StableSwapConfig::new(
        make_pair(),
        BasisPoints::new(4),
        Amount::new(ra),
        Amount::new(rb),
        "ss",
        "Stable",
    ) else {
        panic!("valid StableSwap config");
    };
    let Ok(cfg) = cfg.with_amplification(amp) else {
        panic!("valid amplification");
    };
    let Ok(pool) = StableSwapPool::from_config(&cfg) else {
        panic!("valid StableSwap pool");
    };
    pool
}

fn quote<P: SwapPool>(pool: &P, unit: Unit, qty: u128) -> SwapQuote {
    let Ok(q) = pool.get_amount_out(&Assets::single(unit, Amount::new(qty))) else {
        panic!("quote should succeed");
    };
    q
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [1, 10^15], covering dust and whale pools.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000u128
}

/// Input quantities in range [0, 10^15].
fn input_strategy() -> impl Strategy<Value = u128> {
    0u128..=1_000_000_000_000_000u128
}

/// Valid volume fees.
fn fee_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

/// Amplification values in [1, 1_000].
fn amplification_strategy() -> impl Strategy<Value = u32> {
    1u32..=1_000u32
}

// ---------------------------------------------------------------------------
// Constant product
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_cp_output_below_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        fee in fee_strategy(),
    ) {
        let q = quote(&make_cp(ra, rb, fee), unit_a(), q);
        prop_assert!(
            q.quantity_out() < Amount::new(rb),
            "output {} must stay below reserve {}",
            q.quantity_out(), rb
        );
    }

    #[test]
    fn prop_cp_monotonic_in_input(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q1 in input_strategy(),
        q2 in input_strategy(),
        fee in fee_strategy(),
    ) {
        let (small, large) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let pool = make_cp(ra, rb, fee);
        let out_small = quote(&pool, unit_a(), small).quantity_out();
        let out_large = quote(&pool, unit_a(), large).quantity_out();
        prop_assert!(
            out_small <= out_large,
            "input {} gave {} but larger input {} gave {}",
            small, out_small, large, out_large
        );
    }

    #[test]
    fn prop_cp_fee_never_helps(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        f1 in fee_strategy(),
        f2 in fee_strategy(),
    ) {
        let (low, high) = if f1 <= f2 { (f1, f2) } else { (f2, f1) };
        let out_low = quote(&make_cp(ra, rb, low), unit_a(), q).quantity_out();
        let out_high = quote(&make_cp(ra, rb, high), unit_a(), q).quantity_out();
        prop_assert!(out_high <= out_low);
    }

    #[test]
    fn prop_cp_direction_symmetry(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        fee in fee_strategy(),
    ) {
        let forward = quote(&make_cp(ra, rb, fee), unit_a(), q);
        let mirrored = quote(&make_cp(rb, ra, fee), unit_b(), q);
        prop_assert_eq!(forward.quantity_out(), mirrored.quantity_out());
        prop_assert_eq!(
            forward.price_impact().to_bits(),
            mirrored.price_impact().to_bits()
        );
    }

    #[test]
    fn prop_cp_impact_is_a_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        fee in fee_strategy(),
    ) {
        let impact = quote(&make_cp(ra, rb, fee), unit_a(), q).price_impact();
        prop_assert!((0.0..1.0).contains(&impact), "impact {} out of range", impact);
    }

    #[test]
    fn prop_cp_zero_output_has_zero_impact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        fee in fee_strategy(),
    ) {
        let q = quote(&make_cp(ra, rb, fee), unit_a(), q);
        if q.quantity_out().is_zero() {
            prop_assert_eq!(q.price_impact().to_bits(), 0.0f64.to_bits());
        }
    }
}

// ---------------------------------------------------------------------------
// StableSwap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_stable_solves_are_deterministic(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        amp in amplification_strategy(),
    ) {
        let pool = make_stable(ra, rb, amp);
        let (Ok(d1), Ok(d2)) = (pool.get_d(), pool.get_d()) else {
            panic!("D defined on non-empty pool");
        };
        prop_assert_eq!(d1.to_bits(), d2.to_bits());

        let input = Assets::single(unit_a(), Amount::new(q));
        prop_assert_eq!(
            pool.get_y(&input, &unit_b()),
            pool.get_y(&input, &unit_b())
        );
    }

    #[test]
    fn prop_stable_output_within_reserve(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        amp in amplification_strategy(),
    ) {
        let out = quote(&make_stable(ra, rb, amp), unit_a(), q);
        prop_assert!(out.quantity_out() <= Amount::new(rb));
        prop_assert_eq!(out.price_impact().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn prop_stable_direction_symmetry(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        q in input_strategy(),
        amp in amplification_strategy(),
    ) {
        let forward = quote(&make_stable(ra, rb, amp), unit_a(), q);
        let mirrored = quote(&make_stable(rb, ra, amp), unit_b(), q);
        prop_assert_eq!(forward.quantity_out(), mirrored.quantity_out());
    }
}
