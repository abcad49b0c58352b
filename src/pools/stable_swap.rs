//! StableSwap pool implementation (Curve style, two coins).
//!
//! Specialised for low-slippage swaps between pegged assets.
//!
//! # Invariant (n = 2 coins)
//!
//! ```text
//! Ann · (x + y) + D = Ann · D + D³ / (4 · x · y),   Ann = A · nⁿ
//! ```
//!
//! where:
//! - `A`: amplification coefficient (default 75).
//! - `D`: invariant (≈ total reserves at peg).
//! - `x`, `y`: reserves of the two units.
//!
//! # Quote Algorithm
//!
//! 1. Deduct the fee from the input in floating point.
//! 2. `in_reserve = reserve_in + net_input`.
//! 3. Solve `D` on the pre-trade reserves.
//! 4. Solve the projected output reserve `y` for `(in_reserve, D)`.
//! 5. `amount_out = reserve_out − ⌊y⌋`, saturating at zero.
//!
//! Both solves run on `f64` through [`newton::solve`]. Integer terms are
//! formed exactly and each is rounded to `f64` once, so quotes stay
//! bit-stable even for reserves past `2^53`. The fee deduction is floating
//! point too, unlike the integer constant-product path. Price impact is not
//! modeled and is always reported as `0.0`.

use num_bigint::BigUint;

use crate::config::StableSwapConfig;
use crate::datum::{PoolDatum, RawDatum};
use crate::domain::{Amount, Assets, CurveKind, SwapQuote, Unit};
use crate::error::QuoteError;
use crate::math::big::{biguint_to_f64, unsigned_ratio_to_f64};
use crate::math::newton::{self, Solution};
use crate::pools::PoolState;
use crate::traits::{FromConfig, SwapPool};

/// Number of coins in a StableSwap pair.
const N_COINS: f64 = 2.0;

/// `N_COINS^N_COINS`.
const N_POW_N: f64 = 4.0;

/// `N_COINS^N_COINS` for the exact integer terms.
const N_POW_N_INT: u64 = 4;

const OUT_OF_RANGE: QuoteError = QuoteError::Overflow("stable-swap term exceeds f64 range");

// ---------------------------------------------------------------------------
// StableSwap math helpers
// ---------------------------------------------------------------------------

fn ann(amplification: u32) -> f64 {
    f64::from(amplification) * N_POW_N
}

/// Raises `base` to `exponent` through the platform `pow`.
///
/// The exponent is hidden from the optimizer, which would otherwise fold
/// `powf(x, 2.0)` into `x * x`; the two can differ in the last bit.
fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(core::hint::black_box(exponent))
}

fn to_f64(value: &BigUint) -> Result<f64, QuoteError> {
    biguint_to_f64(value).ok_or(OUT_OF_RANGE)
}

/// Solves the invariant `D` for two reserves.
///
/// Iteration, starting from `D = S = x + y`:
///
/// ```text
/// D_P    = D³ / (nⁿ · x · y)
/// D_next = D · (Ann · S + n · D_P) / ((Ann − 1) · D + (n + 1) · D_P)
/// ```
///
/// The integer terms `S`, `Ann · S`, `nⁿ · x · y` and, on the first step
/// where `D = S` is still exact, `S³` and `(Ann − 1) · S` are formed with
/// arbitrary precision and rounded to `f64` once each. Later steps run on
/// the float estimate.
///
/// An empty pool has `D = 0` without iterating.
///
/// # Errors
///
/// - [`QuoteError::ZeroReserve`] if exactly one reserve is zero.
/// - [`QuoteError::Overflow`] if an integer term exceeds the `f64` range.
pub fn compute_d(
    reserve_a: Amount,
    reserve_b: Amount,
    amplification: u32,
) -> Result<Solution, QuoteError> {
    match (reserve_a.is_zero(), reserve_b.is_zero()) {
        (true, true) => return Ok(Solution::exact(0.0)),
        (true, false) | (false, true) => return Err(QuoteError::ZeroReserve),
        (false, false) => {}
    }

    let ann_int = u64::from(amplification) * N_POW_N_INT;
    let s = reserve_a.to_biguint() + reserve_b.to_biguint();
    let product = reserve_a.to_biguint() * reserve_b.to_biguint() * N_POW_N_INT;

    let s_f = to_f64(&s)?;
    let ann_s = to_f64(&(&s * ann_int))?;
    let product_f = to_f64(&product)?;
    let ann = ann(amplification);

    let first_d_p = unsigned_ratio_to_f64(&s.pow(3), &product).ok_or(OUT_OF_RANGE)?;
    let first_den = to_f64(&(&s * (ann_int - 1)))? + (N_COINS + 1.0) * first_d_p;
    let mut first = Some(s_f * (ann_s + first_d_p * N_COINS) / first_den);

    Ok(newton::solve(s_f, |d| {
        first.take().unwrap_or_else(|| {
            let d_p = pow(d, 3.0) / product_f;
            d * (ann_s + d_p * N_COINS) / ((ann - 1.0) * d + (N_COINS + 1.0) * d_p)
        })
    }))
}

/// Solves the projected reserve `y` of the output unit once the input
/// reserve has become `in_reserve`, holding `D` fixed.
///
/// Iteration, starting from `y = D`:
///
/// ```text
/// c      = D³ / (n² · Ann · in_reserve)
/// b      = in_reserve + D / Ann
/// y_next = (y² + c) / (2y + b − D)
/// ```
///
/// # Errors
///
/// Returns [`QuoteError::ZeroReserve`] if `in_reserve` is zero while
/// `d` is positive.
pub fn compute_y(in_reserve: f64, d: f64, amplification: u32) -> Result<Solution, QuoteError> {
    if d == 0.0 {
        return Ok(Solution::exact(0.0));
    }
    if in_reserve == 0.0 {
        return Err(QuoteError::ZeroReserve);
    }

    let ann = ann(amplification);
    let c = pow(d, 3.0) / (N_COINS * N_COINS * ann * in_reserve);
    let b = in_reserve + d / ann;

    Ok(newton::solve(d, |y| (pow(y, 2.0) + c) / (2.0 * y + b - d)))
}

// ---------------------------------------------------------------------------
// Pool
// ---------------------------------------------------------------------------

/// A two-coin StableSwap pool quoting over a [`PoolState`].
///
/// # Example
///
/// ```rust
/// use amm_quote::config::StableSwapConfig;
/// use amm_quote::domain::{Amount, Assets, BasisPoints, Unit, UnitPair};
/// use amm_quote::pools::StableSwapPool;
/// use amm_quote::traits::{FromConfig, SwapPool};
///
/// # fn main() -> Result<(), amm_quote::error::QuoteError> {
/// let usd = Unit::new("usdm")?;
/// let pair = UnitPair::new(usd.clone(), Unit::new("djed")?)?;
/// let cfg = StableSwapConfig::new(
///     pair,
///     BasisPoints::new(4),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     "stable-1",
///     "Stable",
/// )?;
/// let pool: StableSwapPool = StableSwapPool::from_config(&cfg)?;
///
/// let quote = pool.get_amount_out(&Assets::single(usd, Amount::new(1_000)))?;
/// assert!(quote.quantity_out() > Amount::new(990));
/// assert_eq!(quote.price_impact(), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StableSwapPool<D = RawDatum> {
    state: PoolState<D>,
    amplification: u32,
}

impl<D> StableSwapPool<D> {
    /// Wraps an existing pool record.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if `amplification`
    /// is zero.
    pub fn new(state: PoolState<D>, amplification: u32) -> Result<Self, QuoteError> {
        if amplification == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "amplification must be greater than zero",
            ));
        }
        Ok(Self {
            state,
            amplification,
        })
    }

    /// Attaches a raw datum encoding.
    #[must_use]
    pub fn with_datum(self, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            state: self.state.with_datum(raw),
            amplification: self.amplification,
        }
    }

    /// Mutable access to the record, for reserve and datum refreshes.
    pub fn state_mut(&mut self) -> &mut PoolState<D> {
        &mut self.state
    }

    /// Returns the amplification coefficient.
    #[must_use]
    pub const fn amplification(&self) -> u32 {
        self.amplification
    }

    /// Solves the invariant on the current reserves, keeping diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ZeroReserve`] if exactly one reserve is zero.
    pub fn solve_d(&self) -> Result<Solution, QuoteError> {
        let solution = compute_d(
            self.state.reserve_a(),
            self.state.reserve_b(),
            self.amplification,
        )?;
        self.report("D", &solution);
        Ok(solution)
    }

    /// Returns the invariant `D` on the current reserves.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::ZeroReserve`] if exactly one reserve is zero.
    pub fn get_d(&self) -> Result<f64, QuoteError> {
        self.solve_d().map(|s| s.value)
    }

    /// Returns the projected post-trade reserve of `out_unit` after
    /// depositing `input`.
    ///
    /// The result is the absolute reserve, not the delivered amount.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidInput`] if `input` is not a single entry of a
    ///   pool unit, or `out_unit` is not the other pool unit.
    /// - [`QuoteError::ZeroReserve`] if exactly one reserve is zero.
    pub fn get_y(&self, input: &Assets, out_unit: &Unit) -> Result<Assets, QuoteError> {
        let (side, quantity) = self.state.input_side(input)?;
        match self.state.pair().side_of(out_unit) {
            Some(out_side) if out_side == side.opposite() => {}
            Some(_) => {
                return Err(QuoteError::InvalidInput(
                    "output unit must differ from the input unit",
                ))
            }
            None => {
                return Err(QuoteError::InvalidInput(
                    "output unit is not traded by this pool",
                ))
            }
        }

        let in_quantity = self.state.volume_fee().deduct_from_f64(quantity)?;
        let in_reserve = self.state.reserve(side).as_f64() + in_quantity;
        let d = self.solve_d()?.value;

        let solution = compute_y(in_reserve, d, self.amplification)?;
        self.report("y", &solution);

        Ok(Assets::single(
            out_unit.clone(),
            Amount::from_f64_floor(solution.value),
        ))
    }

    fn report(&self, stage: &'static str, solution: &Solution) {
        if solution.converged {
            tracing::trace!(
                pool_id = self.state.pool_id(),
                stage,
                iterations = solution.iterations,
                value = solution.value,
                "stable-swap solve converged"
            );
        } else {
            tracing::warn!(
                pool_id = self.state.pool_id(),
                stage,
                iterations = solution.iterations,
                value = solution.value,
                "stable-swap solve hit the iteration ceiling; using last estimate"
            );
        }
    }
}

impl<D> FromConfig<StableSwapConfig> for StableSwapPool<D> {
    fn from_config(config: &StableSwapConfig) -> Result<Self, QuoteError> {
        config.validate()?;
        let state = PoolState::new(
            config.pair().clone(),
            config.reserve_a(),
            config.reserve_b(),
            config.volume_fee(),
            config.pool_id(),
            config.dex(),
        )?;
        Self::new(state, config.amplification())
    }
}

impl<D: PoolDatum> SwapPool for StableSwapPool<D> {
    type Datum = D;

    /// Quotes a swap on the StableSwap curve.
    ///
    /// The price impact is always `0.0`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidInput`] if `input` is not a single entry of
    ///   one of the pool's units.
    /// - [`QuoteError::ZeroReserve`] if exactly one reserve is zero.
    fn get_amount_out(&self, input: &Assets) -> Result<SwapQuote, QuoteError> {
        let (side, quantity) = self.state.input_side(input)?;
        let out_side = side.opposite();
        let unit_out = self.state.pair().unit(out_side);

        let projected = self.get_y(input, unit_out)?.quantity_of(unit_out);
        let out = self.state.reserve(out_side).saturating_sub(&projected);

        tracing::debug!(
            pool_id = self.state.pool_id(),
            dex = self.state.dex(),
            unit_out = %unit_out,
            quantity_in = %quantity,
            projected_reserve = %projected,
            amount_out = %out,
            "stable-swap quote"
        );

        Ok(SwapQuote::new(Assets::single(unit_out.clone(), out), 0.0))
    }

    fn pool_id(&self) -> &str {
        self.state.pool_id()
    }

    fn dex(&self) -> &str {
        self.state.dex()
    }

    fn curve(&self) -> CurveKind {
        CurveKind::StableSwap
    }

    fn state(&self) -> &PoolState<D> {
        &self.state
    }

    fn pool_datum(&mut self) -> Result<&D, QuoteError> {
        self.state.pool_datum()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{BasisPoints, UnitPair};

    // -- helpers --------------------------------------------------------------

    fn unit(s: &str) -> Unit {
        let Ok(u) = Unit::new(s) else {
            panic!("valid unit");
        };
        u
    }

    fn make_pool(ra: u128, rb: u128, fee: u32, amp: u32) -> StableSwapPool {
        let Ok(pair) = UnitPair::new(unit("a"), unit("b")) else {
            panic!("expected valid pair");
        };
        let Ok(cfg) = StableSwapConfig::new(
            pair,
            BasisPoints::new(fee),
            Amount::new(ra),
            Amount::new(rb),
            "stable-1",
            "Stable",
        ) else {
            panic!("expected valid config");
        };
        let Ok(cfg) = cfg.with_amplification(amp) else {
            panic!("expected valid amplification");
        };
        let Ok(pool) = StableSwapPool::from_config(&cfg) else {
            panic!("expected pool");
        };
        pool
    }

    fn out(pool: &StableSwapPool, u: &str, qty: u128) -> Amount {
        let Ok(q) = pool.get_amount_out(&Assets::single(unit(u), Amount::new(qty))) else {
            panic!("expected quote");
        };
        assert_eq!(q.price_impact(), 0.0);
        q.quantity_out()
    }

    // -- invariant D ----------------------------------------------------------

    #[test]
    fn d_of_balanced_pool_is_sum() {
        let Ok(sol) = compute_d(Amount::new(1_000_000), Amount::new(1_000_000), 75) else {
            panic!("expected D");
        };
        assert!(sol.converged);
        assert!((sol.value - 2_000_000.0).abs() < 1.0);
    }

    #[test]
    fn d_of_imbalanced_pool_below_sum() {
        let Ok(sol) = compute_d(Amount::new(1_000_000), Amount::new(3_000_000), 75) else {
            panic!("expected D");
        };
        assert!(sol.converged);
        assert!(sol.value < 4_000_000.0);
        assert!(sol.value > 3_900_000.0);
    }

    #[test]
    fn d_of_empty_pool_is_zero() {
        let pool = make_pool(0, 0, 4, 75);
        assert_eq!(pool.get_d(), Ok(0.0));
    }

    #[test]
    fn d_of_one_sided_pool_is_undefined() {
        let pool = make_pool(0, 1_000, 4, 75);
        assert_eq!(pool.get_d(), Err(QuoteError::ZeroReserve));
    }

    #[test]
    fn d_is_deterministic() {
        let pool = make_pool(1_234_567, 7_654_321, 4, 75);
        let (Ok(first), Ok(second)) = (pool.get_d(), pool.get_d()) else {
            panic!("expected D");
        };
        assert_eq!(first.to_bits(), second.to_bits());
    }

    // -- projected reserve y --------------------------------------------------

    #[test]
    fn y_of_empty_pool_is_zero() {
        let pool = make_pool(0, 0, 4, 75);
        let Ok(y) = pool.get_y(&Assets::single(unit("a"), Amount::new(500)), &unit("b")) else {
            panic!("expected y");
        };
        assert_eq!(y.quantity_of(&unit("b")), Amount::ZERO);
    }

    #[test]
    fn y_is_post_trade_reserve() {
        let pool = make_pool(1_000_000, 1_000_000, 4, 75);
        let Ok(y) = pool.get_y(&Assets::single(unit("a"), Amount::new(1_000)), &unit("b")) else {
            panic!("expected y");
        };
        let projected = y.quantity_of(&unit("b"));
        assert!(projected < Amount::new(1_000_000));
        assert!(projected > Amount::new(998_000));
    }

    #[test]
    fn y_is_deterministic() {
        let pool = make_pool(5_000_000, 4_000_000, 4, 75);
        let input = Assets::single(unit("b"), Amount::new(12_345));
        assert_eq!(pool.get_y(&input, &unit("a")), pool.get_y(&input, &unit("a")));
    }

    #[test]
    fn y_rejects_foreign_output_unit() {
        let pool = make_pool(1_000, 1_000, 4, 75);
        let result = pool.get_y(&Assets::single(unit("a"), Amount::new(1)), &unit("z"));
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn y_rejects_same_unit_output() {
        let pool = make_pool(1_000, 1_000, 4, 75);
        let result = pool.get_y(&Assets::single(unit("a"), Amount::new(1)), &unit("a"));
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn compute_y_rejects_zero_in_reserve() {
        assert_eq!(compute_y(0.0, 10.0, 75), Err(QuoteError::ZeroReserve));
    }

    // -- quotes ---------------------------------------------------------------

    #[test]
    fn balanced_pool_quotes_near_par() {
        let got = out(&make_pool(1_000_000, 1_000_000, 4, 75), "a", 1_000);
        assert!(got >= Amount::new(995));
        assert!(got <= Amount::new(1_000));
    }

    #[cfg(feature = "constant-product")]
    #[test]
    fn beats_constant_product_on_balanced_pool() {
        let Ok((cp, _)) = crate::pools::constant_product::amount_out(
            Amount::new(100_000),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
            BasisPoints::new(4),
        ) else {
            panic!("expected constant-product quote");
        };
        let stable = out(&make_pool(1_000_000, 1_000_000, 4, 75), "a", 100_000);
        assert!(stable > cp);
    }

    #[test]
    fn higher_amplification_flattens_curve() {
        let low = out(&make_pool(1_000_000, 1_000_000, 4, 1), "a", 500_000);
        let high = out(&make_pool(1_000_000, 1_000_000, 4, 1_000), "a", 500_000);
        assert!(high > low);
    }

    #[test]
    fn output_below_reserve() {
        let got = out(&make_pool(1_000_000, 1_000_000, 4, 75), "b", 10_000_000);
        assert!(got < Amount::new(1_000_000));
    }

    #[test]
    fn empty_pool_quotes_zero() {
        assert_eq!(out(&make_pool(0, 0, 4, 75), "a", 1_000), Amount::ZERO);
    }

    #[test]
    fn one_sided_pool_rejected() {
        let pool = make_pool(1_000, 0, 4, 75);
        let result = pool.get_amount_out(&Assets::single(unit("a"), Amount::new(10)));
        assert_eq!(result, Err(QuoteError::ZeroReserve));
    }

    #[test]
    fn two_entry_bag_rejected() {
        let pool = make_pool(1_000, 1_000, 4, 75);
        let input = Assets::single(unit("a"), Amount::new(1)).with(unit("b"), Amount::new(1));
        assert!(matches!(
            pool.get_amount_out(&input),
            Err(QuoteError::InvalidInput(_))
        ));
    }

    // -- reference values -----------------------------------------------------

    struct Reference {
        reserve_a: u128,
        reserve_b: u128,
        fee: u32,
        amp: u32,
        quantity: u128,
        from_a: bool,
        d: f64,
        projected: u128,
        amount_out: u128,
    }

    const REFERENCES: [Reference; 8] = [
        Reference {
            reserve_a: 1_000_000,
            reserve_b: 1_000_000,
            fee: 4,
            amp: 75,
            quantity: 1_000,
            from_a: true,
            d: 2_000_000.0,
            projected: 999_000,
            amount_out: 1_000,
        },
        Reference {
            reserve_a: 1_000_000,
            reserve_b: 3_000_000,
            fee: 4,
            amp: 75,
            quantity: 250_000,
            from_a: false,
            d: 3_995_599.496_070_406_4,
            projected: 754_071,
            amount_out: 245_929,
        },
        Reference {
            reserve_a: 3_000_000,
            reserve_b: 5_000_000,
            fee: 4,
            amp: 75,
            quantity: 25_000,
            from_a: true,
            d: 7_998_235.160_227_978,
            projected: 4_974_917,
            amount_out: 25_083,
        },
        Reference {
            reserve_a: 10_000_000,
            reserve_b: 10_000_000,
            fee: 4,
            amp: 75,
            quantity: 500_000,
            from_a: true,
            d: 20_000_000.0,
            projected: 9_500_365,
            amount_out: 499_635,
        },
        Reference {
            reserve_a: 1_548_284_331_644_096,
            reserve_b: 7_533_121_096_608_578,
            fee: 0,
            amp: 75,
            quantity: 270_961_196_796_816,
            from_a: true,
            d: 9_058_492_292_854_482.0,
            projected: 7_255_976_256_462_064,
            amount_out: 277_144_840_146_514,
        },
        Reference {
            reserve_a: 1_548_284_331_644_096,
            reserve_b: 7_533_121_096_608_578,
            fee: 9_999,
            amp: 75,
            quantity: 270_961_196_796_816,
            from_a: true,
            d: 9_058_492_292_854_482.0,
            projected: 7_533_093_267_266_705,
            amount_out: 27_829_341_873,
        },
        Reference {
            reserve_a: 2_639_043_699_207_619,
            reserve_b: 2_362_976_200_231_500,
            fee: 100,
            amp: 75,
            quantity: 407_418_077_906_196,
            from_a: true,
            d: 5_001_969_294_841_508.0,
            projected: 1_960_394_201_513_173,
            amount_out: 402_581_998_718_327,
        },
        Reference {
            reserve_a: 8_568_370_353_386_505,
            reserve_b: 776_879_781_699_530,
            fee: 4,
            amp: 1_000,
            quantity: 440_270_191_515_178,
            from_a: true,
            d: 9_339_935_152_061_472.0,
            projected: 345_496_984_813_704,
            amount_out: 431_382_796_885_826,
        },
    ];

    #[test]
    fn d_matches_reference_bits() {
        for r in &REFERENCES {
            let pool = make_pool(r.reserve_a, r.reserve_b, r.fee, r.amp);
            let Ok(d) = pool.get_d() else {
                panic!("expected D for {}/{}", r.reserve_a, r.reserve_b);
            };
            assert_eq!(
                d.to_bits(),
                r.d.to_bits(),
                "D for {}/{}: got {d}, want {}",
                r.reserve_a,
                r.reserve_b,
                r.d
            );
        }
    }

    #[test]
    fn y_matches_reference() {
        for r in &REFERENCES {
            let pool = make_pool(r.reserve_a, r.reserve_b, r.fee, r.amp);
            let (unit_in, unit_out) = if r.from_a { ("a", "b") } else { ("b", "a") };
            let input = Assets::single(unit(unit_in), Amount::new(r.quantity));
            let Ok(y) = pool.get_y(&input, &unit(unit_out)) else {
                panic!("expected y for {}/{}", r.reserve_a, r.reserve_b);
            };
            assert_eq!(y.quantity_of(&unit(unit_out)), Amount::new(r.projected));
        }
    }

    #[test]
    fn quote_matches_reference() {
        for r in &REFERENCES {
            let pool = make_pool(r.reserve_a, r.reserve_b, r.fee, r.amp);
            let unit_in = if r.from_a { "a" } else { "b" };
            assert_eq!(
                out(&pool, unit_in, r.quantity),
                Amount::new(r.amount_out),
                "quote for {}/{} fee {} amp {}",
                r.reserve_a,
                r.reserve_b,
                r.fee,
                r.amp
            );
        }
    }

    #[test]
    fn quote_is_reserve_minus_projection() {
        let pool = make_pool(3_000_000, 5_000_000, 4, 75);
        let input = Assets::single(unit("a"), Amount::new(25_000));
        let Ok(y) = pool.get_y(&input, &unit("b")) else {
            panic!("expected y");
        };
        let projected = y.quantity_of(&unit("b"));
        assert_eq!(
            out(&pool, "a", 25_000),
            Amount::new(5_000_000).saturating_sub(&projected)
        );
    }

    #[test]
    fn max_fee_keeps_a_ten_thousandth() {
        // 9999 bp leaves q / 10000 of the input: 270961196796816 → 27096119679.6816
        let Ok(kept) = BasisPoints::new(9_999).deduct_from_f64(Amount::new(270_961_196_796_816))
        else {
            panic!("expected fee deduction");
        };
        assert_eq!(kept.to_bits(), 27_096_119_679.681_6_f64.to_bits());
    }

    // -- construction & identity ----------------------------------------------

    #[test]
    fn zero_amplification_rejected() {
        let Ok(pair) = UnitPair::new(unit("a"), unit("b")) else {
            panic!("expected valid pair");
        };
        let Ok(state) = PoolState::<RawDatum>::new(
            pair,
            Amount::ZERO,
            Amount::ZERO,
            BasisPoints::new(4),
            "stable-1",
            "Stable",
        ) else {
            panic!("expected valid state");
        };
        assert!(matches!(
            StableSwapPool::new(state, 0),
            Err(QuoteError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn identity_accessors() {
        let pool = make_pool(10, 20, 4, 100);
        assert_eq!(pool.pool_id(), "stable-1");
        assert_eq!(pool.dex(), "Stable");
        assert_eq!(pool.curve(), CurveKind::StableSwap);
        assert_eq!(pool.amplification(), 100);
    }

    #[test]
    fn solve_d_reports_iterations() {
        let pool = make_pool(1_000_000, 9_000_000, 4, 75);
        let Ok(sol) = pool.solve_d() else {
            panic!("expected D");
        };
        assert!(sol.converged);
        assert!(sol.iterations >= 1);
        assert!(sol.iterations <= newton::MAX_ITERATIONS);
    }

    #[test]
    fn refreshed_reserves_change_d() {
        let mut pool = make_pool(1_000, 1_000, 4, 75);
        pool.state_mut().set_reserves(Amount::new(5_000), Amount::new(5_000));
        let Ok(d) = pool.get_d() else {
            panic!("expected D");
        };
        assert!((d - 10_000.0).abs() < 1.0);
    }
}
