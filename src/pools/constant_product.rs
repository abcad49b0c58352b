//! Constant Product pool implementation (`x · y = k`).
//!
//! The fee is charged on the input amount **before** the pricing formula
//! is applied. All intermediate values are arbitrary-precision integers;
//! only the final price-impact ratio is converted to floating point.
//!
//! # Quote Algorithm (unit in → unit out)
//!
//! 1. `fee_modifier = 10 000 − volume_fee`
//! 2. `numerator = q × fee_modifier × reserve_out`
//! 3. `denominator = q × fee_modifier + reserve_in × 10 000`
//! 4. `amount_out = ⌊numerator / denominator⌋`
//! 5. `price_impact = (reserve_out·q·denominator·fee_modifier − numerator·reserve_in·10 000)
//!    / (reserve_out·q·denominator·10 000)`
//!
//! A zero `amount_out` (or a zero denominator) short-circuits to `(0, 0.0)`.

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::config::ConstantProductConfig;
use crate::datum::{PoolDatum, RawDatum};
use crate::domain::{Amount, Assets, BasisPoints, CurveKind, SwapQuote, BPS_DENOMINATOR};
use crate::error::QuoteError;
use crate::math::big::ratio_to_f64;
use crate::pools::PoolState;
use crate::traits::{FromConfig, SwapPool};

/// Computes the constant-product output and price impact for a raw trade.
///
/// Returns `(amount_out, price_impact)`. The output is floored, so it is
/// always strictly below `reserve_out` when the input reserve is non-empty.
///
/// # Errors
///
/// - [`QuoteError::InvalidFee`] if `volume_fee` is 10 000 bp or more.
/// - [`QuoteError::Overflow`] if the output does not fit in an [`Amount`].
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, BasisPoints};
/// use amm_quote::pools::constant_product::amount_out;
///
/// let (out, impact) = amount_out(
///     Amount::new(1_000),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     BasisPoints::new(30),
/// )
/// .unwrap_or_default();
/// assert_eq!(out, Amount::new(996));
/// assert!(impact > 0.0);
/// ```
pub fn amount_out(
    quantity: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    volume_fee: BasisPoints,
) -> Result<(Amount, f64), QuoteError> {
    let fee_modifier = volume_fee
        .complement()
        .filter(|_| volume_fee.is_valid_fee())
        .ok_or(QuoteError::InvalidFee("volume fee must be below 10000 basis points"))?;

    let q = quantity.to_biguint();
    let r_in = reserve_in.to_biguint();
    let r_out = reserve_out.to_biguint();
    let fm = BigUint::from(fee_modifier);
    let bps = BigUint::from(BPS_DENOMINATOR);

    let numerator = &q * &fm * &r_out;
    let denominator = &q * &fm + &r_in * &bps;
    if denominator.is_zero() {
        return Ok((Amount::ZERO, 0.0));
    }

    let out = &numerator / &denominator;
    if out.is_zero() {
        return Ok((Amount::ZERO, 0.0));
    }
    let out = out
        .to_u128()
        .map(Amount::new)
        .ok_or(QuoteError::Overflow("constant-product output exceeds u128"))?;

    let scaled = BigInt::from(r_out * q * denominator);
    let impact_num = &scaled * BigInt::from(fm) - BigInt::from(numerator * r_in * &bps);
    let impact_den = scaled * BigInt::from(bps);
    let impact = ratio_to_f64(&impact_num, &impact_den).unwrap_or(0.0);

    Ok((out, impact))
}

/// A constant-product pool quoting over a [`PoolState`].
///
/// Created from a [`ConstantProductConfig`] via [`FromConfig`], or
/// wrapped around an existing record with [`ConstantProductPool::new`].
/// Quoting never mutates the pool.
///
/// # Example
///
/// ```rust
/// use amm_quote::config::ConstantProductConfig;
/// use amm_quote::domain::{Amount, Assets, BasisPoints, Unit, UnitPair};
/// use amm_quote::pools::ConstantProductPool;
/// use amm_quote::traits::{FromConfig, SwapPool};
///
/// # fn main() -> Result<(), amm_quote::error::QuoteError> {
/// let pair = UnitPair::new(Unit::lovelace(), Unit::new("f00d")?)?;
/// let cfg = ConstantProductConfig::new(
///     pair,
///     BasisPoints::new(30),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     "pool-1",
///     "VyFi",
/// )?;
/// let pool: ConstantProductPool = ConstantProductPool::from_config(&cfg)?;
///
/// let quote = pool.get_amount_out(&Assets::single(Unit::lovelace(), Amount::new(1_000)))?;
/// assert_eq!(quote.quantity_out(), Amount::new(996));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProductPool<D = RawDatum> {
    state: PoolState<D>,
}

impl<D> ConstantProductPool<D> {
    /// Wraps an existing pool record.
    #[must_use]
    pub const fn new(state: PoolState<D>) -> Self {
        Self { state }
    }

    /// Attaches a raw datum encoding.
    #[must_use]
    pub fn with_datum(self, raw: impl Into<Vec<u8>>) -> Self {
        Self {
            state: self.state.with_datum(raw),
        }
    }

    /// Mutable access to the record, for reserve and datum refreshes.
    pub fn state_mut(&mut self) -> &mut PoolState<D> {
        &mut self.state
    }
}

impl<D> FromConfig<ConstantProductConfig> for ConstantProductPool<D> {
    fn from_config(config: &ConstantProductConfig) -> Result<Self, QuoteError> {
        config.validate()?;
        let state = PoolState::new(
            config.pair().clone(),
            config.reserve_a(),
            config.reserve_b(),
            config.volume_fee(),
            config.pool_id(),
            config.dex(),
        )?;
        Ok(Self { state })
    }
}

impl<D: PoolDatum> SwapPool for ConstantProductPool<D> {
    type Datum = D;

    /// Quotes a swap on the constant-product curve.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidInput`] if `input` is not a single entry of
    ///   one of the pool's units.
    /// - [`QuoteError::Overflow`] if the output exceeds `u128`.
    fn get_amount_out(&self, input: &Assets) -> Result<SwapQuote, QuoteError> {
        let (side, quantity) = self.state.input_side(input)?;
        let unit_out = self.state.pair().unit(side.opposite());

        let (out, impact) = amount_out(
            quantity,
            self.state.reserve(side),
            self.state.reserve(side.opposite()),
            self.state.volume_fee(),
        )?;

        tracing::debug!(
            pool_id = self.state.pool_id(),
            dex = self.state.dex(),
            unit_out = %unit_out,
            quantity_in = %quantity,
            amount_out = %out,
            price_impact = impact,
            "constant-product quote"
        );

        Ok(SwapQuote::new(Assets::single(unit_out.clone(), out), impact))
    }

    fn pool_id(&self) -> &str {
        self.state.pool_id()
    }

    fn dex(&self) -> &str {
        self.state.dex()
    }

    fn curve(&self) -> CurveKind {
        CurveKind::ConstantProduct
    }

    fn state(&self) -> &PoolState<D> {
        &self.state
    }

    fn pool_datum(&mut self) -> Result<&D, QuoteError> {
        self.state.pool_datum()
    }
}
