//! Shared pricing record held by every pool variant.

use crate::datum::{Datum, PoolDatum, RawDatum};
use crate::domain::{Amount, Assets, BasisPoints, Side, Unit, UnitPair};
use crate::error::QuoteError;

/// One pool's pricing-relevant attributes.
///
/// Reserves are positional: `reserve_a` always belongs to
/// [`UnitPair::unit_a`]. The record is read-only during a quote; reserves
/// and the datum may be refreshed between quotes through `&mut self`.
///
/// # Invariants
///
/// - `volume_fee < 10 000` bp
/// - `pool_id` and `dex` are non-empty
#[derive(Debug, Clone, PartialEq)]
pub struct PoolState<D = RawDatum> {
    pair: UnitPair,
    reserve_a: Amount,
    reserve_b: Amount,
    volume_fee: BasisPoints,
    pool_id: String,
    dex: String,
    datum: Datum<D>,
}

impl<D> PoolState<D> {
    /// Creates a validated pool record with no datum attached.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidFee`] if `volume_fee` is 10 000 bp or more.
    /// - [`QuoteError::InvalidConfiguration`] if `pool_id` or `dex` is empty.
    pub fn new(
        pair: UnitPair,
        reserve_a: Amount,
        reserve_b: Amount,
        volume_fee: BasisPoints,
        pool_id: impl Into<String>,
        dex: impl Into<String>,
    ) -> Result<Self, QuoteError> {
        let pool_id = pool_id.into();
        let dex = dex.into();
        crate::config::validate_pool_params(volume_fee, &pool_id, &dex)?;
        Ok(Self {
            pair,
            reserve_a,
            reserve_b,
            volume_fee,
            pool_id,
            dex,
            datum: Datum::Missing,
        })
    }

    /// Attaches a raw datum encoding, decoded on first request.
    #[must_use]
    pub fn with_datum(mut self, raw: impl Into<Vec<u8>>) -> Self {
        self.datum = Datum::from_raw(raw);
        self
    }

    /// Returns the unit pair.
    #[must_use]
    pub const fn pair(&self) -> &UnitPair {
        &self.pair
    }

    /// Returns `unit_a`.
    #[must_use]
    pub const fn unit_a(&self) -> &Unit {
        self.pair.unit_a()
    }

    /// Returns `unit_b`.
    #[must_use]
    pub const fn unit_b(&self) -> &Unit {
        self.pair.unit_b()
    }

    /// Returns the reserve of `unit_a`.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of `unit_b`.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the reserve on the given side.
    #[must_use]
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns the reserve of `unit`, or `None` if the pool does not trade it.
    #[must_use]
    pub fn reserve_of(&self, unit: &Unit) -> Option<Amount> {
        self.pair.side_of(unit).map(|side| self.reserve(side))
    }

    /// Returns the volume fee.
    #[must_use]
    pub const fn volume_fee(&self) -> BasisPoints {
        self.volume_fee
    }

    /// Returns the pool identifier.
    #[must_use]
    pub fn pool_id(&self) -> &str {
        &self.pool_id
    }

    /// Returns the venue name.
    #[must_use]
    pub fn dex(&self) -> &str {
        &self.dex
    }

    /// Returns the datum cell.
    #[must_use]
    pub const fn datum(&self) -> &Datum<D> {
        &self.datum
    }

    /// Replaces both reserves after a pool update.
    pub fn set_reserves(&mut self, reserve_a: Amount, reserve_b: Amount) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
    }

    /// Replaces the raw datum after a pool update.
    ///
    /// Any previously decoded datum is discarded.
    pub fn refresh_datum(&mut self, raw: impl Into<Vec<u8>>) {
        self.datum.refresh(raw);
    }

    /// Resolves a single-entry input bag against the pair.
    ///
    /// Returns the input side and quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if the bag is not a single
    /// entry or its unit is not part of the pair.
    pub fn input_side(&self, input: &Assets) -> Result<(Side, Amount), QuoteError> {
        let (unit, quantity) = input.single_entry()?;
        let side = self
            .pair
            .side_of(unit)
            .ok_or(QuoteError::InvalidInput("input unit is not traded by this pool"))?;
        Ok((side, quantity))
    }
}

impl<D: PoolDatum> PoolState<D> {
    /// Returns the typed datum, decoding it on first access.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::MissingDatum`] if no raw encoding is attached.
    /// - Any error returned by the datum decoder.
    pub fn pool_datum(&mut self) -> Result<&D, QuoteError> {
        self.datum.get_or_decode()
    }
}
