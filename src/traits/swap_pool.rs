//! Core capability trait every pool variant implements.
//!
//! [`SwapPool`] covers the full contract a quoting caller relies on:
//!
//! 1. **Quote**: [`SwapPool::get_amount_out`] prices a single-asset input.
//! 2. **Identify**: [`SwapPool::pool_id`], [`SwapPool::dex`] and
//!    [`SwapPool::curve`] name the pool, its venue and its curve family.
//! 3. **Inspect**: [`SwapPool::state`] exposes the shared pool record.
//! 4. **Decode**: [`SwapPool::pool_datum`] materializes the typed datum.
//!
//! # Fee Convention
//!
//! Every curve charges the fee on the input side before pricing:
//!
//! ```text
//! effective_input = input × (10 000 − volume_fee) / 10 000
//! ```
//!
//! # Dispatch Model
//!
//! Pools are dispatched via an enum (`PoolBox`), not `dyn` trait objects;
//! the datum type is an associated type, so each pool fixes its decoder
//! statically.

use crate::datum::PoolDatum;
use crate::domain::{Assets, CurveKind, SwapQuote};
use crate::error::QuoteError;
use crate::pools::PoolState;

/// Core trait for all quoting pools.
///
/// Every pool implementation must provide all methods; there are no
/// default implementations.
///
/// # Implementors
///
/// - `ConstantProductPool`: `x · y = k` with a basis-point fee
/// - `StableSwapPool`: two-coin Curve-style invariant
/// - `PoolBox`: enum dispatch over both
///
/// # Errors
///
/// - [`QuoteError::InvalidInput`]: the input bag is not a single entry
///   of one of the pool's units
/// - [`QuoteError::ZeroReserve`]: stable-swap invariant undefined
/// - [`QuoteError::MissingDatum`]: no raw datum to decode
pub trait SwapPool {
    /// Typed datum this pool decodes.
    type Datum: PoolDatum;

    /// Quotes the output of swapping `input` through the pool.
    ///
    /// `input` must hold exactly one entry whose unit is one of the pool's
    /// units. The returned quote holds a single entry of the other unit
    /// and the price impact ratio. Quoting never mutates the pool.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidInput`] if `input` is empty, holds more than
    ///   one unit, or names a unit the pool does not trade.
    fn get_amount_out(&self, input: &Assets) -> Result<SwapQuote, QuoteError>;

    /// Unique identifier among pools of the same pair on the same venue.
    #[must_use]
    fn pool_id(&self) -> &str;

    /// Name of the venue running the pool.
    #[must_use]
    fn dex(&self) -> &str;

    /// Pricing curve family.
    #[must_use]
    fn curve(&self) -> CurveKind;

    /// The shared pool record.
    #[must_use]
    fn state(&self) -> &PoolState<Self::Datum>;

    /// Returns the typed datum, decoding it on first access.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::MissingDatum`] if no raw encoding is available.
    /// - [`QuoteError::InvalidDatum`] if the encoding cannot be decoded.
    fn pool_datum(&mut self) -> Result<&Self::Datum, QuoteError>;
}
