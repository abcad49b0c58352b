//! Configuration for stable-swap pools (Curve style).

use crate::domain::{Amount, BasisPoints, UnitPair};
use crate::error::QuoteError;

/// Amplification coefficient used when none is configured.
pub const DEFAULT_AMPLIFICATION: u32 = 75;

/// Configuration for a two-coin stable-swap pool.
///
/// # Amplification Parameter
///
/// The amplification coefficient `A` controls how flat the curve is near
/// the peg:
///
/// - `A = 1`: close to constant product
/// - `A → ∞`: approaches constant sum (1:1 swaps)
/// - default: [`DEFAULT_AMPLIFICATION`]
///
/// # Validation
///
/// - `volume_fee` must be below 10 000 bp.
/// - `pool_id` and `dex` must be non-empty.
/// - `amplification` must be greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StableSwapConfig {
    pair: UnitPair,
    volume_fee: BasisPoints,
    reserve_a: Amount,
    reserve_b: Amount,
    pool_id: String,
    dex: String,
    #[cfg_attr(feature = "serde", serde(default = "default_amplification"))]
    amplification: u32,
}

#[cfg(feature = "serde")]
const fn default_amplification() -> u32 {
    DEFAULT_AMPLIFICATION
}

impl StableSwapConfig {
    /// Creates a new `StableSwapConfig` with [`DEFAULT_AMPLIFICATION`].
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidFee`] if `volume_fee` is 10 000 bp or more.
    /// - [`QuoteError::InvalidConfiguration`] if `pool_id` or `dex` is empty.
    pub fn new(
        pair: UnitPair,
        volume_fee: BasisPoints,
        reserve_a: Amount,
        reserve_b: Amount,
        pool_id: impl Into<String>,
        dex: impl Into<String>,
    ) -> Result<Self, QuoteError> {
        let config = Self {
            pair,
            volume_fee,
            reserve_a,
            reserve_b,
            pool_id: pool_id.into(),
            dex: dex.into(),
            amplification: DEFAULT_AMPLIFICATION,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns this configuration with a different amplification.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidConfiguration`] if `amplification` is zero.
    pub fn with_amplification(mut self, amplification: u32) -> Result<Self, QuoteError> {
        self.amplification = amplification;
        self.validate()?;
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidFee`] if `volume_fee` is 10 000 bp or more.
    /// - [`QuoteError::InvalidConfiguration`] if `pool_id` or `dex` is
    ///   empty, or `amplification` is zero.
    pub fn validate(&self) -> Result<(), QuoteError> {
        super::validate_pool_params(self.volume_fee, &self.pool_id, &self.dex)?;
        if self.amplification == 0 {
            return Err(QuoteError::InvalidConfiguration(
                "amplification must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Returns the unit pair.
    #[must_use]
    pub const fn pair(&self) -> &UnitPair {
        &self.pair
    }

    /// Returns the volume fee.
    #[must_use]
    pub const fn volume_fee(&self) -> BasisPoints {
        self.volume_fee
    }

    /// Returns the reserve of `unit_a`.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of `unit_b`.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
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

    /// Returns the amplification coefficient.
    #[must_use]
    pub const fn amplification(&self) -> u32 {
        self.amplification
    }
}
