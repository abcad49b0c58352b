//! Configuration for constant-product pools.

use crate::domain::{Amount, BasisPoints, UnitPair};
use crate::error::QuoteError;

/// Configuration for a constant-product (`x · y = k`) pool.
///
/// Describes one pool snapshot as decoded from chain: its units, current
/// reserves, volume fee and identity.
///
/// # Validation
///
/// - `volume_fee` must be below 10 000 bp.
/// - `pool_id` and `dex` must be non-empty.
///
/// Reserves may be zero; such a pool quotes zero output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantProductConfig {
    pair: UnitPair,
    volume_fee: BasisPoints,
    reserve_a: Amount,
    reserve_b: Amount,
    pool_id: String,
    dex: String,
}

impl ConstantProductConfig {
    /// Creates a new `ConstantProductConfig`.
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
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn validate(&self) -> Result<(), QuoteError> {
        super::validate_pool_params(self.volume_fee, &self.pool_id, &self.dex)
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
}
