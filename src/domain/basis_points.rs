//! Basis-point representation for the pool volume fee.

use core::fmt;

use num_bigint::BigUint;

use super::Amount;
use crate::error::QuoteError;
use crate::math::big::unsigned_ratio_to_f64;

/// Basis-point denominator (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be represented, but a pool volume fee must stay
/// strictly below 10 000 bp; use [`is_valid_fee`](Self::is_valid_fee) to
/// check.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement(), Some(9_970));
/// assert!(bp.is_valid_fee());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is usable as a volume fee (`0..10_000`).
    #[must_use]
    pub const fn is_valid_fee(&self) -> bool {
        self.0 < BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, the share of the input left after the fee.
    ///
    /// Returns `None` when the value exceeds 10 000 bp.
    #[must_use]
    pub const fn complement(&self) -> Option<u32> {
        BPS_DENOMINATOR.checked_sub(self.0)
    }

    /// Converts to a floating-point percentage, e.g. 30 bp → 0.30.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns `quantity × (10 000 − self) / 10 000` as a float.
    ///
    /// The product is formed exactly and the division rounds once to the
    /// nearest `f64`, also for products beyond `2^53`.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidFee`] if the value exceeds 10 000 bp.
    pub fn deduct_from_f64(&self, quantity: Amount) -> crate::error::Result<f64> {
        let complement = self
            .complement()
            .ok_or(QuoteError::InvalidFee("fee exceeds 10000 basis points"))?;
        let kept = quantity.to_biguint() * complement;
        unsigned_ratio_to_f64(&kept, &BigUint::from(BPS_DENOMINATOR))
            .ok_or(QuoteError::Overflow("fee-adjusted input exceeds f64 range"))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
