//! Raw asset quantity with checked arithmetic.

use core::fmt;

use num_bigint::BigUint;

/// A raw asset quantity in the smallest unit (lovelace or equivalent).
///
/// `Amount` never interprets decimals. All `u128` values are valid
/// quantities, which comfortably covers on-chain reserves well past
/// `10^15`.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.saturating_sub(&b), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Maximum representable quantity.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Subtraction clamped at zero.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Lossy conversion to `f64`, used by the floating-point stable-swap path.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Widens the quantity into an arbitrary-precision integer.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from(self.0)
    }

    /// Truncates a non-negative float toward zero.
    ///
    /// `NaN` and negative values map to zero; values beyond `u128::MAX`
    /// saturate.
    pub fn from_f64_floor(value: f64) -> Self {
        // `as` on floats saturates and maps NaN to 0.
        Self(value as u128)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let a = Amount::new(42);
        assert_eq!(a.get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn checked_add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(Amount::ZERO.checked_sub(&Amount::new(1)), None);
    }

    #[test]
    fn saturating_sub_clamps() {
        assert_eq!(Amount::new(5).saturating_sub(&Amount::new(7)), Amount::ZERO);
        assert_eq!(Amount::new(7).saturating_sub(&Amount::new(5)), Amount::new(2));
    }

    // -- Conversions --------------------------------------------------------

    #[test]
    fn from_f64_floor_truncates() {
        assert_eq!(Amount::from_f64_floor(999_003.9), Amount::new(999_003));
        assert_eq!(Amount::from_f64_floor(-3.0), Amount::ZERO);
        assert_eq!(Amount::from_f64_floor(f64::NAN), Amount::ZERO);
    }

    #[test]
    fn to_biguint_round_trip() {
        let a = Amount::new(10u128.pow(30));
        assert_eq!(a.to_biguint(), BigUint::from(10u128.pow(30)));
    }

    #[test]
    fn display() {
        assert_eq!(Amount::new(1_000).to_string(), "1000");
    }
}
