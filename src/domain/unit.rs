//! Asset unit identifiers.

use core::fmt;
use core::str::FromStr;

use crate::error::QuoteError;

/// Identifier of the chain's native asset.
pub const LOVELACE: &str = "lovelace";

/// Length, in hex characters, of a minting policy id prefix.
const POLICY_ID_HEX_LEN: usize = 56;

/// An asset identifier, e.g. `"lovelace"` or a policy id followed by the
/// hex-encoded asset name.
///
/// Any non-empty string is accepted; the core only compares units for
/// equality and never interprets them when pricing.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::Unit;
///
/// let ada = Unit::lovelace();
/// assert!(ada.is_lovelace());
/// assert!(Unit::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Unit(String);

impl Unit {
    /// Creates a unit from its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidUnit`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, QuoteError> {
        let id = id.into();
        if id.is_empty() {
            return Err(QuoteError::InvalidUnit("unit identifier must be non-empty"));
        }
        Ok(Self(id))
    }

    /// The native asset.
    #[must_use]
    pub fn lovelace() -> Self {
        Self(LOVELACE.to_owned())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the native asset.
    #[must_use]
    pub fn is_lovelace(&self) -> bool {
        self.0 == LOVELACE
    }

    /// Returns the minting policy id (the first 56 hex characters) of a
    /// native token, or `None` for lovelace and malformed identifiers.
    #[must_use]
    pub fn policy_id(&self) -> Option<&str> {
        if self.is_lovelace() {
            return None;
        }
        self.0.get(..POLICY_ID_HEX_LEN)
    }

    /// Returns the hex-encoded asset name that follows the policy id.
    ///
    /// The name may be empty for tokens minted without one.
    #[must_use]
    pub fn asset_name_hex(&self) -> Option<&str> {
        if self.is_lovelace() {
            return None;
        }
        self.0.get(POLICY_ID_HEX_LEN..)
    }
}

impl TryFrom<String> for Unit {
    type Error = QuoteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.0
    }
}

impl FromStr for Unit {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
