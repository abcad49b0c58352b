//! Positional pair of distinct asset units.

use super::Unit;
use crate::error::QuoteError;

/// Which slot of a [`UnitPair`] a unit occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `unit_a`, paired with `reserve_a`.
    A,
    /// `unit_b`, paired with `reserve_b`.
    B,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The two distinct units a pool trades.
///
/// Unlike a canonically sorted pair, positions are kept exactly as given:
/// on-chain pool data ties `reserve_a` to `unit_a`, so reordering would
/// silently swap reserves.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Side, Unit, UnitPair};
///
/// let ada = Unit::lovelace();
/// let tok = Unit::new("f00d").expect("non-empty");
/// let pair = UnitPair::new(tok.clone(), ada.clone()).expect("distinct units");
///
/// assert_eq!(pair.unit_a(), &tok);
/// assert_eq!(pair.side_of(&ada), Some(Side::B));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UnitPairRepr", into = "UnitPairRepr")
)]
pub struct UnitPair {
    unit_a: Unit,
    unit_b: Unit,
}

impl UnitPair {
    /// Creates a new pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidUnit`] if both units are equal.
    pub fn new(unit_a: Unit, unit_b: Unit) -> Result<Self, QuoteError> {
        if unit_a == unit_b {
            return Err(QuoteError::InvalidUnit(
                "unit pair requires two distinct units",
            ));
        }
        Ok(Self { unit_a, unit_b })
    }

    /// Returns the first unit.
    #[must_use]
    pub const fn unit_a(&self) -> &Unit {
        &self.unit_a
    }

    /// Returns the second unit.
    #[must_use]
    pub const fn unit_b(&self) -> &Unit {
        &self.unit_b
    }

    /// Returns the unit at `side`.
    #[must_use]
    pub const fn unit(&self, side: Side) -> &Unit {
        match side {
            Side::A => &self.unit_a,
            Side::B => &self.unit_b,
        }
    }

    /// Returns the slot `unit` occupies, or `None` if it is not traded here.
    #[must_use]
    pub fn side_of(&self, unit: &Unit) -> Option<Side> {
        if *unit == self.unit_a {
            Some(Side::A)
        } else if *unit == self.unit_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns `true` if `unit` is part of this pair.
    #[must_use]
    pub fn contains(&self, unit: &Unit) -> bool {
        self.side_of(unit).is_some()
    }

    /// Returns the counterpart of `unit` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if `unit` is not in the pair.
    pub fn other(&self, unit: &Unit) -> Result<&Unit, QuoteError> {
        self.side_of(unit)
            .map(|side| self.unit(side.opposite()))
            .ok_or(QuoteError::InvalidInput("unit is not part of this pool pair"))
    }
}

/// Wire form of a [`UnitPair`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct UnitPairRepr {
    unit_a: Unit,
    unit_b: Unit,
}

#[cfg(feature = "serde")]
impl TryFrom<UnitPairRepr> for UnitPair {
    type Error = QuoteError;

    fn try_from(repr: UnitPairRepr) -> Result<Self, Self::Error> {
        Self::new(repr.unit_a, repr.unit_b)
    }
}

#[cfg(feature = "serde")]
impl From<UnitPair> for UnitPairRepr {
    fn from(pair: UnitPair) -> Self {
        Self {
            unit_a: pair.unit_a,
            unit_b: pair.unit_b,
        }
    }
}
