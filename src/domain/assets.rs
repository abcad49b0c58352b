//! Asset quantity bags.

use std::collections::btree_map;
use std::collections::BTreeMap;

use core::fmt;

use super::{Amount, Unit};
use crate::error::QuoteError;

/// A mapping from asset unit to quantity.
///
/// Swap inputs and outputs are single-entry bags. Entries are kept sorted
/// by unit, so iteration order (and everything derived from it) is
/// deterministic.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Assets, Unit};
///
/// let bag = Assets::single(Unit::lovelace(), Amount::new(2_000_000));
/// assert_eq!(bag.len(), 1);
/// assert_eq!(bag.quantity_of(&Unit::lovelace()), Amount::new(2_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Assets(BTreeMap<Unit, Amount>);

impl Assets {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a bag holding exactly one entry.
    #[must_use]
    pub fn single(unit: Unit, quantity: Amount) -> Self {
        let mut map = BTreeMap::new();
        map.insert(unit, quantity);
        Self(map)
    }

    /// Returns a copy of this bag with `unit` set to `quantity`.
    #[must_use]
    pub fn with(mut self, unit: Unit, quantity: Amount) -> Self {
        self.0.insert(unit, quantity);
        self
    }

    /// Number of distinct units in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the quantity of `unit`, if present.
    #[must_use]
    pub fn get(&self, unit: &Unit) -> Option<Amount> {
        self.0.get(unit).copied()
    }

    /// Returns the quantity of `unit`, or zero if absent.
    pub fn quantity_of(&self, unit: &Unit) -> Amount {
        self.get(unit).unwrap_or(Amount::ZERO)
    }

    /// Returns the first unit in sort order.
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.0.keys().next()
    }

    /// Returns the quantity of the first unit in sort order.
    #[must_use]
    pub fn quantity(&self) -> Option<Amount> {
        self.0.values().next().copied()
    }

    /// Returns the sole entry of a single-entry bag.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::InvalidInput`] if the bag is empty or holds
    /// more than one unit.
    pub fn single_entry(&self) -> Result<(&Unit, Amount), QuoteError> {
        let mut entries = self.0.iter();
        match (entries.next(), entries.next()) {
            (Some((unit, quantity)), None) => Ok((unit, *quantity)),
            (None, _) => Err(QuoteError::InvalidInput("input bag is empty")),
            (Some(_), Some(_)) => Err(QuoteError::InvalidInput(
                "input bag must contain exactly one asset",
            )),
        }
    }

    /// Sums two bags unit by unit.
    ///
    /// Returns `None` if any per-unit sum overflows.
    #[must_use]
    pub fn checked_merge(&self, other: &Self) -> Option<Self> {
        let mut merged = self.0.clone();
        for (unit, quantity) in &other.0 {
            let entry = merged.entry(unit.clone()).or_insert(Amount::ZERO);
            *entry = entry.checked_add(quantity)?;
        }
        Some(Self(merged))
    }

    /// Iterates over `(unit, quantity)` entries in unit order.
    pub fn iter(&self) -> btree_map::Iter<'_, Unit, Amount> {
        self.0.iter()
    }
}

impl FromIterator<(Unit, Amount)> for Assets {
    fn from_iter<I: IntoIterator<Item = (Unit, Amount)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Assets {
    type Item = (&'a Unit, &'a Amount);
    type IntoIter = btree_map::Iter<'a, Unit, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Assets {
    type Item = (Unit, Amount);
    type IntoIter = btree_map::IntoIter<Unit, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Assets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (unit, quantity)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{unit}: {quantity}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn unit(id: &str) -> Unit {
        let Ok(u) = Unit::new(id) else {
            panic!("invalid unit in test: {id}");
        };
        u
    }

    #[test]
    fn single_entry_ok() {
        let bag = Assets::single(unit("a"), Amount::new(5));
        let Ok((u, q)) = bag.single_entry() else {
            panic!("expected single entry");
        };
        assert_eq!(u, &unit("a"));
        assert_eq!(q, Amount::new(5));
    }

    #[test]
    fn single_entry_rejects_empty() {
        let binding = Assets::new();
        let result = binding.single_entry();
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn single_entry_rejects_two_units() {
        let bag = Assets::single(unit("a"), Amount::new(1)).with(unit("b"), Amount::new(2));
        assert!(matches!(bag.single_entry(), Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn first_unit_is_sorted() {
        let bag = Assets::single(unit("b"), Amount::new(2)).with(unit("a"), Amount::new(1));
        assert_eq!(bag.unit(), Some(&unit("a")));
        assert_eq!(bag.quantity(), Some(Amount::new(1)));
    }

    #[test]
    fn quantity_of_missing_is_zero() {
        let bag = Assets::single(unit("a"), Amount::new(1));
        assert_eq!(bag.quantity_of(&unit("zzz")), Amount::ZERO);
        assert_eq!(bag.get(&unit("zzz")), None);
    }

    #[test]
    fn merge_sums_per_unit() {
        let left = Assets::single(unit("a"), Amount::new(1)).with(unit("b"), Amount::new(2));
        let right = Assets::single(unit("b"), Amount::new(3)).with(unit("c"), Amount::new(4));
        let Some(merged) = left.checked_merge(&right) else {
            panic!("no overflow expected");
        };
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.quantity_of(&unit("b")), Amount::new(5));
        assert_eq!(merged.quantity_of(&unit("c")), Amount::new(4));
    }

    #[test]
    fn merge_overflow() {
        let left = Assets::single(unit("a"), Amount::MAX);
        let right = Assets::single(unit("a"), Amount::new(1));
        assert_eq!(left.checked_merge(&right), None);
    }

    #[test]
    fn collect_from_iterator() {
        let bag: Assets = vec![(unit("x"), Amount::new(1)), (unit("y"), Amount::new(2))]
            .into_iter()
            .collect();
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.iter().count(), 2);
    }

    #[test]
    fn display_lists_entries() {
        let bag = Assets::single(unit("a"), Amount::new(1)).with(unit("b"), Amount::new(2));
        assert_eq!(bag.to_string(), "{a: 1, b: 2}");
    }
}
