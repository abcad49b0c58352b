//! Outcome of quoting a swap.

use core::fmt;

use super::{Amount, Assets, Unit};

/// The quoted outcome of a swap: the output bag and its price impact.
///
/// `price_impact` is a dimensionless ratio: `0.0` means no deviation from
/// the pool's marginal price, values approach `1.0` as the trade drains
/// the output reserve. It is never validated against a bound; a large
/// impact is a legitimate, if inadvisable, quote.
///
/// # Examples
///
/// ```
/// use amm_quote::domain::{Amount, Assets, SwapQuote, Unit};
///
/// let quote = SwapQuote::new(Assets::single(Unit::lovelace(), Amount::new(996)), 0.001);
/// assert_eq!(quote.quantity_out(), Amount::new(996));
///
/// let (out, impact) = quote.into_parts();
/// assert_eq!(out.len(), 1);
/// assert!(impact > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    amount_out: Assets,
    price_impact: f64,
}

impl SwapQuote {
    /// Creates a new quote.
    #[must_use]
    pub const fn new(amount_out: Assets, price_impact: f64) -> Self {
        Self {
            amount_out,
            price_impact,
        }
    }

    /// Returns the output bag.
    #[must_use]
    pub const fn amount_out(&self) -> &Assets {
        &self.amount_out
    }

    /// Returns the unit delivered by the swap.
    #[must_use]
    pub fn unit_out(&self) -> Option<&Unit> {
        self.amount_out.unit()
    }

    /// Returns the quantity delivered by the swap.
    pub fn quantity_out(&self) -> Amount {
        self.amount_out.quantity().unwrap_or(Amount::ZERO)
    }

    /// Returns the price impact ratio.
    #[must_use]
    pub const fn price_impact(&self) -> f64 {
        self.price_impact
    }

    /// Splits the quote into the `(output bag, price impact)` tuple.
    #[must_use]
    pub fn into_parts(self) -> (Assets, f64) {
        (self.amount_out, self.price_impact)
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote(out={}, impact={:.6})",
            self.amount_out, self.price_impact
        )
    }
}
