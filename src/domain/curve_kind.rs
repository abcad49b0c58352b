//! Pricing curve families.

use core::fmt;

/// The pricing curve a pool uses, as reported by
/// [`SwapPool::curve`](crate::traits::SwapPool::curve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CurveKind {
    /// `x · y = k` with a proportional fee.
    ConstantProduct,
    /// Two-coin Curve-style invariant for pegged assets.
    StableSwap,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstantProduct => write!(f, "ConstantProduct"),
            Self::StableSwap => write!(f, "StableSwap"),
        }
    }
}
