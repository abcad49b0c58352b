//! Fundamental domain value types used throughout the library.
//!
//! This module contains the value types that model a pool quote: asset
//! units and pairs, quantities and bags, the fee in basis points, and the
//! resulting quote. Types with invariants use validated constructors.

mod amount;
mod assets;
mod basis_points;
mod curve_kind;
mod swap_quote;
mod unit;
mod unit_pair;

pub use amount::Amount;
pub use assets::Assets;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use curve_kind::CurveKind;
pub use swap_quote::SwapQuote;
pub use unit::{Unit, LOVELACE};
pub use unit_pair::{Side, UnitPair};
