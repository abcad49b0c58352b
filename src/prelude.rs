//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use amm_quote::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    Amount, Assets, BasisPoints, CurveKind, Side, SwapQuote, Unit, UnitPair, LOVELACE,
};

// Datum
pub use crate::datum::{Datum, PoolDatum, RawDatum};

// Core traits
pub use crate::traits::{FromConfig, SwapPool};

// Configuration
pub use crate::config::{ConstantProductConfig, PoolConfig, StableSwapConfig};

// Errors
pub use crate::error::{QuoteError, Result};

// Factory
pub use crate::factory::DefaultPoolFactory;

// Pools
#[cfg(feature = "constant-product")]
pub use crate::pools::ConstantProductPool;
#[cfg(feature = "stable-swap")]
pub use crate::pools::StableSwapPool;
pub use crate::pools::{PoolBox, PoolState};
