//! Pool instantiation via the factory pattern.
//!
//! The [`DefaultPoolFactory`] creates pool instances from [`PoolConfig`]
//! values, validating configuration and dispatching to the appropriate
//! pool constructor based on the config variant.
//!
//! # Usage
//!
//! ```rust
//! use amm_quote::config::{PoolConfig, StableSwapConfig};
//! use amm_quote::domain::{Amount, Assets, BasisPoints, CurveKind, Unit, UnitPair};
//! use amm_quote::factory::DefaultPoolFactory;
//! use amm_quote::traits::SwapPool;
//!
//! # fn main() -> Result<(), amm_quote::error::QuoteError> {
//! let usdm = Unit::new("usdm")?;
//! let pair = UnitPair::new(usdm.clone(), Unit::new("djed")?)?;
//! let cfg = StableSwapConfig::new(
//!     pair,
//!     BasisPoints::new(4),
//!     Amount::new(5_000_000),
//!     Amount::new(5_000_000),
//!     "stable-1",
//!     "Stable",
//! )?
//! .with_amplification(200)?;
//!
//! let pool = DefaultPoolFactory::create(&PoolConfig::StableSwap(cfg))?;
//! assert_eq!(pool.curve(), CurveKind::StableSwap);
//! let quote = pool.get_amount_out(&Assets::single(usdm, Amount::new(10_000)))?;
//! assert!(quote.quantity_out() > Amount::new(9_900));
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Gating
//!
//! Each match arm is gated behind its respective pool feature flag.
//! If a config variant is passed for a curve whose feature is not
//! enabled, a [`QuoteError::InvalidConfiguration`] is returned.
//!
//! [`PoolConfig`]: crate::config::PoolConfig
//! [`QuoteError::InvalidConfiguration`]: crate::error::QuoteError::InvalidConfiguration

mod default_factory;

pub use default_factory::DefaultPoolFactory;
