//! # AMM Quote
//!
//! Deterministic swap quoting for two-asset automated-market-maker pools.
//!
//! Given a pool's current reserves and a single-asset input, a pool
//! computes the output it would return and the price impact of the trade.
//! Two curve families are provided:
//!
//! - **Constant Product** (`x · y = k`): `constant-product` feature
//! - **StableSwap** (Curve style, two coins): `stable-swap` feature
//!
//! Nothing here touches the network, disk or clock. Decoding on-chain
//! pool state and building swap transactions are left to the caller.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `all-pools` | yes | Enables both curves |
//! | `constant-product` | via `all-pools` | Constant-product pool |
//! | `stable-swap` | via `all-pools` | StableSwap pool |
//! | `serde` | yes | (De)serialization of configs and domain values |
//!
//! # Quick Start
//!
//! ```rust
//! use amm_quote::config::{ConstantProductConfig, PoolConfig};
//! use amm_quote::domain::{Amount, Assets, BasisPoints, Unit, UnitPair};
//! use amm_quote::factory::DefaultPoolFactory;
//! use amm_quote::traits::SwapPool;
//!
//! # fn main() -> Result<(), amm_quote::error::QuoteError> {
//! // 1. Describe the pool snapshot
//! let token = Unit::new("f00d")?;
//! let pair = UnitPair::new(Unit::lovelace(), token.clone())?;
//! let config = PoolConfig::ConstantProduct(ConstantProductConfig::new(
//!     pair,
//!     BasisPoints::new(30), // 0.30%
//!     Amount::new(1_000_000),
//!     Amount::new(1_000_000),
//!     "pool-1",
//!     "VyFi",
//! )?);
//!
//! // 2. Create the pool via the factory
//! let pool = DefaultPoolFactory::create(&config)?;
//!
//! // 3. Quote a swap of 1 000 lovelace
//! let (out, impact) = pool
//!     .get_amount_out(&Assets::single(Unit::lovelace(), Amount::new(1_000)))?
//!     .into_parts();
//!
//! assert_eq!(out.quantity_of(&token), Amount::new(996));
//! assert!(impact > 0.0 && impact < 0.01);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  uses PoolConfig + DefaultPoolFactory
//! └──────┬──────┘
//!        │ create(&config)
//!        ▼
//! ┌─────────────┐
//! │   Factory    │  validates config, dispatches to FromConfig
//! └──────┬──────┘
//!        │ PoolBox (enum dispatch)
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  ConstantProduct, StableSwap over a shared PoolState
//! └──────┬──────┘
//!        │ SwapPool trait
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Unit, Amount, Assets, BasisPoints, SwapQuote, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Unit`](domain::Unit), [`Amount`](domain::Amount), [`Assets`](domain::Assets), etc. |
//! | [`datum`] | Lazily decoded pool datum cell and the [`PoolDatum`](datum::PoolDatum) decoder trait |
//! | [`traits`] | Core abstractions: [`SwapPool`](traits::SwapPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative pool blueprints: [`PoolConfig`](config::PoolConfig) and per-curve config structs |
//! | [`pools`]  | Shared [`PoolState`](pools::PoolState), feature-gated pools and [`PoolBox`](pools::PoolBox) |
//! | [`factory`] | [`DefaultPoolFactory`](factory::DefaultPoolFactory) for config-driven pool construction |
//! | [`math`]   | Bounded Newton driver and arbitrary-precision ratio helpers |
//! | [`error`]  | [`QuoteError`](error::QuoteError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! Quotes and solver diagnostics are emitted as [`tracing`] events
//! (`debug` per quote, `trace` per solve, `warn` when a solve stops at the
//! iteration ceiling). The crate never installs a subscriber.

pub mod config;
pub mod datum;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
