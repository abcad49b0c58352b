//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] gives every pool a uniform way to be built from its
//! configuration struct, so the factory can dispatch construction without
//! `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction. A successfully constructed pool is ready to quote:
//!
//! - the unit pair holds two distinct, non-empty units
//! - the volume fee is below 10 000 bp
//! - `pool_id` and `dex` are non-empty
//! - curve parameters are valid (amplification > 0 for stable-swap)
//!
//! Zero reserves are **not** rejected: an empty pool quotes zero output.
//!
//! # Factory Integration
//!
//! ```text
//! PoolConfig::ConstantProduct(cfg) => ConstantProductPool::from_config(&cfg)
//! PoolConfig::StableSwap(cfg)      => StableSwapPool::from_config(&cfg)
//! ```

use crate::error::QuoteError;

/// Construction of a pool from a configuration struct.
///
/// Each pool type implements this trait for its own configuration, so
/// every pool-config pairing is explicit.
///
/// # Implementors
///
/// - `impl FromConfig<ConstantProductConfig> for ConstantProductPool<D>`
/// - `impl FromConfig<StableSwapConfig> for StableSwapPool<D>`
///
/// Pools built this way start with a missing datum; attach one with
/// `with_datum`.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidFee`] if the fee is 10 000 bp or more.
    /// - [`QuoteError::InvalidConfiguration`] for any other invalid
    ///   parameter.
    fn from_config(config: &C) -> Result<Self, QuoteError>
    where
        Self: Sized;
}
