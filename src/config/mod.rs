//! Pool configuration enums and structs.
//!
//! This module contains the [`PoolConfig`] enum, the top-level declarative
//! blueprint for creating any pool type, along with the per-curve
//! configuration structs that carry each pool's snapshot parameters.

mod constant_product;
mod pool_config;
mod stable_swap;

pub use constant_product::ConstantProductConfig;
pub use pool_config::PoolConfig;
pub use stable_swap::{StableSwapConfig, DEFAULT_AMPLIFICATION};

use crate::domain::BasisPoints;
use crate::error::QuoteError;

/// Checks the parameters every pool configuration shares.
pub(crate) fn validate_pool_params(
    volume_fee: BasisPoints,
    pool_id: &str,
    dex: &str,
) -> Result<(), QuoteError> {
    if !volume_fee.is_valid_fee() {
        return Err(QuoteError::InvalidFee(
            "volume fee must be below 10000 basis points",
        ));
    }
    if pool_id.is_empty() {
        return Err(QuoteError::InvalidConfiguration("pool_id must not be empty"));
    }
    if dex.is_empty() {
        return Err(QuoteError::InvalidConfiguration("dex must not be empty"));
    }
    Ok(())
}
