//! Top-level pool configuration enum.
//!
//! [`PoolConfig`] is the declarative blueprint for any pool variant. The
//! factory matches on it to dispatch construction:
//!
//! ```text
//! match config {
//!     PoolConfig::ConstantProduct(cfg) => ConstantProductPool::from_config(cfg),
//!     PoolConfig::StableSwap(cfg)      => StableSwapPool::from_config(cfg),
//! }
//! ```

use super::{ConstantProductConfig, StableSwapConfig};
use crate::domain::{BasisPoints, CurveKind, UnitPair};
use crate::error::QuoteError;

/// Configuration for any supported pool variant.
///
/// With the `serde` feature the enum is keyed by the curve name:
///
/// ```json
/// { "stable_swap": { "pair": { "unit_a": "…", "unit_b": "…" }, … } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PoolConfig {
    /// Constant-product configuration.
    ConstantProduct(ConstantProductConfig),
    /// Stable-swap configuration.
    StableSwap(StableSwapConfig),
}

impl PoolConfig {
    /// Validates the inner configuration.
    ///
    /// # Errors
    ///
    /// Returns the same [`QuoteError`] the inner config's `validate()`
    /// would return.
    pub fn validate(&self) -> Result<(), QuoteError> {
        match self {
            Self::ConstantProduct(cfg) => cfg.validate(),
            Self::StableSwap(cfg) => cfg.validate(),
        }
    }

    /// Returns the curve family this config builds.
    #[must_use]
    pub const fn curve(&self) -> CurveKind {
        match self {
            Self::ConstantProduct(_) => CurveKind::ConstantProduct,
            Self::StableSwap(_) => CurveKind::StableSwap,
        }
    }

    /// Returns the unit pair.
    #[must_use]
    pub const fn pair(&self) -> &UnitPair {
        match self {
            Self::ConstantProduct(cfg) => cfg.pair(),
            Self::StableSwap(cfg) => cfg.pair(),
        }
    }

    /// Returns the volume fee.
    #[must_use]
    pub const fn volume_fee(&self) -> BasisPoints {
        match self {
            Self::ConstantProduct(cfg) => cfg.volume_fee(),
            Self::StableSwap(cfg) => cfg.volume_fee(),
        }
    }

    /// Returns the pool identifier.
    #[must_use]
    pub fn pool_id(&self) -> &str {
        match self {
            Self::ConstantProduct(cfg) => cfg.pool_id(),
            Self::StableSwap(cfg) => cfg.pool_id(),
        }
    }

    /// Returns `true` for a constant-product config.
    #[must_use]
    pub const fn is_constant_product(&self) -> bool {
        matches!(self, Self::ConstantProduct(_))
    }

    /// Returns `true` for a stable-swap config.
    #[must_use]
    pub const fn is_stable_swap(&self) -> bool {
        matches!(self, Self::StableSwap(_))
    }
}

impl From<ConstantProductConfig> for PoolConfig {
    fn from(config: ConstantProductConfig) -> Self {
        Self::ConstantProduct(config)
    }
}

impl From<StableSwapConfig> for PoolConfig {
    fn from(config: StableSwapConfig) -> Self {
        Self::StableSwap(config)
    }
}

impl core::fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", self.curve(), self.pool_id())
    }
}
