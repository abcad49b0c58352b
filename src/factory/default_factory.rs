//! Default pool factory implementation.

use crate::config::PoolConfig;
use crate::datum::RawDatum;
use crate::error::QuoteError;
use crate::pools::PoolBox;

#[cfg(any(feature = "constant-product", feature = "stable-swap"))]
use crate::traits::FromConfig;

/// Stateless factory for creating pool instances from configuration.
///
/// `DefaultPoolFactory` is the single entry point for constructing any
/// quoting pool. It validates the [`PoolConfig`], delegates to the pool's
/// [`FromConfig`] implementation, and wraps the result in a [`PoolBox`].
///
/// # Thread Safety
///
/// All constructors are pure functions with no shared mutable state.
///
/// # Example
///
/// ```rust
/// use amm_quote::config::{ConstantProductConfig, PoolConfig};
/// use amm_quote::domain::{Amount, Assets, BasisPoints, Unit, UnitPair};
/// use amm_quote::factory::DefaultPoolFactory;
/// use amm_quote::traits::SwapPool;
///
/// # fn main() -> Result<(), amm_quote::error::QuoteError> {
/// let pair = UnitPair::new(Unit::lovelace(), Unit::new("f00d")?)?;
/// let config = PoolConfig::ConstantProduct(ConstantProductConfig::new(
///     pair,
///     BasisPoints::new(30),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     "pool-1",
///     "VyFi",
/// )?);
///
/// let pool = DefaultPoolFactory::create(&config)?;
/// let quote = pool.get_amount_out(&Assets::single(Unit::lovelace(), Amount::new(1_000)))?;
/// assert_eq!(quote.quantity_out(), Amount::new(996));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultPoolFactory;

impl DefaultPoolFactory {
    /// Creates a new pool instance with an opaque datum from the given
    /// configuration.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`PoolConfig::validate`].
    /// 2. Match on the config variant.
    /// 3. Delegate to the pool's [`FromConfig`] implementation.
    /// 4. Wrap the constructed pool in the corresponding [`PoolBox`]
    ///    variant.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::InvalidFee`] or [`QuoteError::InvalidConfiguration`]
    ///   if the configuration is invalid.
    /// - [`QuoteError::InvalidConfiguration`] if the requested curve's
    ///   feature is not enabled.
    pub fn create(config: &PoolConfig) -> Result<PoolBox<RawDatum>, QuoteError> {
        Self::create_typed(config)
    }

    /// Creates a pool that decodes its datum as `D`, with no datum attached.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_typed<D>(config: &PoolConfig) -> Result<PoolBox<D>, QuoteError> {
        config.validate()?;

        match config {
            #[cfg(feature = "constant-product")]
            PoolConfig::ConstantProduct(cfg) => {
                let pool = crate::pools::constant_product::ConstantProductPool::from_config(cfg)?;
                Ok(PoolBox::ConstantProduct(Box::new(pool)))
            }

            #[cfg(feature = "stable-swap")]
            PoolConfig::StableSwap(cfg) => {
                let pool = crate::pools::stable_swap::StableSwapPool::from_config(cfg)?;
                Ok(PoolBox::StableSwap(Box::new(pool)))
            }

            // Catch-all for config variants whose pool feature is disabled.
            #[allow(unreachable_patterns)]
            _ => Err(QuoteError::InvalidConfiguration(
                "requested curve is not enabled (missing feature flag)",
            )),
        }
    }

    /// Creates a pool that decodes `raw` as `D` on first datum request.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub fn create_with_datum<D>(
        config: &PoolConfig,
        raw: impl Into<Vec<u8>>,
    ) -> Result<PoolBox<D>, QuoteError> {
        let mut pool = Self::create_typed(config)?;
        pool.state_mut().refresh_datum(raw);
        Ok(pool)
    }
}
