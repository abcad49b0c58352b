//! Enum dispatch wrapper for all pool types.
//!
//! [`PoolBox`] wraps every concrete pool implementation behind a single
//! enum, enabling heterogeneous collections and zero-cost static
//! dispatch. Each variant is feature-gated to match its pool type.

#[cfg(feature = "constant-product")]
use super::constant_product::ConstantProductPool;
#[cfg(feature = "stable-swap")]
use super::stable_swap::StableSwapPool;

use super::PoolState;
use crate::datum::{PoolDatum, RawDatum};
use crate::domain::{Assets, CurveKind, SwapQuote};
use crate::error::QuoteError;
use crate::traits::SwapPool;

/// Zero-cost dispatch enum wrapping all concrete pool implementations.
///
/// Each variant is feature-gated behind its respective Cargo feature
/// flag. The enum implements [`SwapPool`] by delegating every method
/// call to the inner pool via `match`; its variant always agrees with
/// [`SwapPool::curve`].
///
/// # Example
///
/// ```text
/// let pool_box = PoolBox::ConstantProduct(Box::new(cp_pool));
/// let quote = pool_box.get_amount_out(&input)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PoolBox<D = RawDatum> {
    /// Constant product (`x · y = k`).
    #[cfg(feature = "constant-product")]
    ConstantProduct(Box<ConstantProductPool<D>>),

    /// StableSwap (Curve style).
    #[cfg(feature = "stable-swap")]
    StableSwap(Box<StableSwapPool<D>>),
}

/// Helper macro to delegate a method call to every PoolBox variant.
///
/// Generates a match arm for each feature-gated variant, calling the
/// same method on the inner pool.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            #[cfg(feature = "constant-product")]
            PoolBox::ConstantProduct(p) => p.$method($($arg),*),
            #[cfg(feature = "stable-swap")]
            PoolBox::StableSwap(p) => p.$method($($arg),*),
        }
    };
}

impl<D> PoolBox<D> {
    /// Mutable access to the wrapped pool's record.
    pub fn state_mut(&mut self) -> &mut PoolState<D> {
        delegate!(self, state_mut())
    }
}

#[cfg(feature = "constant-product")]
impl<D> From<ConstantProductPool<D>> for PoolBox<D> {
    fn from(pool: ConstantProductPool<D>) -> Self {
        Self::ConstantProduct(Box::new(pool))
    }
}

#[cfg(feature = "stable-swap")]
impl<D> From<StableSwapPool<D>> for PoolBox<D> {
    fn from(pool: StableSwapPool<D>) -> Self {
        Self::StableSwap(Box::new(pool))
    }
}

impl<D: PoolDatum> SwapPool for PoolBox<D> {
    type Datum = D;

    fn get_amount_out(&self, input: &Assets) -> Result<SwapQuote, QuoteError> {
        delegate!(self, get_amount_out(input))
    }

    fn pool_id(&self) -> &str {
        delegate!(self, pool_id())
    }

    fn dex(&self) -> &str {
        delegate!(self, dex())
    }

    fn curve(&self) -> CurveKind {
        delegate!(self, curve())
    }

    fn state(&self) -> &PoolState<D> {
        delegate!(self, state())
    }

    fn pool_datum(&mut self) -> Result<&D, QuoteError> {
        delegate!(self, pool_datum())
    }
}
