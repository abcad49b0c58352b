//! Feature-gated pool implementations and the [`PoolBox`] dispatch enum.
//!
//! Every pool wraps the shared [`PoolState`] record and adds its curve.
//! Each curve is behind its own Cargo feature flag. The [`PoolBox`] enum
//! provides zero-cost static dispatch across all enabled pool types,
//! allowing heterogeneous collections without `dyn` trait objects.
//!
//! # Pool Types
//!
//! | Feature | Pool | Style |
//! |---------|------|-------|
//! | `constant-product` | [`ConstantProductPool`] | `x · y = k` |
//! | `stable-swap` | [`StableSwapPool`] | Curve StableSwap |

#[cfg(feature = "constant-product")]
pub mod constant_product;
#[cfg(feature = "stable-swap")]
pub mod stable_swap;

mod pool_box;
mod state;

#[cfg(all(test, feature = "constant-product", feature = "stable-swap"))]
#[allow(clippy::panic)]
mod proptest_properties;

#[cfg(feature = "constant-product")]
pub use constant_product::ConstantProductPool;
pub use pool_box::PoolBox;
#[cfg(feature = "stable-swap")]
pub use stable_swap::StableSwapPool;
pub use state::PoolState;
