//! Core trait abstractions for pool quoting.
//!
//! This module defines the traits all pool implementations satisfy:
//! [`SwapPool`] for quoting and identity, and [`FromConfig`] for
//! configuration-driven pool construction.

mod from_config;
mod swap_pool;

pub use from_config::FromConfig;
pub use swap_pool::SwapPool;
