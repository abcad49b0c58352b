//! Numeric utilities for the pricing curves.
//!
//! - [`big`]: arbitrary-precision helpers for the constant-product path,
//!   where products of four reserve-sized factors exceed `u128`.
//! - [`newton`]: the bounded iteration driver shared by both stable-swap
//!   solvers.

pub mod big;
pub mod newton;

pub use newton::{Solution, CONVERGENCE_THRESHOLD, MAX_ITERATIONS};
