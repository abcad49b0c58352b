//! Unified error types for the quoting library.
//!
//! All fallible operations across the crate return [`QuoteError`] as their
//! error type, so callers building swap requests on top of a quote match
//! on a single enum.
//!
//! Numerical non-convergence of the stable-swap solvers is not an error:
//! the solvers return their best estimate after the iteration ceiling and
//! report the condition through `tracing` instead.

use thiserror::Error;

/// Errors produced while building pools or quoting swaps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The swap input bag is malformed or names a unit outside the pool.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The pool datum was requested before a raw encoding was supplied.
    #[error("pool datum is not available")]
    MissingDatum,

    /// The datum decoder rejected the raw encoding.
    #[error("invalid pool datum: {0}")]
    InvalidDatum(String),

    /// An asset unit identifier is empty, or a pair repeats one unit.
    #[error("invalid asset unit: {0}")]
    InvalidUnit(&'static str),

    /// The volume fee is outside `0..10_000` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A pool parameter other than the fee or units is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// One side of a stable-swap pool is empty while the other is not.
    #[error("pool reserve is zero")]
    ZeroReserve,

    /// A value does not fit its fixed-width representation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, QuoteError>;
