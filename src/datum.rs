//! Lazily decoded on-chain pool datum.
//!
//! The decoding layer hands the core a raw byte encoding of a pool's
//! datum. [`Datum`] holds it in an explicit cell and decodes it through a
//! [`PoolDatum`] implementation the first time it is requested, keeping
//! the decoded value for later requests.
//!
//! ```text
//! Missing ──────────────► MissingDatum error
//! Undecoded(raw) ─decode─► Decoded(datum)
//!        ▲                       │
//!        └──── refresh(raw) ─────┘
//! ```

use crate::error::{QuoteError, Result};

/// A typed datum decodable from its raw on-chain encoding.
///
/// Implemented by the decoding layer for each venue's datum layout.
pub trait PoolDatum: Sized {
    /// Decodes the datum from its raw encoding.
    ///
    /// # Errors
    ///
    /// Implementations return [`QuoteError::InvalidDatum`] when the bytes
    /// do not describe a valid datum.
    fn from_bytes(raw: &[u8]) -> Result<Self>;
}

/// Opaque datum that keeps the raw encoding unchanged.
///
/// Used by pools whose callers never need a typed view of the datum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawDatum(Vec<u8>);

impl RawDatum {
    /// Returns the raw encoding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl PoolDatum for RawDatum {
    fn from_bytes(raw: &[u8]) -> Result<Self> {
        Ok(Self(raw.to_vec()))
    }
}

/// Cell holding a pool datum in one of its lifecycle states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Datum<D> {
    /// No raw encoding has been supplied.
    #[default]
    Missing,
    /// Raw encoding awaiting its first decode.
    Undecoded(Vec<u8>),
    /// Decoded and memoized.
    Decoded(D),
}

impl<D> Datum<D> {
    /// Creates a cell from a raw encoding.
    #[must_use]
    pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self::Undecoded(raw.into())
    }

    /// Returns `true` once the datum has been decoded.
    #[must_use]
    pub const fn is_decoded(&self) -> bool {
        matches!(self, Self::Decoded(_))
    }

    /// Returns `true` if a datum can be produced without new input.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Returns the decoded datum without attempting to decode.
    #[must_use]
    pub const fn decoded(&self) -> Option<&D> {
        match self {
            Self::Decoded(datum) => Some(datum),
            Self::Missing | Self::Undecoded(_) => None,
        }
    }

    /// Replaces the cell content with a fresh raw encoding.
    pub fn refresh(&mut self, raw: impl Into<Vec<u8>>) {
        *self = Self::Undecoded(raw.into());
    }
}

impl<D: PoolDatum> Datum<D> {
    /// Returns the decoded datum, decoding and memoizing it on first use.
    ///
    /// A failed decode leaves the raw encoding in place.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::MissingDatum`] if no raw encoding is available.
    /// - Any error returned by [`PoolDatum::from_bytes`].
    pub fn get_or_decode(&mut self) -> Result<&D> {
        if let Self::Undecoded(raw) = self {
            let datum = D::from_bytes(raw)?;
            tracing::trace!(bytes = raw.len(), "decoded pool datum");
            *self = Self::Decoded(datum);
        }

        match self {
            Self::Decoded(datum) => Ok(datum),
            Self::Missing | Self::Undecoded(_) => Err(QuoteError::MissingDatum),
        }
    }
}
