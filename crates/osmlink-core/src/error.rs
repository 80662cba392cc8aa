//! Error types for short-link decoding and encoding.

use thiserror::Error;

/// Why a code could not be decoded. Decoding stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// `ch` at character `position` (0-based) is not a short-link symbol.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
}

/// Why a coordinate or tile could not be turned into a code.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("latitude {0} is outside the Web Mercator range")]
    InvalidLatitude(f64),
    #[error("longitude {0} is outside -180..=180")]
    InvalidLongitude(f64),
    #[error("zoom {0} is deeper than the supported maximum")]
    InvalidZoom(u32),
    /// Each symbol carries three zoom levels, so only multiples of 3 encode exactly.
    #[error("zoom {0} is not a multiple of 3")]
    UnalignedZoom(u8),
    #[error("tile ({x}, {y}) does not exist at zoom {zoom}")]
    TileOutOfRange { x: u64, y: u64, zoom: u8 },
}
