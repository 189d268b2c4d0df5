//! # Error Types
//!
//! This module defines error types used throughout the babelimage library.
//!
//! All errors are local, synchronous faults: any error aborts the single
//! render call that raised it and is surfaced directly to the caller. There
//! are no transient or partial-failure conditions to retry. Malformed book
//! framing is deliberately *not* an error; see [`crate::book::read_book`].

use thiserror::Error;

/// Main error type for babelimage operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BabelError {
    /// Character outside the 29-symbol Babel alphabet (a-z, comma, period, space)
    #[error("invalid symbol {0:?}: not in the 29-symbol alphabet")]
    InvalidSymbol(char),

    /// Pixel coordinate outside the canvas extents
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Fill style name that is neither "book" nor "matrix"
    #[error("unknown fill style: {0:?}")]
    UnknownStyle(String),

    /// Fewer symbols supplied than the target region requires
    #[error("insufficient symbol data: region needs {needed} symbols, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Color string that is not a `#rrggbb` hex triple
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),
}
