//! # Babelimage - Library of Babel Mosaic Renderer
//!
//! Babelimage renders Library of Babel text as raster images. Every character
//! of the 29-symbol alphabet (a-z, comma, period, space) maps to a fixed RGB
//! color, and pages or whole books become pixel mosaics:
//!
//! - **Character codec**: deterministic symbol-to-color quantization
//! - **Tile renderer**: row-major ("book") and column-major ("matrix") fills
//! - **Readers**: page and book text framing, header/footer aware
//! - **Composer**: solid colors, strings, 80x40 pages, 1640x800 book mosaics
//!
//! ## Quick Start
//!
//! ```
//! use babelimage::{canvas::Size, color, render::composer};
//!
//! // A small image straight from a symbol string, one pixel per character.
//! let canvas = composer::from_string("abcdefghijklmnopqrstuvwxyz., ", Size::new(4, 7))?;
//! assert_eq!(canvas.get_pixel(2, 0)?, color::to_color('c')?);
//!
//! // The caller owns the finished buffer; persisting it is up to them.
//! let image = canvas.into_image();
//! assert_eq!(image.dimensions(), (4, 7));
//! # Ok::<(), babelimage::BabelError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | Symbol-to-color codec |
//! | [`canvas`] | Bounds-checked RGB pixel grid |
//! | [`book`] | Page and book text readers |
//! | [`render`] | Tile fills and image composition |
//! | [`error`] | Error types |
//!
//! Reading book files from disk and encoding the finished
//! [`image::RgbImage`] to PNG or similar are the caller's concern; this
//! crate is the pure text-to-pixels core.

pub mod book;
pub mod canvas;
pub mod color;
pub mod error;
pub mod render;

// Re-exports for convenience
pub use canvas::{Canvas, Size};
pub use error::BabelError;
pub use render::FillStyle;
