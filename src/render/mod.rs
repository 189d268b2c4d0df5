//! # Rendering Module
//!
//! Turns flat symbol sequences into pixels.
//!
//! ## Modules
//!
//! - [`tile`]: fill a rectangular canvas window from a symbol string, in
//!   book (row-major) or matrix (column-major) order
//! - [`composer`]: complete images built from the tile renderer: solid
//!   colors, strings, single pages and full book mosaics
//!
//! ## Usage Example
//!
//! ```
//! use babelimage::canvas::Size;
//! use babelimage::render::composer;
//!
//! let canvas = composer::from_string("abcdefghijklmnopqrstuvwxyz., ", Size::new(4, 7))?;
//! assert_eq!(canvas.size(), Size::new(4, 7));
//! # Ok::<(), babelimage::BabelError>(())
//! ```

pub mod composer;
pub mod tile;

pub use tile::{FillStyle, draw};
