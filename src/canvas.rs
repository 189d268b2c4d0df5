//! # Canvas
//!
//! An owned, bounds-checked RGB pixel grid. This is the buffer every render
//! entry point populates and hands back to the caller.
//!
//! The grid is backed by an [`image::RgbImage`], so a finished canvas can be
//! released with [`Canvas::into_image`] and persisted by whatever collaborator
//! owns file output. Persistence itself is outside this crate.
//!
//! A canvas is exclusively owned: [`Canvas::set_pixel`] mutates in place
//! through `&mut self`, and nothing in this crate keeps a reference to a
//! canvas across calls. Callers rendering in parallel use one canvas each.

use crate::error::BabelError;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// Width and height of a canvas or draw window, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels (and therefore symbols) the size covers.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// A mutable width x height grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas with every pixel set to the default background (black).
    pub fn new(size: Size) -> Self {
        Self {
            image: RgbImage::new(size.width, size.height),
        }
    }

    /// Create a canvas with every pixel set to `color`.
    pub fn filled(size: Size, color: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size.width, size.height, color),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Write one pixel. Fails if `(x, y)` lies outside the grid.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb<u8>) -> Result<(), BabelError> {
        self.check_bounds(x, y)?;
        self.image.put_pixel(x, y, color);
        Ok(())
    }

    /// Read one pixel. Same bounds contract as [`Canvas::set_pixel`].
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgb<u8>, BabelError> {
        self.check_bounds(x, y)?;
        Ok(*self.image.get_pixel(x, y))
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), BabelError> {
        if x >= self.width() || y >= self.height() {
            return Err(BabelError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Borrow the backing image, e.g. for encoding.
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Release the backing image to the caller.
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
