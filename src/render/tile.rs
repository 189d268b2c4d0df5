//! # Tile Renderer
//!
//! Fills a rectangular window of a [`Canvas`] from a flat symbol string,
//! one pixel per symbol, in one of two traversal orders.

use crate::canvas::{Canvas, Size};
use crate::color;
use crate::error::BabelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Traversal order mapping window coordinates to flat symbol indices.
///
/// The two orders are the only ones the layouts need, so the set is closed:
/// `draw` matches exhaustively and an unknown style cannot reach it. The
/// string form only exists at the parsing boundary ([`FillStyle::from_str`])
/// for callers that carry the style name in external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillStyle {
    /// Left to right, top to bottom, like letters on a page:
    /// `index = x + y * width`.
    Book,
    /// Top to bottom, left to right: `index = y + x * height`.
    Matrix,
}

impl FromStr for FillStyle {
    type Err = BabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" => Ok(FillStyle::Book),
            "matrix" => Ok(FillStyle::Matrix),
            _ => Err(BabelError::UnknownStyle(s.to_string())),
        }
    }
}

/// Draw `symbols` into the `size` window of `canvas` at `origin`.
///
/// Consumes the first `size.area()` symbols of `symbols` in the order given
/// by `style`, writing each symbol's color at the corresponding window pixel.
/// Pixels outside the window are never touched, so partial draws compose
/// over an existing background.
///
/// Fails before any pixel is written when the window does not fit inside the
/// canvas (`OutOfBounds`) or when `symbols` is shorter than the window area
/// (`InsufficientData`). Symbol decoding itself can still fail mid-draw on an
/// out-of-alphabet character; callers feeding unvalidated text get the error
/// for the first bad symbol.
pub fn draw(
    canvas: &mut Canvas,
    symbols: &str,
    origin: (u32, u32),
    size: Size,
    style: FillStyle,
) -> Result<(), BabelError> {
    let (ox, oy) = origin;
    let Size { width, height } = size;

    if ox + width > canvas.width() || oy + height > canvas.height() {
        return Err(BabelError::OutOfBounds {
            x: ox + width.saturating_sub(1),
            y: oy + height.saturating_sub(1),
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    let symbols: Vec<char> = symbols.chars().collect();
    if symbols.len() < size.area() {
        return Err(BabelError::InsufficientData {
            needed: size.area(),
            got: symbols.len(),
        });
    }

    match style {
        FillStyle::Book => {
            for y in 0..height {
                for x in 0..width {
                    let idx = (x + y * width) as usize;
                    canvas.set_pixel(ox + x, oy + y, color::to_color(symbols[idx])?)?;
                }
            }
        }
        FillStyle::Matrix => {
            for x in 0..width {
                for y in 0..height {
                    let idx = (y + x * height) as usize;
                    canvas.set_pixel(ox + x, oy + y, color::to_color(symbols[idx])?)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const TEST_SYMBOLS: &str = "abcdefghijklmnop";

    fn pixel_symbol(canvas: &Canvas, x: u32, y: u32) -> Rgb<u8> {
        canvas.get_pixel(x, y).unwrap()
    }

    #[test]
    fn test_draw_book_style() {
        let mut canvas = Canvas::new(Size::new(4, 4));
        draw(&mut canvas, TEST_SYMBOLS, (0, 0), Size::new(4, 4), FillStyle::Book).unwrap();

        assert_eq!(pixel_symbol(&canvas, 0, 0), color::to_color('a').unwrap());
        assert_eq!(pixel_symbol(&canvas, 3, 0), color::to_color('d').unwrap());
        assert_eq!(pixel_symbol(&canvas, 3, 1), color::to_color('h').unwrap());
        assert_eq!(pixel_symbol(&canvas, 3, 3), color::to_color('p').unwrap());
    }

    #[test]
    fn test_draw_matrix_style() {
        let mut canvas = Canvas::new(Size::new(4, 4));
        draw(&mut canvas, TEST_SYMBOLS, (0, 0), Size::new(4, 4), FillStyle::Matrix).unwrap();

        assert_eq!(pixel_symbol(&canvas, 0, 0), color::to_color('a').unwrap());
        assert_eq!(pixel_symbol(&canvas, 0, 3), color::to_color('d').unwrap());
        assert_eq!(pixel_symbol(&canvas, 3, 0), color::to_color('m').unwrap());
    }

    #[test]
    fn test_draw_partial_rect_leaves_background() {
        let bg = Rgb([0x11, 0x11, 0x11]);
        let mut canvas = Canvas::filled(Size::new(4, 4), bg);
        draw(&mut canvas, "abcd", (1, 1), Size::new(2, 2), FillStyle::Book).unwrap();

        assert_eq!(pixel_symbol(&canvas, 1, 1), color::to_color('a').unwrap());
        assert_eq!(pixel_symbol(&canvas, 2, 2), color::to_color('d').unwrap());
        // Everything outside the 2x2 window keeps the background.
        for y in 0..4 {
            for x in 0..4 {
                if !(1..=2).contains(&x) || !(1..=2).contains(&y) {
                    assert_eq!(pixel_symbol(&canvas, x, y), bg);
                }
            }
        }
    }

    #[test]
    fn test_draw_insufficient_symbols_mutates_nothing() {
        let bg = Rgb([9, 9, 9]);
        let mut canvas = Canvas::filled(Size::new(4, 4), bg);
        let err = draw(&mut canvas, "abc", (0, 0), Size::new(4, 4), FillStyle::Book);

        assert_eq!(err, Err(BabelError::InsufficientData { needed: 16, got: 3 }));
        assert_eq!(canvas, Canvas::filled(Size::new(4, 4), bg));
    }

    #[test]
    fn test_draw_window_outside_canvas() {
        let mut canvas = Canvas::new(Size::new(4, 4));
        let err = draw(&mut canvas, TEST_SYMBOLS, (2, 2), Size::new(4, 4), FillStyle::Book);
        assert!(matches!(err, Err(BabelError::OutOfBounds { .. })));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("BOOK".parse::<FillStyle>().unwrap(), FillStyle::Book);
        assert_eq!("matrix".parse::<FillStyle>().unwrap(), FillStyle::Matrix);
        assert_eq!(
            "gooblegobble".parse::<FillStyle>(),
            Err(BabelError::UnknownStyle("gooblegobble".to_string()))
        );
    }
}
