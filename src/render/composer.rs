//! # Image Composer
//!
//! Top-level entry points that turn text into finished canvases: a solid
//! color, an arbitrary symbol string, a single 80x40 page, or a whole book
//! laid out as a 41x10 mosaic of vertical page tiles.

use crate::book::{self, PAGE_COLUMNS, PAGE_ROWS};
use crate::canvas::{Canvas, Size};
use crate::error::BabelError;
use crate::render::tile::{self, FillStyle};
use image::Rgb;

/// Page tiles across the book mosaic.
pub const TILE_COLUMNS: u32 = 41;

/// Page tile rows down the book mosaic.
pub const TILE_ROWS: u32 = 10;

/// Width of one page tile in pixels.
pub const TILE_WIDTH: u32 = 40;

/// Height of one page tile in pixels.
pub const TILE_HEIGHT: u32 = 80;

/// Background of book mosaics, visible wherever a tile has no page.
pub const BOOK_BACKGROUND: Rgb<u8> = Rgb([0x11, 0x11, 0x11]);

/// Pixel size of a single rendered page: one pixel per symbol, 80x40.
pub fn page_size() -> Size {
    Size::new(PAGE_COLUMNS as u32, PAGE_ROWS as u32)
}

/// Pixel size of a full book mosaic: 41x10 tiles of 40x80, so 1640x800.
pub fn book_size() -> Size {
    Size::new(TILE_COLUMNS * TILE_WIDTH, TILE_ROWS * TILE_HEIGHT)
}

/// A canvas of `size` filled with one solid color. No symbol decoding.
pub fn from_color(color: Rgb<u8>, size: Size) -> Canvas {
    Canvas::filled(size, color)
}

/// Render the first `size.area()` symbols of `symbols` book-style into a
/// fresh canvas of `size`.
pub fn from_string(symbols: &str, size: Size) -> Result<Canvas, BabelError> {
    let mut canvas = Canvas::new(size);
    tile::draw(&mut canvas, symbols, (0, 0), size, FillStyle::Book)?;
    Ok(canvas)
}

/// Render one page of raw text (40 lines of 80 symbols) as an 80x40 canvas,
/// book-style.
pub fn from_page(raw_page: &str) -> Result<Canvas, BabelError> {
    let symbols = book::read_page(raw_page.lines());
    from_string(&symbols, page_size())
}

/// Render a whole raw book as a 1640x800 mosaic.
///
/// Each page becomes one 40x80 tile drawn matrix-style; tiles fill the
/// mosaic row-major, 41 across. A book with fewer than 410 pages leaves the
/// remaining tiles showing [`BOOK_BACKGROUND`]; pages beyond 410 are
/// ignored. Both follow from the book reader's silent truncation of
/// malformed framing.
pub fn from_book(raw_book: &str) -> Result<Canvas, BabelError> {
    let mut canvas = Canvas::filled(book_size(), BOOK_BACKGROUND);
    let pages = book::read_book(raw_book);

    let tile_size = Size::new(TILE_WIDTH, TILE_HEIGHT);
    let tile_count = (TILE_COLUMNS * TILE_ROWS) as usize;
    for (page_idx, page) in pages.iter().take(tile_count).enumerate() {
        let tx = page_idx as u32 % TILE_COLUMNS;
        let ty = page_idx as u32 / TILE_COLUMNS;
        let origin = (tx * TILE_WIDTH, ty * TILE_HEIGHT);
        tile::draw(&mut canvas, page, origin, tile_size, FillStyle::Matrix)?;
    }

    Ok(canvas)
}
