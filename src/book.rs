//! # Page and Book Readers
//!
//! Turns raw Library of Babel text into flat symbol sequences ready for the
//! tile renderer.
//!
//! A downloaded book is framed as plain lines: two title lines, then repeated
//! blocks of 40 content lines plus one blank separator line, and finally two
//! footer lines. [`read_book`] strips the framing and yields one flattened
//! `String` per page; [`read_page`] does the per-page flattening.
//!
//! Neither reader validates alphabet membership or page length. That is the
//! caller's contract: the composer entry points hand the result straight to
//! [`crate::render::tile::draw`], which fails fast on bad data.

/// Symbols per page row.
pub const PAGE_COLUMNS: usize = 80;

/// Rows of text per page.
pub const PAGE_ROWS: usize = 40;

/// Symbols in one flattened page.
pub const PAGE_SYMBOLS: usize = PAGE_COLUMNS * PAGE_ROWS;

/// Title lines preceding the first page of a book.
pub const HEADER_LINES: usize = 2;

/// Footer lines trailing the last page of a book.
pub const FOOTER_LINES: usize = 2;

/// Lines one page occupies in book text: content plus one blank separator.
pub const LINES_PER_PAGE: usize = PAGE_ROWS + 1;

/// Flatten a sequence of text lines into one symbol string.
///
/// Line terminators are stripped from each line before concatenation, so the
/// result is a raster-source string with no embedded breaks.
pub fn read_page<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .collect()
}

/// Split the raw text of a book into flattened pages.
///
/// The first [`HEADER_LINES`] and last [`FOOTER_LINES`] lines are discarded.
/// The remainder is consumed in chunks of [`LINES_PER_PAGE`]: 40 content
/// lines become one page and the separator line is dropped. A trailing chunk
/// shorter than [`LINES_PER_PAGE`] is dropped silently, content and all.
/// That truncation is defined behavior for malformed framing, not an error.
pub fn read_book(raw: &str) -> Vec<String> {
    let lines: Vec<&str> = raw.lines().collect();
    let body = lines
        .get(HEADER_LINES..lines.len().saturating_sub(FOOTER_LINES))
        .unwrap_or_default();

    body.chunks_exact(LINES_PER_PAGE)
        .map(|chunk| read_page(chunk[..PAGE_ROWS].iter().copied()))
        .collect()
}
