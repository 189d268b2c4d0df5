//! # Character to Color Codec
//!
//! Maps the 29-symbol Babel alphabet (`a`-`z`, comma, period, space) onto
//! 24-bit RGB colors.
//!
//! Each symbol has a rank in `[0, 28]`: letters map to `0..=25`, then comma,
//! period and space follow. The rank is scaled by a fixed quantization factor
//! (`0xFFFFFF / 28`) into a raw 24-bit value, whose bytes become the red,
//! green and blue channels. The mapping is pure, deterministic and strictly
//! increasing in rank.
//!
//! Because the factor is an integer quotient, rank 28 (space) lands on
//! `#fffff8` rather than pure white. That rounding artifact is part of the
//! defined output, not something to correct.
//!
//! ## Example
//!
//! ```
//! use babelimage::color;
//!
//! assert_eq!(color::to_hex('a').unwrap(), "#000000");
//! assert_eq!(color::to_hex('m').unwrap(), "#6db6d8");
//! assert_eq!(color::to_hex(' ').unwrap(), "#fffff8");
//! ```

use crate::error::BabelError;
use image::Rgb;

/// Number of symbols in the Babel alphabet.
pub const ALPHABET_LEN: u32 = 29;

/// Scale from a symbol rank to a raw 24-bit color value: `0xFFFFFF / 28`.
pub const QUANTIZATION_FACTOR: u32 = 0xFF_FFFF / (ALPHABET_LEN - 1);

/// Rank of a symbol within the alphabet: `a`-`z` give 0-25, comma 26,
/// period 27, space 28. Any other character is rejected.
pub fn rank(symbol: char) -> Result<u32, BabelError> {
    match symbol {
        'a'..='z' => Ok(symbol as u32 - 'a' as u32),
        ',' => Ok(26),
        '.' => Ok(27),
        ' ' => Ok(28),
        _ => Err(BabelError::InvalidSymbol(symbol)),
    }
}

/// Raw 24-bit color value for a symbol: `rank * QUANTIZATION_FACTOR`.
pub fn raw_value(symbol: char) -> Result<u32, BabelError> {
    Ok(rank(symbol)? * QUANTIZATION_FACTOR)
}

/// RGB color for a symbol, extracted bytewise from [`raw_value`].
pub fn to_color(symbol: char) -> Result<Rgb<u8>, BabelError> {
    let raw = raw_value(symbol)?;
    Ok(Rgb([
        (raw >> 16 & 0xFF) as u8,
        (raw >> 8 & 0xFF) as u8,
        (raw & 0xFF) as u8,
    ]))
}

/// Six-digit lowercase `#rrggbb` string for a symbol's color.
///
/// Mostly useful for tests and debugging; rendering goes through
/// [`to_color`] directly.
pub fn to_hex(symbol: char) -> Result<String, BabelError> {
    Ok(format!("#{:06x}", raw_value(symbol)?))
}

/// Format an RGB color as a lowercase `#rrggbb` string.
pub fn color_to_hex(color: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse a `#rrggbb` hex triple into an RGB color.
///
/// This is the inverse of [`color_to_hex`] and exists for the callers that
/// carry colors as strings (solid fills, mosaic backgrounds). Upper and
/// lowercase digits are both accepted.
pub fn parse_hex(s: &str) -> Result<Rgb<u8>, BabelError> {
    let digits = s
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| BabelError::InvalidHexColor(s.to_string()))?;

    let channel = |i: usize| -> u8 {
        // validated above, cannot fail
        u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0)
    };
    Ok(Rgb([channel(0), channel(2), channel(4)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization_factor() {
        assert_eq!(QUANTIZATION_FACTOR, 599_186);
    }

    #[test]
    fn test_rank_covers_alphabet() {
        assert_eq!(rank('a'), Ok(0));
        assert_eq!(rank('z'), Ok(25));
        assert_eq!(rank(','), Ok(26));
        assert_eq!(rank('.'), Ok(27));
        assert_eq!(rank(' '), Ok(28));
    }

    #[test]
    fn test_rank_rejects_foreign_characters() {
        for c in ['A', '0', '\n', '!', 'é'] {
            assert_eq!(rank(c), Err(BabelError::InvalidSymbol(c)));
        }
    }

    #[test]
    fn test_to_hex_known_values() {
        assert_eq!(to_hex('a').unwrap(), "#000000");
        assert_eq!(to_hex('m').unwrap(), "#6db6d8");
        // Space is not pure white because of integer rounding; that is the
        // documented behavior.
        assert_eq!(to_hex(' ').unwrap(), "#fffff8");
    }

    #[test]
    fn test_to_color_known_values() {
        assert_eq!(to_color('a').unwrap(), Rgb([0, 0, 0]));
        assert_eq!(to_color('m').unwrap(), Rgb([109, 182, 216]));
        assert_eq!(to_color(' ').unwrap(), Rgb([255, 255, 248]));
    }

    #[test]
    fn test_raw_value_is_monotonic_in_rank() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz,. ";
        let values: Vec<u32> = alphabet.chars().map(|c| raw_value(c).unwrap()).collect();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ffffff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_hex("#111111").unwrap(), Rgb([0x11, 0x11, 0x11]));
        assert_eq!(parse_hex("#6DB6D8").unwrap(), Rgb([109, 182, 216]));
    }

    #[test]
    fn test_parse_hex_rejects_malformed_input() {
        for s in ["ffffff", "#fff", "#gggggg", "#1111111", ""] {
            assert_eq!(parse_hex(s), Err(BabelError::InvalidHexColor(s.to_string())));
        }
    }

    #[test]
    fn test_hex_round_trip() {
        for c in "abcdefghijklmnopqrstuvwxyz,. ".chars() {
            let color = to_color(c).unwrap();
            assert_eq!(parse_hex(&color_to_hex(color)).unwrap(), color);
        }
    }
}
