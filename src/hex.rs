//! Hex codec: `#RGB` / `#RRGGBB` / `#RRGGBBAA` strings and packed `u32`s.
//!
//! Everything here is digit and bit repacking, so byte values survive any
//! string or integer round trip exactly.

use thiserror::Error;

use crate::constants::OPAQUE;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexParseError {
    /// Digit count after stripping `#` and whitespace is not 3, 6 or 8.
    #[error("invalid hex color length {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),
    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Parse a hex color string into a packed `RRGGBBAA` integer.
///
/// Leading and trailing whitespace and a leading `#` are ignored. Three
/// digits expand to doubled pairs, six digits get an opaque `FF` alpha.
pub fn parse_hex(input: &str) -> Result<u32, HexParseError> {
    let result = normalize_hex(input).and_then(|digits| {
        digits.chars().try_fold(0u32, |acc, c| {
            c.to_digit(16)
                .map(|d| acc << 4 | d)
                .ok_or(HexParseError::InvalidDigit(c))
        })
    });
    if let Err(err) = &result {
        tracing::debug!(input, %err, "rejected hex color");
    }
    result
}

/// Expand to exactly eight uppercase digits (`RRGGBBAA`).
fn normalize_hex(input: &str) -> Result<String, HexParseError> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    let upper = stripped.to_ascii_uppercase();
    match upper.chars().count() {
        3 => {
            let mut out = String::with_capacity(8);
            for c in upper.chars() {
                out.push(c);
                out.push(c);
            }
            out.push_str("FF");
            Ok(out)
        }
        6 => Ok(format!("{upper}FF")),
        8 => Ok(upper),
        n => Err(HexParseError::InvalidLength(n)),
    }
}

/// Format as `#RRGGBB` or `#RRGGBBAA`, uppercase.
pub fn format_hex([r, g, b, a]: [u8; 4], with_alpha: bool) -> String {
    if with_alpha {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// Pack big-endian: `RRGGBBAA`, or `00RRGGBB` without alpha.
pub fn pack([r, g, b, a]: [u8; 4], with_alpha: bool) -> u32 {
    let rgb = (r as u32) << 16 | (g as u32) << 8 | b as u32;
    if with_alpha {
        rgb << 8 | a as u32
    } else {
        rgb
    }
}

/// Unpack `RRGGBBAA`.
pub fn unpack_with_alpha(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Unpack `xxRRGGBB`; the top byte is ignored and alpha is opaque.
pub fn unpack_without_alpha(value: u32) -> [u8; 4] {
    let [_, r, g, b] = value.to_be_bytes();
    [r, g, b, OPAQUE]
}
