use bevy::color::{ColorToPacked, Srgba};
use thiserror::Error;

use super::PaletteColor;

/// Number of characters in an `AARRGGBB` color token.
const TOKEN_LEN: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorTokenError {
    #[error("expected {len} hex digits (AARRGGBB), found {0} characters", len = TOKEN_LEN)]
    Length(usize),
    #[error("invalid hex digit {digit:?} at position {position}")]
    Digit { digit: char, position: usize },
}

const fn hex_digit(v: u8) -> Option<u8> {
    match v {
        b'0'..=b'9' => Some(v - b'0'),
        b'A'..=b'F' => Some(v - b'A' + 10),
        b'a'..=b'f' => Some(v - b'a' + 10),
        _ => None,
    }
}

/// Parses a single `AARRGGBB` token. The token must already be trimmed.
///
/// Each byte pair is normalized to `byte / 255`.
///
/// ```ignore
/// let green = parse_color_token("FF00FF00")?;
/// assert_eq!(green.label(), "00FF00FF");
/// ```
pub fn parse_color_token(token: &str) -> Result<PaletteColor, ColorTokenError> {
    let len = token.chars().count();
    if len != TOKEN_LEN {
        return Err(ColorTokenError::Length(len));
    }

    let mut nibbles = [0u8; TOKEN_LEN];
    for (position, digit) in token.chars().enumerate() {
        nibbles[position] = u8::try_from(digit)
            .ok()
            .and_then(hex_digit)
            .ok_or(ColorTokenError::Digit { digit, position })?;
    }

    let byte = |i: usize| nibbles[i] << 4 | nibbles[i + 1];
    Ok(PaletteColor::from_argb_u8(byte(0), byte(2), byte(4), byte(6)))
}

/// Formats a color as uppercase `RRGGBBAA`, going through Bevy's own byte packing.
pub fn rgba_hex(color: Srgba) -> String {
    let [r, g, b, a] = color.to_u8_array();
    format!("{r:02X}{g:02X}{b:02X}{a:02X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_green() {
        let color = parse_color_token("FF00FF00").unwrap();
        assert_eq!(color.alpha, 1.0);
        assert_eq!(color.red, 0.0);
        assert_eq!(color.green, 1.0);
        assert_eq!(color.blue, 0.0);
    }

    #[test]
    fn channels_are_bytes_over_255() {
        let color = parse_color_token("80123abc").unwrap();
        assert_eq!(color.alpha, 0x80 as f32 / 255.0);
        assert_eq!(color.red, 0x12 as f32 / 255.0);
        assert_eq!(color.green, 0x3a as f32 / 255.0);
        assert_eq!(color.blue, 0xbc as f32 / 255.0);
    }

    #[test]
    fn wrong_length() {
        assert_eq!(parse_color_token("BADLEN"), Err(ColorTokenError::Length(6)));
        assert_eq!(
            parse_color_token("FF00FF0011"),
            Err(ColorTokenError::Length(10))
        );
        assert_eq!(parse_color_token(""), Err(ColorTokenError::Length(0)));
    }

    #[test]
    fn length_error_message() {
        assert_eq!(
            ColorTokenError::Length(6).to_string(),
            "expected 8 hex digits (AARRGGBB), found 6 characters"
        );
    }

    #[test]
    fn non_hex_digit() {
        assert_eq!(
            parse_color_token("FF00GG00"),
            Err(ColorTokenError::Digit {
                digit: 'G',
                position: 4
            })
        );
        // Multi-byte characters are counted as one character, then rejected as digits.
        assert_eq!(
            parse_color_token("FF00FF0é"),
            Err(ColorTokenError::Digit {
                digit: 'é',
                position: 7
            })
        );
    }

    #[test]
    fn label_is_rgba() {
        let color = parse_color_token("80FF0102").unwrap();
        assert_eq!(rgba_hex(*color), "FF010280");
    }
}
