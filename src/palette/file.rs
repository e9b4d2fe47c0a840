//! Plain-text palette files.
//!
//! One color per line in `AARRGGBB` form. Lines starting with `;` are comments and blank lines
//! are ignored. Malformed lines are collected as [`RejectedLine`]s instead of failing the load.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{
    PaletteColor,
    hex::{ColorTokenError, parse_color_token},
};

const COMMENT_MARKER: char = ';';
const BYTE_ORDER_MARK: char = '\u{FEFF}';

#[derive(Error, Debug)]
pub enum PaletteFileError {
    #[error("palette file {0:?} not found")]
    NotFound(PathBuf),
    #[error("failed to read palette file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A line that looked like a color but could not be parsed as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source text.
    pub line_number: usize,
    pub text: String,
    pub error: ColorTokenError,
}

#[derive(Debug, Default)]
pub struct ParsedPalette {
    pub colors: Vec<PaletteColor>,
    pub rejected: Vec<RejectedLine>,
}

pub fn parse_palette(text: &str) -> ParsedPalette {
    let mut palette = ParsedPalette::default();
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

    for (index, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with(COMMENT_MARKER) {
            continue;
        }

        match parse_color_token(token) {
            Ok(color) => palette.colors.push(color),
            Err(error) => palette.rejected.push(RejectedLine {
                line_number: index + 1,
                text: line.to_string(),
                error,
            }),
        }
    }

    palette
}

/// Reads and parses a palette file. Invalid UTF-8 is replaced rather than failing the whole
/// file, so only the lines containing it are rejected.
pub fn read_palette_file(path: &Path) -> Result<ParsedPalette, PaletteFileError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PaletteFileError::NotFound(path.to_path_buf()),
        _ => PaletteFileError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(parse_palette(&String::from_utf8_lossy(&bytes)))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bevy::color::Srgba;

    use super::*;

    #[test]
    fn comments_blanks_and_bad_lengths() {
        let parsed = parse_palette(";comment\n\n80FFFFFF\nBADLEN\n");

        assert_eq!(
            parsed.colors,
            vec![PaletteColor(Srgba::new(1.0, 1.0, 1.0, 128.0 / 255.0))]
        );
        assert_eq!(
            parsed.rejected,
            vec![RejectedLine {
                line_number: 4,
                text: "BADLEN".to_string(),
                error: ColorTokenError::Length(6),
            }]
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        let parsed = parse_palette("   \t\n  ; indented comment\n\tFF000000  \r\n");
        assert_eq!(parsed.colors.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn keeps_order_of_valid_lines() {
        let text = "\
; test palette
FFFF0000

not-a-color
FF00FF00
FF00FF0Z
;FF0000FF
FF0000FF
";
        let parsed = parse_palette(text);

        let labels: Vec<_> = parsed.colors.iter().map(PaletteColor::label).collect();
        assert_eq!(labels, ["FF0000FF", "00FF00FF", "0000FFFF"]);

        let rejected: Vec<_> = parsed.rejected.iter().map(|r| r.line_number).collect();
        assert_eq!(rejected, [4, 6]);
    }

    #[test]
    fn bom_is_ignored() {
        let parsed = parse_palette("\u{FEFF}FF00FF00\n");
        assert_eq!(parsed.colors, vec![PaletteColor::from_argb_u8(0xff, 0, 0xff, 0)]);
        assert!(parsed.rejected.is_empty());

        let parsed = parse_palette("\u{FEFF};comment\nFF00FF00\n");
        assert_eq!(parsed.colors.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn empty_text() {
        let parsed = parse_palette("");
        assert!(parsed.colors.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "; two colors").unwrap();
        writeln!(file, "FFFFFFFF").unwrap();
        writeln!(file, "00000000").unwrap();

        let parsed = read_palette_file(file.path()).unwrap();
        assert_eq!(parsed.colors.len(), 2);
    }

    #[test]
    fn invalid_utf8_only_affects_its_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"; caf\xe9\nFF00FF00\nFF00FF0\xe9\nFF0000FF\n")
            .unwrap();

        let parsed = read_palette_file(file.path()).unwrap();
        let labels: Vec<_> = parsed.colors.iter().map(PaletteColor::label).collect();
        assert_eq!(labels, ["00FF00FF", "0000FFFF"]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 3);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_palette_file(&path).unwrap_err();
        assert!(matches!(err, PaletteFileError::NotFound(p) if p == path));
    }
}
