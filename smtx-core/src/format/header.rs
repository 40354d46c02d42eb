//! Dimension header for matrix documents

use alloc::string::ToString;

use super::constants::{COLS_PREFIX, ROWS_PREFIX};
use crate::error::{FormatError, FormatResult};

/// Declared dimensions parsed from the two leading lines of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHeader {
    /// Declared number of rows
    pub rows: usize,
    /// Declared number of columns
    pub cols: usize,
}

impl TextHeader {
    /// Create a header with the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the two dimension lines of a document
    ///
    /// Each line is trimmed of surrounding whitespace, must carry its
    /// prefix (`rows=` then `cols=`), and the remainder must be digits
    /// only. A mismatch reports the offending line's text.
    pub fn parse(rows_line: &str, cols_line: &str) -> FormatResult<Self> {
        let rows = parse_dimension(rows_line, ROWS_PREFIX)?;
        let cols = parse_dimension(cols_line, COLS_PREFIX)?;
        Ok(Self { rows, cols })
    }
}

impl core::fmt::Display for TextHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "rows={}\ncols={}", self.rows, self.cols)
    }
}

fn parse_dimension(line: &str, prefix: &str) -> FormatResult<usize> {
    let invalid = || FormatError::InvalidDimensionLine {
        line: line.to_string(),
    };

    let digits = line.trim().strip_prefix(prefix).ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }
    // The digit check already constrains the input; the parse can still
    // reject values that overflow usize.
    digits.parse::<usize>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        assert_eq!(
            TextHeader::parse("rows=3", "cols=4"),
            Ok(TextHeader::new(3, 4))
        );
        assert_eq!(
            TextHeader::parse("  rows=0  ", "\tcols=0"),
            Ok(TextHeader::new(0, 0))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_prefix() {
        assert_eq!(
            TextHeader::parse("cols=3", "cols=4"),
            Err(FormatError::InvalidDimensionLine {
                line: "cols=3".to_string(),
            })
        );
        assert_eq!(
            TextHeader::parse("rows=3", "rows=4"),
            Err(FormatError::InvalidDimensionLine {
                line: "rows=4".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for line in ["rows=", "rows=-1", "rows=+2", "rows=3x", "rows= 3", "3"] {
            assert_eq!(
                TextHeader::parse(line, "cols=1"),
                Err(FormatError::InvalidDimensionLine {
                    line: line.to_string(),
                }),
                "line {line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let line = "rows=99999999999999999999999999999999";
        assert_eq!(
            TextHeader::parse(line, "cols=1"),
            Err(FormatError::InvalidDimensionLine {
                line: line.to_string(),
            })
        );
    }

    #[test]
    fn test_display_round_trips() {
        let header = TextHeader::new(7, 12);
        let rendered = header.to_string();
        let mut lines = rendered.lines();
        assert_eq!(
            TextHeader::parse(lines.next().unwrap(), lines.next().unwrap()),
            Ok(header)
        );
    }
}
