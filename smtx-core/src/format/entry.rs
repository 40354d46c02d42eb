//! Element line grammar: `(<row>, <col>, <value>)`

use alloc::string::ToString;

use crate::error::{FormatError, FormatResult};

/// A single (row, col, value) element of a matrix document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value
    pub value: i64,
}

impl Entry {
    /// Create an entry
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }

    /// Parse one element line
    ///
    /// The line must be a parenthesized, comma-separated triple: row and
    /// col digits only, value optionally signed, whitespace around the
    /// fields allowed. `line_number` is the 1-based position in the
    /// document and is carried into the error on mismatch.
    pub fn parse_line(line_number: usize, line: &str) -> FormatResult<Self> {
        let invalid = || FormatError::InvalidElementLine {
            line_number,
            line: line.to_string(),
        };

        let inner = line
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let mut fields = inner.split(',');
        let row = parse_index(fields.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
        let col = parse_index(fields.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
        let value = parse_value(fields.next().ok_or_else(invalid)?).ok_or_else(invalid)?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { row, col, value })
    }
}

impl core::fmt::Display for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

fn parse_index(field: &str) -> Option<usize> {
    let digits = field.trim();
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()
}

fn parse_value(field: &str) -> Option<i64> {
    let token = field.trim();
    let digits = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lines() {
        assert_eq!(Entry::parse_line(3, "(1, 2, 3)"), Ok(Entry::new(1, 2, 3)));
        assert_eq!(Entry::parse_line(3, "(0,0,0)"), Ok(Entry::new(0, 0, 0)));
        assert_eq!(
            Entry::parse_line(4, "( 7 , 8 , -42 )"),
            Ok(Entry::new(7, 8, -42))
        );
        assert_eq!(
            Entry::parse_line(5, "  (5, 6, +9)  "),
            Ok(Entry::new(5, 6, 9))
        );
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        let cases = [
            "1, 2, 3",        // no parentheses
            "(1, 2, 3",       // unterminated
            "(1, 2)",         // too few fields
            "(1, 2, 3, 4)",   // too many fields
            "(1, 2, bad)",    // non-numeric value
            "(-1, 2, 3)",     // negative row
            "(1, +2, 3)",     // signed col
            "(1.5, 2, 3)",    // non-integer
            "(, 2, 3)",       // empty field
            "(1, 2, -)",      // bare sign
        ];
        for line in cases {
            assert_eq!(
                Entry::parse_line(9, line),
                Err(FormatError::InvalidElementLine {
                    line_number: 9,
                    line: line.to_string(),
                }),
                "line {line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for entry in [
            Entry::new(0, 0, 0),
            Entry::new(3, 1, -17),
            Entry::new(12, 40, 9000),
        ] {
            let rendered = entry.to_string();
            assert_eq!(Entry::parse_line(1, &rendered), Ok(entry));
        }
    }
}
