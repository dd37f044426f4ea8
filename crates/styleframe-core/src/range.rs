//! Column ranges
//!
//! Conditional formats built by `styleframe` target whole columns, written
//! in the usual `A:C` notation.

use crate::error::{Error, Result};
use crate::MAX_COLS;
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// An inclusive span of worksheet columns (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRange {
    /// First column
    pub first: u16,
    /// Last column
    pub last: u16,
}

impl ColumnRange {
    /// Create a range from two column indices, normalizing their order
    pub fn new(first: u16, last: u16) -> Self {
        Self {
            first: first.min(last),
            last: first.max(last),
        }
    }

    /// A range covering a single column
    pub fn single(col: u16) -> Self {
        Self::new(col, col)
    }

    /// Parse `A:C`, `a:c` or a lone column such as `B`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some((_, first, last)) = regex_captures!(r"^([A-Za-z]+):([A-Za-z]+)$", s) {
            return Ok(Self::new(
                letters_to_column(first)?,
                letters_to_column(last)?,
            ));
        }
        if let Some((_, col)) = regex_captures!(r"^([A-Za-z]+)$", s) {
            return Ok(Self::single(letters_to_column(col)?));
        }
        Err(Error::InvalidColumnRange(s.to_string()))
    }

    /// Number of columns in the range
    pub fn len(&self) -> u16 {
        self.last - self.first + 1
    }

    /// Always false; a range spans at least one column
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            column_to_letters(self.first),
            column_to_letters(self.last)
        )
    }
}

impl FromStr for ColumnRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u16) -> String {
    let mut result = String::new();
    let mut n = col as u32 + 1;

    while n > 0 {
        n -= 1;
        result.insert(0, ((n % 26) as u8 + b'A') as char);
        n /= 26;
    }

    result
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_column(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!("invalid column letter '{}'", c)));
        }
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1))
            .ok_or_else(|| Error::InvalidColumn(letters.to_string()))?;
    }

    let col = col - 1;
    if col >= MAX_COLS as u32 {
        return Err(Error::ColumnOutOfBounds(
            col.min(u16::MAX as u32) as u16,
            MAX_COLS - 1,
        ));
    }

    Ok(col as u16)
}
