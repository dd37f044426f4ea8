//! Cell comments (notes)
//!
//! ```rust
//! use styleframe_core::CellComment;
//!
//! let comment = CellComment::new("Reviewer", "Check the totals");
//! assert_eq!(comment.to_string(), "[Reviewer]: Check the totals");
//! ```

use std::fmt;

/// A note attached to a cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellComment {
    /// Author of the comment
    pub author: String,
    /// Comment text content
    pub text: String,
    /// Whether the comment box is visible by default
    pub visible: bool,
}

impl CellComment {
    /// Create a new comment with the given author and text
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
            visible: false,
        }
    }

    /// Check if this comment has an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

impl fmt::Display for CellComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_author() {
            write!(f, "[{}]: {}", self.author, self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}
