//! # styleframe-core
//!
//! Spreadsheet cell style model consumed by the `styleframe` styling layer.
//!
//! This crate provides the "native" representation a renderer applies to cells:
//! - [`Style`] and [`NamedStyle`] - Cell formatting (fonts, fills, borders, etc.)
//! - [`Color`] - Automatic, RGB, ARGB and theme colors
//! - [`CellComment`] - Notes attached to cells
//! - [`ConditionalFormatRule`] - Color scale conditional formatting
//! - [`ColumnRange`] - Column spans such as `A:C`
//!
//! ## Example
//!
//! ```rust
//! use styleframe_core::{Color, NamedStyle, Style};
//!
//! let style = Style::new().bold(true).font_color(Color::rgb(255, 255, 0));
//! let named = NamedStyle::new("header", style);
//! assert!(named.style.font.bold);
//! ```

pub mod comment;
pub mod conditional_format;
pub mod error;
pub mod range;
pub mod style;

// Re-exports for convenience
pub use comment::CellComment;
pub use conditional_format::{CfColorValue, CfRuleType, CfValueType, ConditionalFormatRule};
pub use error::{Error, Result};
pub use range::ColumnRange;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NamedStyle, NumberFormat, PatternType, Protection, Style, Underline,
    VerticalAlignment,
};

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
