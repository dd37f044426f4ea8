//! Conditional formatting
//!
//! Only color scale rules are modelled: a gradient anchored at two or three
//! thresholds, each with its own color.
//!
//! ## Example
//!
//! ```rust
//! use styleframe_core::{CfColorValue, CfValueType, Color, ColumnRange, ConditionalFormatRule};
//!
//! let rule = ConditionalFormatRule::color_scale(vec![
//!     CfColorValue::new(CfValueType::Min, None, Color::rgb(255, 0, 0)),
//!     CfColorValue::new(CfValueType::Percentile, Some("50".into()), Color::rgb(255, 255, 0)),
//!     CfColorValue::new(CfValueType::Max, None, Color::rgb(0, 255, 0)),
//! ])
//! .with_range(ColumnRange::parse("B:D").unwrap());
//!
//! assert_eq!(rule.stop_count(), 3);
//! ```

use crate::range::ColumnRange;
use crate::style::Color;

/// A conditional formatting rule
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormatRule {
    /// Rule type
    pub rule_type: CfRuleType,
    /// Column ranges this rule applies to; empty means wherever the
    /// caller attaches it
    pub ranges: Vec<ColumnRange>,
}

impl ConditionalFormatRule {
    /// Create a new conditional format rule
    pub fn new(rule_type: CfRuleType) -> Self {
        Self {
            rule_type,
            ranges: Vec::new(),
        }
    }

    /// Create a color scale from explicit stops
    pub fn color_scale(colors: Vec<CfColorValue>) -> Self {
        Self::new(CfRuleType::ColorScale { colors })
    }

    /// Add a column range to this rule
    pub fn with_range(mut self, range: ColumnRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Number of color stops in a color scale rule
    pub fn stop_count(&self) -> usize {
        match &self.rule_type {
            CfRuleType::ColorScale { colors } => colors.len(),
        }
    }

}

/// Types of conditional formatting rules
#[derive(Debug, Clone, PartialEq)]
pub enum CfRuleType {
    /// Color scale (2 or 3 color gradient)
    ColorScale { colors: Vec<CfColorValue> },
}

/// Color with value threshold for color scales
#[derive(Debug, Clone, PartialEq)]
pub struct CfColorValue {
    /// How to interpret the value
    pub value_type: CfValueType,
    /// The value (if applicable)
    pub value: Option<String>,
    /// Color at this threshold
    pub color: Color,
}

impl CfColorValue {
    /// Create a new color value
    pub fn new(value_type: CfValueType, value: Option<String>, color: Color) -> Self {
        Self {
            value_type,
            value,
            color,
        }
    }
}

/// Value types for conditional format thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfValueType {
    /// Minimum value in range
    #[default]
    Min,
    /// Maximum value in range
    Max,
    /// Specific number
    Num,
    /// Percentage (0-100)
    Percent,
    /// Percentile (0-100)
    Percentile,
    /// Formula result
    Formula,
}

impl CfValueType {
    /// Parse from XLSX type string
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "min" => Some(CfValueType::Min),
            "max" => Some(CfValueType::Max),
            "num" => Some(CfValueType::Num),
            "percent" => Some(CfValueType::Percent),
            "percentile" => Some(CfValueType::Percentile),
            "formula" => Some(CfValueType::Formula),
            _ => None,
        }
    }
}
