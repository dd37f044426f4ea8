//! Color scale conditional formatting
//!
//! [`ColorScaleConditionalFormatRule`] collects two or three color stops and
//! resolves them into a native [`ConditionalFormatRule`]. Threshold types are
//! forwarded as given; the native model decides which ones exist.
//!
//! ```rust
//! use styleframe::{ColorScaleConditionalFormatRule, ColorStop};
//!
//! let rule = ColorScaleConditionalFormatRule::new(
//!     ColorStop::new("num", Some(0.0), "red"),
//!     ColorStop::new("num", Some(100.0), "#00FF00"),
//! )
//! .with_mid(Some("percentile"), Some(50.0), Some("yellow"));
//!
//! assert!(rule.is_three_color());
//! assert_eq!(rule.rule().unwrap().stop_count(), 3);
//! ```

use crate::error::{Error, Result};
use crate::utils;
use styleframe_core::{CfColorValue, CfValueType, Color, ColumnRange, ConditionalFormatRule};

/// One anchor point of a color scale
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    /// Threshold type (`"num"`, `"percent"`, `"percentile"`, `"min"`, ...)
    pub value_type: String,
    /// Threshold value; `min` and `max` stops usually leave it unset
    pub value: Option<f64>,
    /// Hex color (`#` optional) or palette name
    pub color: String,
}

impl ColorStop {
    /// Create a stop
    pub fn new(
        value_type: impl Into<String>,
        value: Option<f64>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            value_type: value_type.into(),
            value,
            color: color.into(),
        }
    }

    fn resolve(&self, position: &'static str) -> Result<CfColorValue> {
        let value_type = CfValueType::from_xlsx(&self.value_type)
            .ok_or_else(|| Error::invalid_value(position, &self.value_type))?;
        Ok(CfColorValue::new(
            value_type,
            self.value.map(|v| v.to_string()),
            stop_color(position, &self.color)?,
        ))
    }
}

/// A two or three stop color scale, optionally bound to a column range
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScaleConditionalFormatRule {
    columns: Option<ColumnRange>,
    start: ColorStop,
    mid: Option<ColorStop>,
    end: ColorStop,
}

impl ColorScaleConditionalFormatRule {
    /// Create a two stop scale
    pub fn new(start: ColorStop, end: ColorStop) -> Self {
        Self {
            columns: None,
            start,
            mid: None,
            end,
        }
    }

    /// Set or clear the middle stop
    ///
    /// The scale has a middle stop only when type, value and color are all
    /// present; a value of `0.0` counts as present. Any missing part leaves
    /// a two stop scale, dropping a middle stop set earlier.
    pub fn with_mid(
        mut self,
        mid_type: Option<&str>,
        mid_value: Option<f64>,
        mid_color: Option<&str>,
    ) -> Self {
        self.mid = match (mid_type, mid_value, mid_color) {
            (Some(value_type), Some(value), Some(color)) => {
                Some(ColorStop::new(value_type, Some(value), color))
            }
            _ => None,
        };
        self
    }

    /// Restrict the rule to a column range
    pub fn with_columns(mut self, columns: ColumnRange) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Restrict the rule to columns given as `"B"` or `"B:D"`
    pub fn with_columns_str(self, columns: &str) -> Result<Self> {
        Ok(self.with_columns(ColumnRange::parse(columns)?))
    }

    /// Target columns; `None` means wherever the caller attaches the rule
    pub fn columns(&self) -> Option<&ColumnRange> {
        self.columns.as_ref()
    }

    /// Check if the scale has a middle stop
    pub fn is_three_color(&self) -> bool {
        self.mid.is_some()
    }

    /// The stops in order: start, optional middle, end
    pub fn stops(&self) -> Vec<&ColorStop> {
        std::iter::once(&self.start)
            .chain(self.mid.as_ref())
            .chain(std::iter::once(&self.end))
            .collect()
    }

    /// Build the native rule
    ///
    /// Unknown threshold types and unparseable colors are reported here.
    pub fn rule(&self) -> Result<ConditionalFormatRule> {
        let mut colors = vec![self.start.resolve("start")?];
        if let Some(mid) = &self.mid {
            colors.push(mid.resolve("mid")?);
        }
        colors.push(self.end.resolve("end")?);

        let rule = ConditionalFormatRule::color_scale(colors);
        Ok(match self.columns {
            Some(columns) => rule.with_range(columns),
            None => rule,
        })
    }
}

fn stop_color(position: &'static str, color: &str) -> Result<Color> {
    let hex = if utils::is_hex_color_string(color) {
        color
    } else {
        utils::colors::get(color).ok_or_else(|| Error::invalid_value(position, color))?
    };
    Color::from_hex(hex).ok_or_else(|| Error::invalid_value(position, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use styleframe_core::CfRuleType;

    fn two_stop() -> ColorScaleConditionalFormatRule {
        ColorScaleConditionalFormatRule::new(
            ColorStop::new("min", None, "FF0000"),
            ColorStop::new("max", None, "#0000ff"),
        )
    }

    #[test]
    fn test_two_stop_rule() {
        let rule = two_stop().rule().unwrap();
        let CfRuleType::ColorScale { colors } = &rule.rule_type;

        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].value_type, CfValueType::Min);
        assert_eq!(colors[0].value, None);
        assert_eq!(colors[1].color, Color::rgb(0, 0, 255));
        assert!(rule.ranges.is_empty());
    }

    #[test]
    fn test_zero_mid_value_is_present() {
        let rule = two_stop().with_mid(Some("num"), Some(0.0), Some("00FF00"));
        assert!(rule.is_three_color());

        let native = rule.rule().unwrap();
        let CfRuleType::ColorScale { colors } = &native.rule_type;
        assert_eq!(colors[1].value_type, CfValueType::Num);
        assert_eq!(colors[1].value.as_deref(), Some("0"));
        assert_eq!(colors[1].color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_partial_mid_selects_two_stops() {
        let rule = two_stop().with_mid(None, Some(0.0), Some("00FF00"));
        assert!(!rule.is_three_color());
        assert_eq!(rule.rule().unwrap().stop_count(), 2);

        let rule = two_stop().with_mid(Some("num"), None, Some("00FF00"));
        assert!(!rule.is_three_color());

        let rule = two_stop().with_mid(Some("num"), Some(5.0), None);
        assert_eq!(rule.stops().len(), 2);
    }

    #[test]
    fn test_incomplete_mid_drops_earlier_mid() {
        let rule = two_stop().with_mid(Some("percentile"), Some(50.0), Some("yellow"));
        assert!(rule.is_three_color());

        let rule = rule.with_mid(Some("percentile"), None, Some("yellow"));
        assert!(!rule.is_three_color());
        assert_eq!(rule.rule().unwrap().stop_count(), 2);
    }

    #[test]
    fn test_columns() {
        let columns = ColumnRange::parse("B:C").unwrap();
        let rule = two_stop().with_columns(columns);

        assert_eq!(rule.columns(), Some(&columns));
        assert_eq!(rule.rule().unwrap().ranges, vec![columns]);
        assert_eq!(two_stop().columns(), None);

        let rule = two_stop().with_columns_str("D").unwrap();
        assert_eq!(rule.columns(), Some(&ColumnRange::single(3)));
        assert!(matches!(
            two_stop().with_columns_str("1:2"),
            Err(Error::Core(_))
        ));
    }

    #[test]
    fn test_invalid_inputs_fail_on_build() {
        let rule = ColorScaleConditionalFormatRule::new(
            ColorStop::new("median", Some(1.0), "FF0000"),
            ColorStop::new("max", None, "0000FF"),
        );
        assert!(matches!(
            rule.rule(),
            Err(Error::InvalidValue {
                attribute: "start",
                ..
            })
        ));

        let rule = ColorScaleConditionalFormatRule::new(
            ColorStop::new("min", None, "FF0000"),
            ColorStop::new("max", None, "chartreuse"),
        );
        assert!(matches!(
            rule.rule(),
            Err(Error::InvalidValue { attribute: "end", .. })
        ));
    }
}
