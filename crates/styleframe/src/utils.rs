//! Shared vocabulary: the color palette, hex validation and the attribute
//! values [`Styler`](crate::Styler) understands out of the box.
//!
//! Vocabulary constants are plain strings. The native style model decides
//! what is valid, so values outside these lists are accepted here and only
//! rejected when a style is rendered.

use lazy_regex::regex_is_match;

/// Named colors, as six digit RGB hex strings
pub mod colors {
    pub const WHITE: &str = "FFFFFF";
    pub const BLUE: &str = "0000FF";
    pub const DARK_BLUE: &str = "00008B";
    pub const YELLOW: &str = "FFFF00";
    pub const DARK_YELLOW: &str = "B9A20E";
    pub const GREEN: &str = "00FF00";
    pub const DARK_GREEN: &str = "006400";
    pub const BLACK: &str = "000000";
    pub const RED: &str = "FF0000";
    pub const DARK_RED: &str = "8B0000";
    pub const PURPLE: &str = "800080";
    pub const GREY: &str = "D3D3D3";

    const PALETTE: &[(&str, &str)] = &[
        ("white", WHITE),
        ("blue", BLUE),
        ("dark_blue", DARK_BLUE),
        ("yellow", YELLOW),
        ("dark_yellow", DARK_YELLOW),
        ("green", GREEN),
        ("dark_green", DARK_GREEN),
        ("black", BLACK),
        ("red", RED),
        ("dark_red", DARK_RED),
        ("purple", PURPLE),
        ("grey", GREY),
    ];

    /// Look up a palette color by name
    pub fn get(name: &str) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, hex)| *hex)
    }
}

/// Common font families
pub mod fonts {
    pub const ARIAL: &str = "Arial";
    pub const AEGEAN: &str = "Aegean";
    pub const CALIBRI: &str = "Calibri";
    pub const COURIER_NEW: &str = "Courier New";
    pub const GEORGIA: &str = "Georgia";
    pub const HELVETICA: &str = "Helvetica";
    pub const TAHOMA: &str = "Tahoma";
    pub const TIMES_NEW_ROMAN: &str = "Times New Roman";
    pub const VERDANA: &str = "Verdana";
}

/// Common number format strings
pub mod number_formats {
    pub const GENERAL: &str = "General";
    pub const GENERAL_INTEGER: &str = "0";
    pub const GENERAL_FLOAT: &str = "0.00";
    pub const PERCENT: &str = "0.00%";
    pub const THOUSANDS_COMMA_SEP: &str = "#,##0";
    pub const DATE: &str = "DD/MM/YY";
    pub const TIME_24_HOURS: &str = "HH:MM";
    pub const TIME_12_HOURS: &str = "h:MM AM/PM";
    pub const DATE_TIME: &str = "DD/MM/YY HH:MM";
    pub const DATE_TIME_WITH_SECONDS: &str = "DD/MM/YY HH:MM:SS";

    /// Fixed point format with the given number of decimal digits
    pub fn decimal_with_digits(digits: usize) -> String {
        if digits == 0 {
            GENERAL_INTEGER.to_string()
        } else {
            format!("0.{}", "0".repeat(digits))
        }
    }
}

/// Border line styles
pub mod borders {
    pub const NONE: &str = "none";
    pub const THIN: &str = "thin";
    pub const MEDIUM: &str = "medium";
    pub const THICK: &str = "thick";
    pub const DASHED: &str = "dashed";
    pub const DOTTED: &str = "dotted";
    pub const DOUBLE: &str = "double";
    pub const HAIR: &str = "hair";
    pub const MEDIUM_DASHED: &str = "mediumDashed";
    pub const DASH_DOT: &str = "dashDot";
    pub const MEDIUM_DASH_DOT: &str = "mediumDashDot";
    pub const DASH_DOT_DOT: &str = "dashDotDot";
    pub const MEDIUM_DASH_DOT_DOT: &str = "mediumDashDotDot";
    pub const SLANT_DASH_DOT: &str = "slantDashDot";
}

pub mod horizontal_alignments {
    pub const GENERAL: &str = "general";
    pub const LEFT: &str = "left";
    pub const CENTER: &str = "center";
    pub const RIGHT: &str = "right";
    pub const FILL: &str = "fill";
    pub const JUSTIFY: &str = "justify";
    pub const CENTER_CONTINUOUS: &str = "centerContinuous";
    pub const DISTRIBUTED: &str = "distributed";
}

pub mod vertical_alignments {
    pub const TOP: &str = "top";
    pub const CENTER: &str = "center";
    pub const BOTTOM: &str = "bottom";
    pub const JUSTIFY: &str = "justify";
    pub const DISTRIBUTED: &str = "distributed";
}

pub mod underline {
    pub const SINGLE: &str = "single";
    pub const DOUBLE: &str = "double";
    pub const SINGLE_ACCOUNTING: &str = "singleAccounting";
    pub const DOUBLE_ACCOUNTING: &str = "doubleAccounting";
}

pub mod fill_pattern_types {
    pub const NONE: &str = "none";
    pub const SOLID: &str = "solid";
    pub const DARK_GRAY: &str = "darkGray";
    pub const MEDIUM_GRAY: &str = "mediumGray";
    pub const LIGHT_GRAY: &str = "lightGray";
    pub const GRAY125: &str = "gray125";
    pub const GRAY0625: &str = "gray0625";
    pub const DARK_GRID: &str = "darkGrid";
    pub const LIGHT_GRID: &str = "lightGrid";
    pub const DARK_TRELLIS: &str = "darkTrellis";
    pub const LIGHT_TRELLIS: &str = "lightTrellis";
    pub const DARK_HORIZONTAL: &str = "darkHorizontal";
    pub const LIGHT_HORIZONTAL: &str = "lightHorizontal";
    pub const DARK_VERTICAL: &str = "darkVertical";
    pub const LIGHT_VERTICAL: &str = "lightVertical";
    pub const DARK_DOWN: &str = "darkDown";
    pub const LIGHT_DOWN: &str = "lightDown";
    pub const DARK_UP: &str = "darkUp";
    pub const LIGHT_UP: &str = "lightUp";
}

/// Check for an RGB (6 digit) or ARGB (8 digit) hex string, `#` optional
pub fn is_hex_color_string(s: &str) -> bool {
    regex_is_match!(r"^#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$", s)
}

/// Resolve a user supplied color into a six digit upper-case hex string
///
/// Hex strings lose their `#` and alpha channel; palette names map to their
/// hex value. Anything else, including no color at all, resolves to
/// `default`.
pub fn resolve_color(color: Option<&str>, default: &str) -> String {
    let Some(color) = color else {
        return default.to_string();
    };
    if is_hex_color_string(color) {
        let hex = color.trim_start_matches('#');
        return hex[hex.len() - 6..].to_ascii_uppercase();
    }
    match colors::get(color) {
        Some(hex) => hex.to_string(),
        None => {
            tracing::debug!(color, default, "unknown color name, using default");
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color_string() {
        assert!(is_hex_color_string("FF0000"));
        assert!(is_hex_color_string("#ff0000"));
        assert!(is_hex_color_string("80FF0000"));
        assert!(!is_hex_color_string("FF00"));
        assert!(!is_hex_color_string("red"));
        assert!(!is_hex_color_string("##FF0000"));
        assert!(!is_hex_color_string(""));
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color(Some("#ff0000"), colors::WHITE), "FF0000");
        assert_eq!(resolve_color(Some("80102030"), colors::WHITE), "102030");
        assert_eq!(resolve_color(Some("dark_blue"), colors::WHITE), "00008B");
        assert_eq!(resolve_color(Some("nope"), colors::BLACK), "000000");
        assert_eq!(resolve_color(None, colors::WHITE), "FFFFFF");
    }

    #[test]
    fn test_decimal_with_digits() {
        assert_eq!(number_formats::decimal_with_digits(0), "0");
        assert_eq!(number_formats::decimal_with_digits(3), "0.000");
    }
}
