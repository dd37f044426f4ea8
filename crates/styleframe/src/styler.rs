//! The [`Styler`] style descriptor
//!
//! A `Styler` is an immutable description of how a cell should look. It is
//! compared, hashed and serialized by value, composed with [`Styler::merge`],
//! and rendered into a shared native [`NamedStyle`] whose name is the
//! styler's canonical key.
//!
//! ```rust
//! use styleframe::{utils, Styler};
//!
//! let base = Styler::new().with_bg_color("yellow");
//! let header = base.merge(&Styler::default_header_style());
//!
//! assert!(header.bold());
//! assert_eq!(header.bg_color(), utils::colors::YELLOW);
//! ```

use crate::cache::StyleCache;
use crate::error::{Error, Result};
use crate::utils::{
    self, borders, colors, fill_pattern_types, fonts, horizontal_alignments, number_formats,
    resolve_color, vertical_alignments,
};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;
use styleframe_core::{
    Alignment, BorderLineStyle, BorderStyle, CellComment, Color, FillStyle, FontStyle,
    HorizontalAlignment, NamedStyle, NumberFormat, PatternType, Protection, Style, Underline,
    VerticalAlignment,
};

/// Font size in points, compared and hashed by bit pattern
///
/// Every NaN is stored as [`f64::NAN`]. Finite sizes serialize as JSON
/// numbers; non-finite ones as the strings `"NaN"`, `"inf"` and `"-inf"`,
/// which JSON numbers cannot express.
#[derive(Debug, Clone, Copy)]
pub struct FontSize(f64);

impl FontSize {
    pub fn new(size: f64) -> Self {
        if size.is_nan() {
            FontSize(f64::NAN)
        } else {
            FontSize(size)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for FontSize {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FontSize {}

impl Hash for FontSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let size = self.0;
        if size.is_finite() {
            serializer.serialize_f64(size)
        } else if size.is_nan() {
            serializer.serialize_str("NaN")
        } else if size > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct FontSizeVisitor;

        impl<'de> Visitor<'de> for FontSizeVisitor {
            type Value = FontSize;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<FontSize, E> {
                Ok(FontSize::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<FontSize, E> {
                Ok(FontSize::new(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<FontSize, E> {
                Ok(FontSize::new(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<FontSize, E> {
                match v {
                    "NaN" => Ok(FontSize::new(f64::NAN)),
                    "inf" => Ok(FontSize::new(f64::INFINITY)),
                    "-inf" => Ok(FontSize::new(f64::NEG_INFINITY)),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(FontSizeVisitor)
    }
}

// Declares the attribute schema once. The struct, its defaults and the
// merge rule all come from this list; equality, hashing and the canonical
// key are derived from the struct.
macro_rules! styler_attributes {
    ($( $(#[$meta:meta])* $field:ident: $ty:ty = $default:expr ),* $(,)?) => {
        /// Cell style descriptor
        ///
        /// Attributes are private and set only through the `with_*`
        /// builders; every operation returns a new value.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Styler {
            $( $(#[$meta])* $field: $ty, )*
        }

        impl Default for Styler {
            fn default() -> Self {
                Self { $( $field: $default, )* }
            }
        }

        impl Styler {
            /// Combine two stylers, `other` winning wherever it differs
            /// from a default styler
            ///
            /// Attributes `other` leaves at their default never overwrite
            /// `self`. An attribute explicitly set to its default value is
            /// indistinguishable from one left untouched.
            pub fn merge(&self, other: &Styler) -> Styler {
                let default = Styler::default();
                Styler {
                    $(
                        $field: if other.$field != default.$field {
                            other.$field.clone()
                        } else {
                            self.$field.clone()
                        },
                    )*
                }
            }
        }
    };
}

styler_attributes! {
    /// Background color, six digit hex
    bg_color: String = colors::WHITE.to_string(),
    bold: bool = false,
    /// Font family
    font: String = fonts::ARIAL.to_string(),
    font_size: FontSize = FontSize::new(12.0),
    /// Font color, six digit hex
    font_color: String = colors::BLACK.to_string(),
    number_format: String = number_formats::GENERAL.to_string(),
    /// Whether the cell is locked
    protection: bool = false,
    underline: Option<String> = None,
    border_type: String = borders::THIN.to_string(),
    horizontal_alignment: String = horizontal_alignments::CENTER.to_string(),
    vertical_alignment: String = vertical_alignments::CENTER.to_string(),
    wrap_text: bool = true,
    shrink_to_fit: bool = true,
    fill_pattern_type: String = fill_pattern_types::SOLID.to_string(),
    indent: u32 = 0,
    comment_author: Option<String> = None,
    comment_text: Option<String> = None,
}

impl Styler {
    /// Create a styler with every attribute at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Default header style: bold, otherwise default
    pub fn default_header_style() -> Self {
        Self::new().with_bold(true)
    }

    /// Left fold of [`merge`](Self::merge) starting from a default styler
    pub fn combine<'a, I>(stylers: I) -> Styler
    where
        I: IntoIterator<Item = &'a Styler>,
    {
        stylers
            .into_iter()
            .fold(Styler::default(), |acc, styler| acc.merge(styler))
    }

    /// Set the background color
    ///
    /// Accepts hex (`#` optional) or a palette name; anything else falls
    /// back to white.
    pub fn with_bg_color(mut self, color: &str) -> Self {
        self.bg_color = resolve_color(Some(color), colors::WHITE);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = FontSize::new(size);
        self
    }

    /// Set the font color
    ///
    /// Accepts hex (`#` optional) or a palette name; anything else falls
    /// back to black.
    pub fn with_font_color(mut self, color: &str) -> Self {
        self.font_color = resolve_color(Some(color), colors::BLACK);
        self
    }

    pub fn with_number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = format.into();
        self
    }

    pub fn with_protection(mut self, locked: bool) -> Self {
        self.protection = locked;
        self
    }

    pub fn with_underline(mut self, underline: impl Into<String>) -> Self {
        self.underline = Some(underline.into());
        self
    }

    pub fn with_border_type(mut self, border_type: impl Into<String>) -> Self {
        self.border_type = border_type.into();
        self
    }

    pub fn with_horizontal_alignment(mut self, align: impl Into<String>) -> Self {
        self.horizontal_alignment = align.into();
        self
    }

    pub fn with_vertical_alignment(mut self, align: impl Into<String>) -> Self {
        self.vertical_alignment = align.into();
        self
    }

    pub fn with_wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    pub fn with_shrink_to_fit(mut self, shrink: bool) -> Self {
        self.shrink_to_fit = shrink;
        self
    }

    pub fn with_fill_pattern_type(mut self, pattern: impl Into<String>) -> Self {
        self.fill_pattern_type = pattern.into();
        self
    }

    pub fn with_indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_comment_author(mut self, author: impl Into<String>) -> Self {
        self.comment_author = Some(author.into());
        self
    }

    pub fn with_comment_text(mut self, text: impl Into<String>) -> Self {
        self.comment_text = Some(text.into());
        self
    }

    pub fn bg_color(&self) -> &str {
        &self.bg_color
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    pub fn font_size(&self) -> f64 {
        self.font_size.get()
    }

    pub fn font_color(&self) -> &str {
        &self.font_color
    }

    pub fn number_format(&self) -> &str {
        &self.number_format
    }

    pub fn protection(&self) -> bool {
        self.protection
    }

    pub fn underline(&self) -> Option<&str> {
        self.underline.as_deref()
    }

    pub fn border_type(&self) -> &str {
        &self.border_type
    }

    pub fn horizontal_alignment(&self) -> &str {
        &self.horizontal_alignment
    }

    pub fn vertical_alignment(&self) -> &str {
        &self.vertical_alignment
    }

    pub fn wrap_text(&self) -> bool {
        self.wrap_text
    }

    pub fn shrink_to_fit(&self) -> bool {
        self.shrink_to_fit
    }

    pub fn fill_pattern_type(&self) -> &str {
        &self.fill_pattern_type
    }

    pub fn indent(&self) -> u32 {
        self.indent
    }

    pub fn comment_author(&self) -> Option<&str> {
        self.comment_author.as_deref()
    }

    pub fn comment_text(&self) -> Option<&str> {
        self.comment_text.as_deref()
    }

    /// Build the cell comment this styler carries, if any
    ///
    /// Empty strings count as unset.
    pub fn generate_comment(&self) -> Option<CellComment> {
        let author = self.comment_author().filter(|s| !s.is_empty());
        let text = self.comment_text().filter(|s| !s.is_empty());
        if author.is_none() && text.is_none() {
            return None;
        }
        Some(CellComment::new(
            author.unwrap_or_default(),
            text.unwrap_or_default(),
        ))
    }

    /// Deterministic textual form of every attribute
    ///
    /// Used as the native style name and cache key. Equal stylers produce
    /// equal keys and any attribute change produces a different key.
    pub fn canonical_key(&self) -> String {
        match serde_json::to_string(self) {
            Ok(key) => key,
            // Only strings, bools, integers, finite floats and options of
            // those reach the serializer, none of which can fail.
            Err(err) => unreachable!("styler attributes always serialize: {err}"),
        }
    }

    /// Render into the process-wide cache
    ///
    /// Equal stylers receive the same [`Arc`]. Attribute values the native
    /// model does not recognize are reported here, not at construction.
    pub fn to_native_style(&self) -> Result<Arc<NamedStyle>> {
        self.to_native_style_in(StyleCache::global())
    }

    /// Render into an explicit cache scope
    pub fn to_native_style_in(&self, cache: &StyleCache) -> Result<Arc<NamedStyle>> {
        let key = self.canonical_key();
        cache.get_or_try_insert_with(&key, || self.build_native(&key))
    }

    fn build_native(&self, name: &str) -> Result<NamedStyle> {
        let underline = match self.underline() {
            None => Underline::None,
            Some(value) => Underline::from_name(value)
                .ok_or_else(|| Error::invalid_value("underline", value))?,
        };
        let font = FontStyle::new()
            .with_name(self.font.clone())
            .with_size(self.font_size.get())
            .with_bold(self.bold)
            .with_underline(underline)
            .with_color(hex_color("font_color", &self.font_color)?);

        let pattern = PatternType::from_name(&self.fill_pattern_type)
            .ok_or_else(|| Error::invalid_value("fill_pattern_type", &self.fill_pattern_type))?;
        let fill = FillStyle::from_pattern(pattern, hex_color("bg_color", &self.bg_color)?);

        let border_style = BorderLineStyle::from_name(&self.border_type)
            .ok_or_else(|| Error::invalid_value("border_type", &self.border_type))?;

        let horizontal = HorizontalAlignment::from_name(&self.horizontal_alignment).ok_or_else(
            || Error::invalid_value("horizontal_alignment", &self.horizontal_alignment),
        )?;
        let vertical = VerticalAlignment::from_name(&self.vertical_alignment)
            .ok_or_else(|| Error::invalid_value("vertical_alignment", &self.vertical_alignment))?;
        let indent = u8::try_from(self.indent)
            .map_err(|_| Error::invalid_value("indent", self.indent.to_string()))?;

        let style = Style {
            font,
            fill,
            border: BorderStyle::all(border_style, Color::BLACK),
            alignment: Alignment::new()
                .with_horizontal(horizontal)
                .with_vertical(vertical)
                .with_wrap(self.wrap_text)
                .with_shrink_to_fit(self.shrink_to_fit)
                .with_indent(indent),
            number_format: NumberFormat::from_string(self.number_format.clone()),
            protection: Protection::locked(self.protection),
        };

        Ok(NamedStyle::new(name, style))
    }

    /// Rebuild a styler from a native style rendered by
    /// [`to_native_style`](Self::to_native_style)
    ///
    /// Theme colors, on the style itself or in its name, are rejected with
    /// [`Error::ThemeColorUnsupported`]. A supplied comment takes precedence
    /// over the comment recorded in the style name.
    pub fn from_native_style(
        native: &NamedStyle,
        theme_colors: &[Color],
        comment: Option<&CellComment>,
    ) -> Result<Styler> {
        if native.style.fill.foreground().is_some_and(|c| c.is_theme()) {
            return Err(theme_color_unsupported("bg_color", theme_colors));
        }
        if native.style.font.color.is_theme() {
            return Err(theme_color_unsupported("font_color", theme_colors));
        }
        Self::from_style_name(&native.name, theme_colors, comment)
    }

    /// Rebuild a styler from a native style name (a canonical key)
    pub fn from_style_name(
        name: &str,
        theme_colors: &[Color],
        comment: Option<&CellComment>,
    ) -> Result<Styler> {
        let attributes: serde_json::Value = serde_json::from_str(name)?;
        for attribute in ["bg_color", "font_color"] {
            if attributes.get(attribute).is_some_and(|v| !v.is_string()) {
                return Err(theme_color_unsupported(attribute, theme_colors));
            }
        }

        let mut styler: Styler = serde_json::from_value(attributes)?;
        styler.bg_color = resolve_color(Some(styler.bg_color.as_str()), colors::WHITE);
        styler.font_color = resolve_color(Some(styler.font_color.as_str()), colors::BLACK);

        if let Some(comment) = comment {
            styler.comment_author = Some(comment.author.clone()).filter(|s| !s.is_empty());
            styler.comment_text = Some(comment.text.clone()).filter(|s| !s.is_empty());
        }
        Ok(styler)
    }
}

fn hex_color(attribute: &'static str, hex: &str) -> Result<Color> {
    if !utils::is_hex_color_string(hex) {
        return Err(Error::invalid_value(attribute, hex));
    }
    Color::from_hex(hex).ok_or_else(|| Error::invalid_value(attribute, hex))
}

fn theme_color_unsupported(attribute: &'static str, theme_colors: &[Color]) -> Error {
    // TODO: resolve theme index + tint against `theme_colors` once the
    // luminance adjustment is verified against Excel output.
    tracing::debug!(
        attribute,
        palette = theme_colors.len(),
        "theme color in native style, resolution disabled"
    );
    Error::ThemeColorUnsupported { attribute }
}

impl fmt::Display for Styler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_key())
    }
}

impl FromStr for Styler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_style_name(s, &[], None)
    }
}
