//! Styler -> native style -> Styler conversions

use pretty_assertions::assert_eq;
use std::sync::Arc;
use styleframe::utils::{borders, fill_pattern_types, horizontal_alignments, vertical_alignments};
use styleframe::{Error, StyleCache, Styler};
use styleframe_core::{
    CellComment, Color, FillStyle, HorizontalAlignment, NamedStyle, PatternType, Style,
};

fn report_style() -> Styler {
    Styler::new()
        .with_bg_color("#1F4E78")
        .with_bold(true)
        .with_font("Calibri")
        .with_font_size(10.5)
        .with_font_color("FFFFFF")
        .with_number_format("#,##0.00")
        .with_horizontal_alignment(horizontal_alignments::RIGHT)
        .with_vertical_alignment(vertical_alignments::TOP)
        .with_wrap_text(false)
        .with_shrink_to_fit(false)
        .with_indent(2)
}

#[test]
fn test_equal_stylers_share_the_global_native_style() {
    let first = report_style().with_comment_text("global-cache-identity");
    let second = report_style().with_comment_text("global-cache-identity");

    let a = first.to_native_style().unwrap();
    let b = second.to_native_style().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert!(StyleCache::global().get(&first.canonical_key()).is_some());
}

#[test]
fn test_different_stylers_get_different_native_styles() {
    let cache = StyleCache::new();
    let a = report_style().to_native_style_in(&cache).unwrap();
    let b = report_style()
        .with_bold(false)
        .to_native_style_in(&cache)
        .unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_ne!(a.name, b.name);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_roundtrip_reproduces_attributes() {
    let cache = StyleCache::new();
    let original = report_style();
    let native = original.to_native_style_in(&cache).unwrap();

    assert_eq!(native.name, original.canonical_key());
    assert_eq!(native.style.font.size, 10.5);
    assert_eq!(native.style.alignment.horizontal, HorizontalAlignment::Right);

    let back = Styler::from_native_style(&native, &[], None).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_roundtrip_with_pattern_fill_and_no_border() {
    let cache = StyleCache::new();
    let original = Styler::new()
        .with_bg_color("grey")
        .with_fill_pattern_type(fill_pattern_types::LIGHT_GRID)
        .with_border_type(borders::NONE)
        .with_underline("single");
    let native = original.to_native_style_in(&cache).unwrap();

    assert_eq!(native.style.fill.pattern_type(), PatternType::LightGrid);
    assert!(native.style.border.is_empty());
    assert_eq!(
        Styler::from_native_style(&native, &[], None).unwrap(),
        original
    );
}

#[test]
fn test_native_comment_takes_precedence() {
    let cache = StyleCache::new();
    let original = report_style()
        .with_comment_author("builder")
        .with_comment_text("from the style name");
    let native = original.to_native_style_in(&cache).unwrap();

    let from_name = Styler::from_native_style(&native, &[], None).unwrap();
    assert_eq!(from_name.comment_author(), Some("builder"));
    assert_eq!(from_name.comment_text(), Some("from the style name"));

    let comment = CellComment::new("reviewer", "from the cell");
    let from_cell = Styler::from_native_style(&native, &[], Some(&comment)).unwrap();
    assert_eq!(from_cell.comment_author(), Some("reviewer"));
    assert_eq!(from_cell.comment_text(), Some("from the cell"));
    assert_eq!(from_cell.generate_comment(), Some(comment));
}

#[test]
fn test_theme_background_is_unsupported() {
    let cache = StyleCache::new();
    let native = Styler::new().to_native_style_in(&cache).unwrap();

    let mut themed = (*native).clone();
    themed.style.fill = FillStyle::solid(Color::theme(4, 40));

    let err = Styler::from_native_style(&themed, &[Color::WHITE, Color::BLACK], None).unwrap_err();
    assert!(matches!(
        err,
        Error::ThemeColorUnsupported {
            attribute: "bg_color"
        }
    ));
}

#[test]
fn test_theme_font_color_is_unsupported() {
    let themed = NamedStyle::new(
        Styler::new().canonical_key(),
        Style::new().font_color(Color::theme(1, 0)),
    );

    let err = Styler::from_native_style(&themed, &[], None).unwrap_err();
    assert!(matches!(
        err,
        Error::ThemeColorUnsupported {
            attribute: "font_color"
        }
    ));
}

#[test]
fn test_theme_color_in_style_name_is_unsupported() {
    let themed = NamedStyle::new(r#"{"font_color":{"theme":1,"tint":-0.25}}"#, Style::new());

    let err = Styler::from_native_style(&themed, &[], None).unwrap_err();
    assert!(matches!(
        err,
        Error::ThemeColorUnsupported {
            attribute: "font_color"
        }
    ));
}

#[test]
fn test_foreign_style_name_is_rejected() {
    let foreign = NamedStyle::new("Heading 1", Style::new().bold(true));
    assert!(matches!(
        Styler::from_native_style(&foreign, &[], None),
        Err(Error::InvalidStyleName(_))
    ));
}
