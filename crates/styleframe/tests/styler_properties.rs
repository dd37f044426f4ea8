//! Equality, hashing and merge properties of `Styler`

use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use styleframe::{StyleCache, Styler};

fn hash_of(styler: &Styler) -> u64 {
    let mut hasher = DefaultHasher::new();
    styler.hash(&mut hasher);
    hasher.finish()
}

fn optional<T: std::fmt::Debug + Clone + 'static>(
    strategy: impl Strategy<Value = T> + 'static,
) -> BoxedStrategy<Option<T>> {
    prop_oneof![Just(None), strategy.prop_map(Some)].boxed()
}

prop_compose! {
    fn any_styler()(
        bg_color in optional(prop::sample::select(vec!["red", "#00FF00", "1f4e78", "FFFFFF"])),
        bold in optional(any::<bool>()),
        font_size in optional(prop::sample::select(vec![
            8.0, 12.0, 14.5, f64::INFINITY, f64::NEG_INFINITY,
        ])),
        font_color in optional(prop::sample::select(vec!["blue", "000000", "#ABCDEF"])),
        number_format in optional(prop::sample::select(vec!["General", "0.00%", "#,##0"])),
        border_type in optional(prop::sample::select(vec!["thin", "thick", "dashed"])),
        horizontal in optional(prop::sample::select(vec!["center", "left", "right"])),
        wrap_text in optional(any::<bool>()),
        indent in optional(0u32..4),
        comment_text in optional(prop::sample::select(vec!["note", "other note"])),
    ) -> Styler {
        let mut styler = Styler::new();
        if let Some(color) = bg_color { styler = styler.with_bg_color(color); }
        if let Some(bold) = bold { styler = styler.with_bold(bold); }
        if let Some(size) = font_size { styler = styler.with_font_size(size); }
        if let Some(color) = font_color { styler = styler.with_font_color(color); }
        if let Some(format) = number_format { styler = styler.with_number_format(format); }
        if let Some(border) = border_type { styler = styler.with_border_type(border); }
        if let Some(align) = horizontal { styler = styler.with_horizontal_alignment(align); }
        if let Some(wrap) = wrap_text { styler = styler.with_wrap_text(wrap); }
        if let Some(indent) = indent { styler = styler.with_indent(indent); }
        if let Some(text) = comment_text { styler = styler.with_comment_text(text); }
        styler
    }
}

proptest! {
    #[test]
    fn equality_and_hash_are_reflexive(a in any_styler()) {
        let copy = a.clone();
        prop_assert_eq!(&a, &copy);
        prop_assert_eq!(hash_of(&a), hash_of(&copy));
        prop_assert_eq!(a.canonical_key(), copy.canonical_key());
    }

    #[test]
    fn equal_keys_mean_equal_stylers(a in any_styler(), b in any_styler()) {
        prop_assert_eq!(a == b, a.canonical_key() == b.canonical_key());
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn merge_keeps_self_where_other_is_default(a in any_styler(), b in any_styler()) {
        let default = Styler::default();
        let merged = Styler::combine([&a, &b]);
        prop_assert_eq!(&merged, &a.merge(&b));

        macro_rules! check {
            ($getter:ident) => {
                let expected = if b.$getter() != default.$getter() { b.$getter() } else { a.$getter() };
                prop_assert_eq!(merged.$getter(), expected);
            };
        }
        check!(bg_color);
        check!(bold);
        check!(font_size);
        check!(font_color);
        check!(number_format);
        check!(border_type);
        check!(horizontal_alignment);
        check!(wrap_text);
        check!(indent);
        check!(comment_text);
    }

    #[test]
    fn merge_is_associative(a in any_styler(), b in any_styler(), c in any_styler()) {
        prop_assert_eq!(a.merge(&b).merge(&c), a.merge(&b.merge(&c)));
    }

    #[test]
    fn merging_default_is_identity(a in any_styler()) {
        prop_assert_eq!(&a.merge(&Styler::default()), &a);
        prop_assert_eq!(&Styler::combine([&a]), &a);
    }

    #[test]
    fn native_roundtrip(a in any_styler()) {
        let cache = StyleCache::new();
        let native = a.to_native_style_in(&cache).unwrap();
        let back = Styler::from_native_style(&native, &[], None).unwrap();
        prop_assert_eq!(back, a);
    }
}
