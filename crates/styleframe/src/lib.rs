//! # styleframe
//!
//! Composable cell style descriptors for spreadsheets.
//!
//! A [`Styler`] describes fill, font, borders, alignment, number format,
//! protection and an optional comment as a plain value. Stylers compare and
//! hash by value, combine with right-biased [`Styler::merge`], and render
//! into shared [`styleframe_core::NamedStyle`]s through a [`StyleCache`].
//! [`ColorScaleConditionalFormatRule`] builds two or three stop color scales.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use styleframe::{utils, StyleCache, Styler};
//!
//! let cache = StyleCache::new();
//! let money = Styler::new().with_number_format(utils::number_formats::THOUSANDS_COMMA_SEP);
//! let total = Styler::combine([&money, &Styler::default_header_style()]);
//!
//! let a = total.to_native_style_in(&cache).unwrap();
//! let b = total.clone().to_native_style_in(&cache).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//!
//! let back = Styler::from_native_style(&a, &[], None).unwrap();
//! assert_eq!(back, total);
//! ```

pub mod cache;
pub mod color_scale;
pub mod error;
pub mod styler;
pub mod utils;

pub use cache::StyleCache;
pub use color_scale::{ColorScaleConditionalFormatRule, ColorStop};
pub use error::{Error, Result};
pub use styler::{FontSize, Styler};
