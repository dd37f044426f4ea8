//! Error types for styleframe

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting styles
#[derive(Debug, Error)]
pub enum Error {
    /// A theme-indexed color was met while reading a native style
    #[error("Theme colors are not supported ({attribute})")]
    ThemeColorUnsupported { attribute: &'static str },

    /// A native style name that is not a style key
    #[error("Invalid style name: {0}")]
    InvalidStyleName(#[from] serde_json::Error),

    /// An attribute value the native style model does not understand
    #[error("Invalid value for {attribute}: {value:?}")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },

    /// Error from the style model
    #[error(transparent)]
    Core(#[from] styleframe_core::Error),
}

impl Error {
    pub(crate) fn invalid_value(attribute: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            attribute,
            value: value.into(),
        }
    }
}
