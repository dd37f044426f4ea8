//! Number format types

/// Number format for cell display
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Create a number format from a format string
    ///
    /// `"General"` maps to [`NumberFormat::General`].
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        let format = format.into();
        if format == "General" {
            NumberFormat::General
        } else {
            NumberFormat::Custom(format)
        }
    }
}
