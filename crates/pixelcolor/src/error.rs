//! Utility module with pixelcolor's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous hexadecimal color.
///
/// Only [`Color::try_from_hex`](crate::Color::try_from_hex) and
/// `str::parse` surface this error. The infallible constructors
/// [`Color::from_hex_rgba`](crate::Color::from_hex_rgba) and
/// [`Color::from_hex_argb`](crate::Color::from_hex_argb) fall back on opaque
/// black instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexFormatError {
    /// A hexadecimal color without any digits, e.g., `""` or `"#"`.
    #[error("hex color should have digits but has none")]
    Empty,

    /// A hexadecimal color with the wrong number of digits. For example,
    /// `#12345` has five digits, but only 3, 4, 6, and 8 are supported.
    #[error("hex color should have 3, 4, 6, or 8 digits but has {0}")]
    UnsupportedLength(usize),

    /// A hexadecimal color with a character that is not a hexadecimal digit.
    /// For example, `#ffg` has a malformed third digit.
    #[error("hex color should contain only hexadecimal digits but does not")]
    MalformedDigit,
}

#[cfg(feature = "pyffi")]
impl From<HexFormatError> for PyErr {
    fn from(value: HexFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
