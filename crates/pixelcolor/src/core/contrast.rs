#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB.
const LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The coefficients for computing perceived brightness from gamma-corrected
/// sRGB.
const BRIGHTNESS: &[Float; 3] = &[0.299, 0.587, 0.114];

/// Compute the relative luminance for the given sRGB coordinates.
///
/// This function follows [WCAG
/// 2.0](https://www.w3.org/TR/WCAG20/#relativeluminancedef), including its
/// slightly off linearization threshold of 0.03928.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    fn linearize(value: Float) -> Float {
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Compute the contrast ratio between two relative luminance values.
///
/// The result ranges from 1, for identical luminance, to 21, for black and
/// white. Since the larger luminance always is the numerator, the arguments
/// are interchangeable.
pub(crate) fn to_contrast_ratio(luminance1: Float, luminance2: Float) -> Float {
    let (lighter, darker) = if luminance1 < luminance2 {
        (luminance2, luminance1)
    } else {
        (luminance1, luminance2)
    };

    (lighter + 0.05) / (darker + 0.05)
}

/// Compute the perceived brightness for the given sRGB coordinates.
pub(crate) fn to_brightness(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *BRIGHTNESS;
    let [r, g, b] = *coordinates;

    r.mul_add(c1, g.mul_add(c2, b * c3))
}

// --------------------------------------------------------------------------------------------------------------------

/// The display context for a contrast check.
///
/// Each context corresponds to a WCAG success criterion and determines the
/// minimum contrast ratio two colors must reach. Large text is at least 18
/// point or 14 point bold.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContrastContext {
    /// Level AA for regular text, requiring a ratio of 4.5.
    #[default]
    Standard,
    /// Level AA for large text, requiring a ratio of 3.0.
    StandardLargeText,
    /// Level AAA for regular text, requiring a ratio of 7.0.
    Enhanced,
    /// Level AAA for large text, requiring a ratio of 4.5.
    EnhancedLargeText,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ContrastContext {
    /// Get the minimum contrast ratio for this context.
    ///
    /// ```
    /// # use pixelcolor::ContrastContext;
    /// assert_eq!(ContrastContext::Enhanced.minimum_ratio(), 7.0);
    /// ```
    pub const fn minimum_ratio(&self) -> Float {
        match *self {
            Self::Standard => 4.5,
            Self::StandardLargeText => 3.0,
            Self::Enhanced => 7.0,
            Self::EnhancedLargeText => 4.5,
        }
    }
}
