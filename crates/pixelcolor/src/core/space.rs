#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::normalize_hue;
use crate::Float;

/// The enumeration of color spaces used for mixing.
///
/// Colors are stored as gamma-corrected RGB but can be mixed in any of these
/// spaces. Mixing in RGB simply interpolates channels. Mixing in HSL or HSB
/// interpolates hue along the shorter arc of the color wheel, unless
/// [`Color::mixed_with`](crate::Color::mixed_with) specifies another
/// [`HueInterpolation`](crate::HueInterpolation). Mixing in Lab tends to
/// produce the most even perceptual transitions.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Gamma-corrected sRGB, the color's own representation.
    #[default]
    Rgb,
    /// Hue, saturation, and lightness.
    Hsl,
    /// Hue, saturation, and brightness, also known as HSV.
    Hsb,
    /// CIELAB with the D65 white point.
    Lab,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Determine whether this color space is polar, i.e., has a hue.
    ///
    /// HSL and HSB are the only polar color spaces. In both, hue is the first
    /// coordinate.
    pub const fn is_polar(&self) -> bool {
        matches!(*self, Self::Hsl | Self::Hsb)
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Hsb => "HSB",
            Self::Lab => "Lab",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A component of an HSL color.
///
/// [`Color::adjusted_hsl`](crate::Color::adjusted_hsl) shifts one component
/// by an amount. Hue is measured in degrees and wraps around the color wheel.
/// Saturation and lightness are unit values and clamp.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HslComponent {
    /// The hue in degrees.
    Hue,
    /// The saturation in unit range.
    Saturation,
    /// The lightness in unit range.
    Lightness,
}

impl HslComponent {
    /// Shift this component of the HSL coordinates by the amount.
    pub(crate) fn adjust(&self, coordinates: &[Float; 3], amount: Float) -> [Float; 3] {
        let [h, s, l] = *coordinates;
        match *self {
            Self::Hue => [normalize_hue(h + amount), s, l],
            Self::Saturation => [h, s + amount, l],
            Self::Lightness => [h, s, l + amount],
        }
    }
}

/// A component of an HSB color.
///
/// [`Color::adjusted_hsb`](crate::Color::adjusted_hsb) shifts one component
/// by an amount. Hue is measured in degrees and wraps around the color wheel.
/// Saturation and brightness are unit values and clamp.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HsbComponent {
    /// The hue in degrees.
    Hue,
    /// The saturation in unit range.
    Saturation,
    /// The brightness in unit range.
    Brightness,
}

impl HsbComponent {
    /// Shift this component of the HSB coordinates by the amount.
    pub(crate) fn adjust(&self, coordinates: &[Float; 3], amount: Float) -> [Float; 3] {
        let [h, s, b] = *coordinates;
        match *self {
            Self::Hue => [normalize_hue(h + amount), s, b],
            Self::Saturation => [h, s + amount, b],
            Self::Brightness => [h, s, b + amount],
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ColorSpace, HsbComponent, HslComponent};

    #[test]
    fn test_polar() {
        assert!(!ColorSpace::Rgb.is_polar());
        assert!(ColorSpace::Hsl.is_polar());
        assert!(ColorSpace::Hsb.is_polar());
        assert!(!ColorSpace::Lab.is_polar());
        assert_eq!(format!("{}", ColorSpace::Lab), "Lab");
    }

    #[test]
    fn test_adjust() {
        let hsl = [350.0, 0.5, 0.5];
        assert_eq!(HslComponent::Hue.adjust(&hsl, 20.0), [10.0, 0.5, 0.5]);
        assert_eq!(HslComponent::Lightness.adjust(&hsl, 0.25), [350.0, 0.5, 0.75]);

        let hsb = [10.0, 0.5, 0.5];
        assert_eq!(HsbComponent::Hue.adjust(&hsb, -20.0), [350.0, 0.5, 0.5]);
        assert_eq!(HsbComponent::Saturation.adjust(&hsb, -0.25), [10.0, 0.25, 0.5]);
    }
}
