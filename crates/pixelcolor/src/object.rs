use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;
use tracing::{debug, trace};

use crate::core::{
    format_hex, hsb_to_rgb, hsl_to_rgb, interpolate, lab_to_rgb, parse_hex, prepare_to_interpolate,
    rgb_to_hsb, rgb_to_hsl, rgb_to_lab, rgb_to_xyz, to_brightness, to_contrast_ratio,
    to_luminance, to_rgb, xyz_to_rgb, Channel, ColorSpace, ContrastContext, FloatExt,
    GrayscaleMode, HexOrder, HsbComponent, HslComponent, HueInterpolation,
};
use crate::error::HexFormatError;
use crate::Float;

/// A color value.
///
/// A color has four [`Channel`]s, red, green, blue, and alpha, each in unit
/// range `0.0..=1.0`. Red, green, and blue are gamma-corrected sRGB
/// coordinates. Alpha is opacity, with 0 fully transparent and 1 fully
/// opaque.
///
/// Colors are immutable and cheap to copy. Every method that derives a new
/// color, whether by conversion, mixing, or adjustment, returns that new color
/// and leaves the original untouched. No constructor or method fails on
/// out-of-range numbers: channels clamp, hues wrap around the color wheel,
/// and malformed hexadecimal strings fall back on opaque black. Only
/// [`Color::try_from_hex`] and `str::parse` report errors.
///
/// ## Equality
///
/// Two colors are equal exactly when all four channels are. Since conversions
/// between color spaces involve floating point arithmetic and, for CIE XYZ
/// and CIELAB, rounding, round trips generally recover the original color
/// only approximately.
///
/// ## Channel Access
///
/// Both accessor methods and indexing with `0..=3` return channel values.
///
/// ```
/// # use pixelcolor::Color;
/// let plum = Color::new(0.5, 0.25, 0.5, 1.0);
/// assert_eq!(plum.green(), 0.25);
/// assert_eq!(plum[3], 1.0);
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    red: Channel,
    green: Channel,
    blue: Channel,
    alpha: Channel,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Color {
    // The following constructors come in pairs, once for pyffi and once without
    // pyffi, since #[new] and #[staticmethod] do not work with #[cfg_attr()].

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// Each channel is clamped to `0.0..=1.0`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let coral = Color::new(1.0, 0.5, 0.31, 1.0);
    /// assert_eq!(coral.blue(), 0.31);
    /// assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0), Color::new(1.0, 0.0, 0.5, 1.0));
    /// ```
    #[cfg(feature = "pyffi")]
    #[new]
    #[inline]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_channels(red, green, blue, alpha)
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// Each channel is clamped to `0.0..=1.0`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let coral = Color::new(1.0, 0.5, 0.31, 1.0);
    /// assert_eq!(coral.blue(), 0.31);
    /// assert_eq!(Color::new(2.0, -1.0, 0.5, 1.0), Color::new(1.0, 0.0, 0.5, 1.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn new(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self::from_channels(red, green, blue, alpha)
    }

    /// Parse a color in hexadecimal notation with alpha last. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method implements the same functionality as `Color`'s [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color) and is available in
    /// Python only.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Color, HexFormatError> {
        Color::from_str(s)
    }

    /// Instantiate a new, opaque color with the given red, green, and blue
    /// channels.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[inline]
    pub fn rgb(red: Float, green: Float, blue: Float) -> Self {
        Self::from_channels(red, green, blue, 1.0)
    }

    /// Instantiate a new, opaque color with the given red, green, and blue
    /// channels.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::rgb(0.0, 0.0, 0.0), Color::BLACK);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    #[inline]
    pub fn rgb(red: Float, green: Float, blue: Float) -> Self {
        Self::from_channels(red, green, blue, 1.0)
    }

    /// Instantiate a new color from hue, saturation, and brightness.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsb(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(hsb_to_rgb(&[hue, saturation, brightness]), alpha)
    }

    /// Instantiate a new color from hue, saturation, and brightness.
    ///
    /// Hue is measured in degrees and wraps around the color wheel, whereas
    /// saturation, brightness, and alpha clamp to `0.0..=1.0`. HSB is also
    /// known as HSV.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::from_hsb(240.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));
    /// assert_eq!(Color::from_hsb(-120.0, 1.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0));
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsb(hue: Float, saturation: Float, brightness: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(hsb_to_rgb(&[hue, saturation, brightness]), alpha)
    }

    /// Instantiate a new color from hue, saturation, and lightness.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(hsl_to_rgb(&[hue, saturation, lightness]), alpha)
    }

    /// Instantiate a new color from hue, saturation, and lightness.
    ///
    /// Hue is measured in degrees and wraps around the color wheel, whereas
    /// saturation, lightness, and alpha clamp to `0.0..=1.0`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::from_hsl(0.0, 1.0, 0.5, 1.0), Color::rgb(1.0, 0.0, 0.0));
    /// assert_eq!(Color::from_hsl(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hsl(hue: Float, saturation: Float, lightness: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(hsl_to_rgb(&[hue, saturation, lightness]), alpha)
    }

    /// Instantiate a new color from CIELAB coordinates.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_lab(l: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(lab_to_rgb(&[l, a, b]), alpha)
    }

    /// Instantiate a new color from CIELAB coordinates.
    ///
    /// Lightness L is clamped to `0.0..=100.0` and a, b are clamped to
    /// `-128.0..=127.0`. The conversion goes through CIE XYZ with the D65
    /// white point, which also clamps. Colors outside the sRGB gamut end up
    /// with clipped channels.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::from_lab(100.0, 0.0, 0.0, 1.0), Color::WHITE);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_lab(l: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(lab_to_rgb(&[l, a, b]), alpha)
    }

    /// Instantiate a new color from hexadecimal notation with alpha last.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hex_rgba(s: &str) -> Self {
        Self::from_hex_or_black(s, HexOrder::Rgba)
    }

    /// Instantiate a new color from hexadecimal notation with alpha last.
    ///
    /// The string may have 3, 4, 6, or 8 hexadecimal digits, optionally
    /// preceded by a hash. Four and eight digit strings end with the alpha
    /// channel, as in CSS. If the string is malformed, this method returns
    /// opaque black.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let translucent = Color::from_hex_rgba("#FF000080");
    /// assert_eq!(translucent.red(), 1.0);
    /// assert_eq!(translucent.alpha(), 128.0 / 255.0);
    /// assert_eq!(Color::from_hex_rgba("#12345"), Color::BLACK);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hex_rgba(s: &str) -> Self {
        Self::from_hex_or_black(s, HexOrder::Rgba)
    }

    /// Instantiate a new color from hexadecimal notation with alpha first.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_hex_argb(s: &str) -> Self {
        Self::from_hex_or_black(s, HexOrder::Argb)
    }

    /// Instantiate a new color from hexadecimal notation with alpha first.
    ///
    /// This method differs from [`Color::from_hex_rgba`] only for four and
    /// eight digit strings, which start with the alpha channel.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let translucent = Color::from_hex_argb("#80FF0000");
    /// assert_eq!(translucent.red(), 1.0);
    /// assert_eq!(translucent.alpha(), 128.0 / 255.0);
    /// ```
    #[cfg(not(feature = "pyffi"))]
    pub fn from_hex_argb(s: &str) -> Self {
        Self::from_hex_or_black(s, HexOrder::Argb)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> Float {
        self.red.value()
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> Float {
        self.green.value()
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> Float {
        self.blue.value()
    }

    /// Access the alpha channel.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha.value()
    }

    /// Get the four channels as a tuple.
    #[inline]
    pub fn to_channels(&self) -> (Float, Float, Float, Float) {
        (self.red(), self.green(), self.blue(), self.alpha())
    }

    /// Get the four channels as an array.
    #[inline]
    pub fn to_rgba(&self) -> [Float; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Get the four channels in 8-bit representation.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let rose = Color::from_hex_rgba("#D6A5A4");
    /// assert_eq!(rose.to_rgba8(), [0xd6, 0xa5, 0xa4, 0xff]);
    /// ```
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            self.red.to_u8(),
            self.green.to_u8(),
            self.blue.to_u8(),
            self.alpha.to_u8(),
        ]
    }

    /// Create a copy of this color with the given alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_alpha(&self, alpha: Float) -> Self {
        Self {
            alpha: Channel::new(alpha),
            ..*self
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to HSB.
    ///
    /// The result has hue in `0.0..360.0` as well as saturation and
    /// brightness in `0.0..=1.0`. Gray tones have hue and saturation zero.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::rgb(0.0, 0.0, 1.0).to_hsb(), [240.0, 1.0, 1.0]);
    /// ```
    pub fn to_hsb(&self) -> [Float; 3] {
        rgb_to_hsb(&self.rgb_coordinates())
    }

    /// Convert this color to HSL.
    ///
    /// The result has hue in `0.0..360.0` as well as saturation and
    /// lightness in `0.0..=1.0`. Gray tones have hue and saturation zero.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::rgb(0.0, 1.0, 0.0).to_hsl(), [120.0, 1.0, 0.5]);
    /// ```
    pub fn to_hsl(&self) -> [Float; 3] {
        rgb_to_hsl(&self.rgb_coordinates())
    }

    /// Convert this color to CIE XYZ.
    ///
    /// The result uses the D65 white point scaled so that white is
    /// `[95.05, 100.0, 108.9]` and is rounded to four decimals.
    pub fn to_xyz(&self) -> [Float; 3] {
        rgb_to_xyz(&self.rgb_coordinates())
    }

    /// Convert this color to CIELAB.
    ///
    /// The result is rounded to three decimals.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::WHITE.to_lab(), [100.0, 0.0, 0.0]);
    /// ```
    pub fn to_lab(&self) -> [Float; 3] {
        rgb_to_lab(&self.rgb_coordinates())
    }

    /// Format this color as `#RRGGBB`, ignoring alpha.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::new(1.0, 0.5, 0.0, 0.5).to_hex(), "#FF8000");
    /// ```
    pub fn to_hex(&self) -> String {
        format_hex(&self.to_rgba(), None)
    }

    /// Format this color as `#RRGGBBAA`.
    pub fn to_hex_rgba(&self) -> String {
        format_hex(&self.to_rgba(), Some(HexOrder::Rgba))
    }

    /// Format this color as `#AARRGGBB`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let translucent = Color::new(1.0, 0.5, 0.0, 0.5);
    /// assert_eq!(translucent.to_hex_rgba(), "#FF800080");
    /// assert_eq!(translucent.to_hex_argb(), "#80FF8000");
    /// ```
    pub fn to_hex_argb(&self) -> String {
        format_hex(&self.to_rgba(), Some(HexOrder::Argb))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine this color's perceived brightness.
    ///
    /// This method computes the weighted sum `(299 R + 587 G + 114 B) / 1000`
    /// of gamma-corrected channels, ignoring alpha.
    pub fn brightness(&self) -> Float {
        to_brightness(&self.rgb_coordinates())
    }

    /// Determine whether this color is light, i.e., has a perceived
    /// brightness greater than one half.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert!(Color::WHITE.is_light());
    /// assert!(!Color::BLACK.is_light());
    /// ```
    pub fn is_light(&self) -> bool {
        0.5 < self.brightness()
    }

    /// Determine whether this color is dark, i.e., not light.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert!(Color::BLACK.is_dark());
    /// assert!(!Color::WHITE.is_dark());
    /// ```
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// Determine this color's relative luminance.
    ///
    /// Relative luminance follows [WCAG
    /// 2.0](https://www.w3.org/TR/WCAG20/#relativeluminancedef) and ranges
    /// from 0 for black to 1 for white. It ignores alpha.
    pub fn luminance(&self) -> Float {
        to_luminance(&self.rgb_coordinates())
    }

    /// Determine the contrast ratio between this and the other color.
    ///
    /// The ratio ranges from 1 to 21 and does not depend on the order of the
    /// two colors.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
    /// assert!((ratio - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_ratio(&self, other: &Color) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Determine whether this and the other color contrast sufficiently for
    /// the given display context.
    ///
    /// This method returns `true` if the contrast ratio is at least the
    /// context's [`ContrastContext::minimum_ratio`].
    ///
    /// ```
    /// # use pixelcolor::{Color, ContrastContext};
    /// let gray = Color::from_hex_rgba("#767676");
    /// assert!(gray.is_contrasting(&Color::WHITE, ContrastContext::Standard));
    /// assert!(!gray.is_contrasting(&Color::WHITE, ContrastContext::Enhanced));
    /// ```
    pub fn is_contrasting(&self, other: &Color, context: ContrastContext) -> bool {
        context.minimum_ratio() <= self.contrast_ratio(other)
    }

    /// Convert this color to a gray tone with the same alpha.
    ///
    /// ```
    /// # use pixelcolor::{Color, GrayscaleMode};
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.grayscale(GrayscaleMode::Maximum), Color::WHITE);
    /// assert_eq!(red.grayscale(GrayscaleMode::Lightness), Color::white(0.5, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn grayscale(&self, mode: GrayscaleMode) -> Self {
        let level = mode.gray_level(&self.rgb_coordinates());
        Self::from_channels(level, level, level, self.alpha())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Invert this color's red, green, and blue channels, keeping alpha.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::BLACK.inverted(), Color::WHITE);
    /// assert_eq!(Color::ZERO.inverted(), Color::new(1.0, 1.0, 1.0, 0.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn inverted(&self) -> Self {
        Self::from_channels(
            1.0 - self.red(),
            1.0 - self.green(),
            1.0 - self.blue(),
            self.alpha(),
        )
    }

    /// Increase this color's HSL saturation by the given amount.
    ///
    /// Negative amounts desaturate. The resulting saturation clamps to
    /// `0.0..=1.0`.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn saturated(&self, amount: Float) -> Self {
        self.adjusted_hsl(HslComponent::Saturation, amount)
    }

    /// Decrease this color's HSL saturation by the given amount.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.desaturated(1.0), Color::white(0.5, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn desaturated(&self, amount: Float) -> Self {
        self.saturated(-amount)
    }

    /// Increase this color's HSL lightness by the given amount.
    ///
    /// Negative amounts darken. The resulting lightness clamps to
    /// `0.0..=1.0`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.lightened(0.5), Color::WHITE);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn lightened(&self, amount: Float) -> Self {
        self.adjusted_hsl(HslComponent::Lightness, amount)
    }

    /// Decrease this color's HSL lightness by the given amount.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.darkened(0.5), Color::BLACK);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn darkened(&self, amount: Float) -> Self {
        self.lightened(-amount)
    }

    /// Rotate this color's HSL hue by the given number of degrees.
    ///
    /// Any amount, positive or negative, is accepted, since the hue wraps
    /// around the color wheel. Gray tones have no hue and remain unchanged.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.hue_adjusted(120.0), Color::rgb(0.0, 1.0, 0.0));
    /// assert_eq!(red.hue_adjusted(-120.0), Color::rgb(0.0, 0.0, 1.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn hue_adjusted(&self, degrees: Float) -> Self {
        self.adjusted_hsl(HslComponent::Hue, degrees)
    }

    /// Determine this color's complement, i.e., rotate its hue by 180º.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// assert_eq!(red.complement().to_hex(), "#00FFFF");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn complement(&self) -> Self {
        self.hue_adjusted(180.0)
    }

    /// Shift one HSL component of this color by the given amount.
    ///
    /// Hue is shifted in degrees and wraps around, saturation and lightness
    /// clamp to `0.0..=1.0`. Alpha is unchanged.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjusted_hsl(&self, component: HslComponent, amount: Float) -> Self {
        let hsl = component.adjust(&self.to_hsl(), amount);
        Self::from_rgb_alpha(hsl_to_rgb(&hsl), self.alpha())
    }

    /// Shift one HSB component of this color by the given amount.
    ///
    /// Hue is shifted in degrees and wraps around, saturation and brightness
    /// clamp to `0.0..=1.0`. Alpha is unchanged.
    ///
    /// ```
    /// # use pixelcolor::{Color, HsbComponent};
    /// let red = Color::rgb(1.0, 0.0, 0.0);
    /// let maroon = red.adjusted_hsb(HsbComponent::Brightness, -0.5);
    /// assert_eq!(maroon, Color::rgb(0.5, 0.0, 0.0));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn adjusted_hsb(&self, component: HsbComponent, amount: Float) -> Self {
        let hsb = component.adjust(&self.to_hsb(), amount);
        Self::from_rgb_alpha(hsb_to_rgb(&hsb), self.alpha())
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Mix this color with the other color in the given color space.
    ///
    /// The weight is the other color's share and clamps to `0.0..=1.0`, so
    /// that 0 returns this color and 1 returns the other color, modulo round
    /// trip errors in the color space. Mixing in HSL and HSB takes the shorter
    /// arc between hues. Alpha is always mixed linearly.
    ///
    /// ```
    /// # use pixelcolor::{Color, ColorSpace};
    /// let gray = Color::BLACK.mixed(ColorSpace::Rgb, 0.5, &Color::WHITE);
    /// assert_eq!(gray, Color::rgb(0.5, 0.5, 0.5));
    ///
    /// let red = Color::from_hsl(10.0, 1.0, 0.5, 1.0)
    ///     .mixed(ColorSpace::Hsl, 0.5, &Color::from_hsl(350.0, 1.0, 0.5, 1.0));
    /// assert_eq!(red.to_rgba8(), [0xff, 0, 0, 0xff]);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mixed(&self, space: ColorSpace, weight: Float, other: &Color) -> Self {
        self.mixed_with(space, weight, other, HueInterpolation::Shorter)
    }

    /// Mix this color with the other color in the given color space, using
    /// the given strategy for interpolating hues.
    ///
    /// The strategy only matters for the polar color spaces HSL and HSB. See
    /// [`HueInterpolation`] for the available choices.
    ///
    /// ```
    /// # use pixelcolor::{Color, ColorSpace, HueInterpolation};
    /// let red = Color::from_hsl(0.0, 1.0, 0.5, 1.0);
    /// let green = Color::from_hsl(120.0, 1.0, 0.5, 1.0);
    ///
    /// let yellow = red.mixed_with(ColorSpace::Hsl, 0.5, &green, HueInterpolation::Shorter);
    /// assert_eq!(yellow.to_hex(), "#FFFF00");
    ///
    /// let blue = red.mixed_with(ColorSpace::Hsl, 0.5, &green, HueInterpolation::Longer);
    /// assert_eq!(blue.to_hex(), "#0000FF");
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn mixed_with(
        &self,
        space: ColorSpace,
        weight: Float,
        other: &Color,
        strategy: HueInterpolation,
    ) -> Self {
        let fraction = weight.clamp_unit();
        if fraction != weight {
            trace!(weight, fraction, "clamped mixing weight");
        }

        let (coordinates1, coordinates2) = prepare_to_interpolate(
            &self.rgb_coordinates(),
            &other.rgb_coordinates(),
            space,
            strategy,
        );
        let mixed = interpolate(fraction, &coordinates1, &coordinates2);
        let alpha = fraction.mul_add(other.alpha() - self.alpha(), self.alpha());

        Self::from_rgb_alpha(to_rgb(space, &mixed), alpha)
    }

    /// Tint this color, i.e., mix it with white in RGB.
    ///
    /// The amount is white's share. Since white is opaque, tinting also
    /// makes translucent colors more opaque. An amount of 0.2 makes for a
    /// noticeable but not overwhelming tint.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::BLACK.tinted(0.5), Color::rgb(0.5, 0.5, 0.5));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn tinted(&self, amount: Float) -> Self {
        self.mixed(ColorSpace::Rgb, amount, &Self::WHITE)
    }

    /// Shade this color, i.e., mix it with black in RGB.
    ///
    /// The amount is black's share.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::WHITE.shaded(0.25), Color::rgb(0.75, 0.75, 0.75));
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn shaded(&self, amount: Float) -> Self {
        self.mixed(ColorSpace::Rgb, amount, &Self::BLACK)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method is available from Python only.
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this color to its hexadecimal string representation. <i
    /// class=python-only>Python only!</i>
    ///
    /// This method is available from Python only.
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

// Use separate block, so that methods are not exposed to Python.
impl Color {
    /// Transparent black, with all channels zero.
    pub const ZERO: Color = Color::from_const_channels(Channel::ZERO, Channel::ZERO);

    /// Opaque white, with all channels one.
    pub const ONE: Color = Color::from_const_channels(Channel::ONE, Channel::ONE);

    /// Opaque black.
    pub const BLACK: Color = Color::from_const_channels(Channel::ZERO, Channel::ONE);

    /// Opaque white.
    pub const WHITE: Color = Color::ONE;

    const fn from_const_channels(rgb: Channel, alpha: Channel) -> Self {
        Self {
            red: rgb,
            green: rgb,
            blue: rgb,
            alpha,
        }
    }

    /// Instantiate a new color with the given red, green, blue, and alpha
    /// channels.
    ///
    /// All other constructors end up here, so that every color's channels
    /// are clamped to `0.0..=1.0`.
    pub fn from_channels(red: Float, green: Float, blue: Float, alpha: Float) -> Self {
        Self {
            red: Channel::new(red),
            green: Channel::new(green),
            blue: Channel::new(blue),
            alpha: Channel::new(alpha),
        }
    }

    /// Instantiate a new gray tone with the given level and alpha.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::white(1.0, 1.0), Color::WHITE);
    /// assert_eq!(Color::white(0.0, 0.0), Color::ZERO);
    /// ```
    pub fn white(white: Float, alpha: Float) -> Self {
        Self::from_channels(white, white, white, alpha)
    }

    /// Instantiate a new color from CIE XYZ coordinates.
    ///
    /// The coordinates are clamped to the range spanned by black and the D65
    /// white point `[95.05, 100.0, 108.9]`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(Color::from_xyz(95.05, 100.0, 108.9, 1.0), Color::WHITE);
    /// ```
    pub fn from_xyz(x: Float, y: Float, z: Float, alpha: Float) -> Self {
        Self::from_rgb_alpha(xyz_to_rgb(&[x, y, z]), alpha)
    }

    /// Instantiate a new, opaque color from its `0xRRGGBB` integer
    /// representation. Bits above the lower 24 bits are ignored.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let rose = Color::from_hex_int(0xD6A5A4);
    /// assert_eq!(rose, Color::from_hex_rgba("#D6A5A4"));
    /// assert_eq!(Color::from_hex_int(0x7F_D6A5A4), rose);
    /// ```
    pub fn from_hex_int(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self::from_rgba8(r, g, b, 0xff)
    }

    /// Instantiate a new color from 8-bit channels.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let tangerine = Color::from_rgba8(0xff, 0x93, 0x00, 0xff);
    /// assert_eq!(tangerine.to_hex(), "#FF9300");
    /// ```
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: Channel::from_u8(red),
            green: Channel::from_u8(green),
            blue: Channel::from_u8(blue),
            alpha: Channel::from_u8(alpha),
        }
    }

    /// Parse a color in hexadecimal notation with the given alpha order.
    ///
    /// Unlike [`Color::from_hex_rgba`] and [`Color::from_hex_argb`], this
    /// method reports malformed strings.
    ///
    /// ```
    /// # use pixelcolor::{Color, HexOrder};
    /// # use pixelcolor::error::HexFormatError;
    /// let green = Color::try_from_hex("#0F08", HexOrder::Rgba)?;
    /// assert_eq!(green.to_rgba8(), [0x00, 0xff, 0x00, 0x88]);
    ///
    /// let error = Color::try_from_hex("#0F", HexOrder::Rgba);
    /// assert_eq!(error, Err(HexFormatError::UnsupportedLength(2)));
    /// # Ok::<(), HexFormatError>(())
    /// ```
    pub fn try_from_hex(s: &str, order: HexOrder) -> Result<Self, HexFormatError> {
        let [r, g, b, a] = parse_hex(s, order)?;
        Ok(Self::from_channels(r, g, b, a))
    }

    fn from_hex_or_black(s: &str, order: HexOrder) -> Self {
        Self::try_from_hex(s, order).unwrap_or_else(|error| {
            debug!(input = s, %error, "falling back on black for malformed hex color");
            Self::BLACK
        })
    }

    #[inline]
    fn from_rgb_alpha(rgb: [Float; 3], alpha: Float) -> Self {
        let [r, g, b] = rgb;
        Self::from_channels(r, g, b, alpha)
    }

    #[inline]
    fn rgb_coordinates(&self) -> [Float; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl Default for Color {
    /// Create an instance of the default color, opaque black.
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = HexFormatError;

    /// Instantiate a color from hexadecimal notation.
    ///
    /// Consistent with CSS, four and eight digit strings end with the alpha
    /// channel. Use [`Color::try_from_hex`] with [`HexOrder::Argb`] for
    /// strings that start with the alpha channel.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// # use pixelcolor::error::HexFormatError;
    /// let rose: Color = "#d6a5a4".parse()?;
    /// assert_eq!(rose.to_hex(), "#D6A5A4");
    /// assert!("#d6a5a".parse::<Color>().is_err());
    /// # Ok::<(), HexFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s, HexOrder::Rgba)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = HexFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl From<[Float; 4]> for Color {
    fn from(value: [Float; 4]) -> Self {
        let [r, g, b, a] = value;
        Self::from_channels(r, g, b, a)
    }
}

impl From<(Float, Float, Float, Float)> for Color {
    fn from(value: (Float, Float, Float, Float)) -> Self {
        let (r, g, b, a) = value;
        Self::from_channels(r, g, b, a)
    }
}

impl From<Color> for [Float; 4] {
    fn from(value: Color) -> Self {
        value.to_rgba()
    }
}

impl std::ops::Index<usize> for Color {
    type Output = Float;

    /// Access the channel with the given index, with red at 0 and alpha at 3.
    ///
    /// # Panics
    ///
    /// This method panics if `3 < index`.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// let purple = Color::rgb(0.5, 0.4, 0.75);
    /// assert_eq!(purple[2], 0.75);
    /// ```
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => self.red.as_ref(),
            1 => self.green.as_ref(),
            2 => self.blue.as_ref(),
            3 => self.alpha.as_ref(),
            _ => panic!("color channel index should be 0..=3 but is {}", index),
        }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b, a] = self.to_rgba();
        f.write_fmt(format_args!("Color({}, {}, {}, {})", r, g, b, a))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in hexadecimal notation.
    ///
    /// Opaque colors are formatted as `#RRGGBB` and all others as
    /// `#RRGGBBAA`, so that parsing the result recovers the 8-bit channels.
    ///
    /// ```
    /// # use pixelcolor::Color;
    /// assert_eq!(format!("{}", Color::WHITE), "#FFFFFF");
    /// assert_eq!(format!("{}", Color::ZERO), "#00000000");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let order = if self.alpha == Channel::ONE {
            None
        } else {
            Some(HexOrder::Rgba)
        };
        f.write_str(&format_hex(&self.to_rgba(), order))
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    use crate::core::test_util::{assert_close, hue_distance};
    use crate::error::HexFormatError;
    use crate::{ColorSpace, ContrastContext, GrayscaleMode, HexOrder, HueInterpolation};
    use approx::assert_abs_diff_eq;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[test]
    fn test_hex_rose() -> Result<(), HexFormatError> {
        let rose = Color::from_hex_rgba("#D6A5A4");
        assert_close(&rose.to_rgba(), &[0.839, 0.647, 0.643, 1.0], 1e-3);
        assert_eq!(rose.to_hex(), "#D6A5A4");
        assert_eq!(rose, "d6a5a4".parse::<Color>()?);
        assert_eq!(rose, Color::try_from(" #D6A5A4 ")?);
        assert_eq!(format!("{}", rose), "#D6A5A4");
        Ok(())
    }

    #[test]
    fn test_hex_alpha_order() {
        let rgba = Color::from_hex_rgba("#FF000080");
        let argb = Color::from_hex_argb("#FF000080");
        assert_eq!(rgba, Color::from_rgba8(0xff, 0, 0, 0x80));
        assert_eq!(argb, Color::from_rgba8(0, 0, 0x80, 0xff));
        assert_eq!(rgba.to_hex_rgba(), "#FF000080");
        assert_eq!(rgba.to_hex_argb(), "#80FF0000");
        assert_eq!(Color::from_hex_argb(&rgba.to_hex_argb()), rgba);
        assert_eq!(Color::from_hex_rgba("#abc"), Color::from_hex_argb("#abc"));
    }

    #[test]
    fn test_hex_fallback() {
        for malformed in ["", "#", "#12345", "#ggg", "#FF00FF00FF", "red"] {
            assert_eq!(Color::from_hex_rgba(malformed), Color::BLACK);
            assert_eq!(Color::from_hex_argb(malformed), Color::BLACK);
        }

        assert_eq!(Color::try_from_hex("#", HexOrder::Rgba), Err(HexFormatError::Empty));
        assert_eq!(
            Color::try_from_hex("#ggg", HexOrder::Argb),
            Err(HexFormatError::MalformedDigit)
        );
        assert!(Color::try_from(String::from("#1234")).is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::ZERO.to_rgba(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Color::ONE.to_rgba(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_rgba(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::WHITE, Color::ONE);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_clamping() {
        let color = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(color.to_channels(), (1.0, 0.0, 0.5, 1.0));
        assert_eq!(Color::from([0.0, 0.0, 0.0, -0.0]), Color::ZERO);
        assert_eq!(Color::from((0.25, 0.5, 0.75, 1.0)).to_rgba(), [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(Color::white(0.5, 0.5).with_alpha(7.0).alpha(), 1.0);
    }

    #[test]
    fn test_channel_access() {
        let color = Color::new(0.125, 0.25, 0.5, 0.75);
        assert_eq!([color[0], color[1], color[2], color[3]], color.to_rgba());
        let array: [crate::Float; 4] = color.into();
        assert_eq!(array, [0.125, 0.25, 0.5, 0.75]);
        assert_eq!(format!("{:?}", color), "Color(0.125, 0.25, 0.5, 0.75)");
    }

    #[test]
    #[should_panic]
    fn test_channel_index_out_of_bounds() {
        let channel = Color::BLACK[4];
        assert_eq!(channel, 0.0);
    }

    #[test]
    fn test_conversions() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(red.to_hsb(), [0.0, 1.0, 1.0]);
        assert_eq!(red.to_hsl(), [0.0, 1.0, 0.5]);
        assert_eq!(red.to_xyz(), [41.24, 21.26, 1.93]);
        assert_close(&red.to_lab(), &[53.233, 80.105, 67.223], 1e-3);

        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5, 1.0), red);
        assert_eq!(Color::from_hsb(360.0, 1.0, 1.0, 1.0), red);
        assert_close(
            &Color::from_lab(53.233, 80.105, 67.223, 1.0).to_rgba(),
            &red.to_rgba(),
            1.0 / 255.0,
        );
        assert_eq!(Color::from_xyz(500.0, 500.0, 500.0, 0.5), Color::white(1.0, 0.5));
    }

    #[test]
    fn test_round_trips() {
        let colors = [
            Color::from_hex_rgba("#D6A5A4"),
            Color::from_hex_rgba("#1E90FF"),
            Color::from_hex_rgba("#2E8B57"),
            Color::from_hex_rgba("#808080"),
        ];

        for color in colors {
            let [h, s, b] = color.to_hsb();
            assert_close(&Color::from_hsb(h, s, b, 1.0).to_rgba(), &color.to_rgba(), 1e-4);
            let [h, s, l] = color.to_hsl();
            assert_close(&Color::from_hsl(h, s, l, 1.0).to_rgba(), &color.to_rgba(), 1e-4);
            let [x, y, z] = color.to_xyz();
            assert_close(
                &Color::from_xyz(x, y, z, 1.0).to_rgba(),
                &color.to_rgba(),
                1.0 / 255.0,
            );
            let [l, a, b] = color.to_lab();
            assert_close(
                &Color::from_lab(l, a, b, 1.0).to_rgba(),
                &color.to_rgba(),
                1.0 / 255.0,
            );
        }
    }

    #[test]
    fn test_brightness() {
        assert!(Color::WHITE.is_light());
        assert!(!Color::WHITE.is_dark());
        assert!(Color::BLACK.is_dark());
        assert!(!Color::BLACK.is_light());
        assert!(Color::rgb(0.0, 0.0, 1.0).is_dark());
        assert!(Color::rgb(1.0, 1.0, 0.0).is_light());
        assert_abs_diff_eq!(Color::rgb(0.0, 1.0, 0.0).brightness(), 0.587, epsilon = 1e-12);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert_abs_diff_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Color::BLACK.contrast_ratio(&Color::WHITE), 21.0, epsilon = 1e-9);

        let rose = Color::from_hex_rgba("#D6A5A4");
        let navy = Color::from_hex_rgba("#000080");
        assert_eq!(rose.contrast_ratio(&navy), navy.contrast_ratio(&rose));
        assert_eq!(rose.contrast_ratio(&rose), 1.0);

        use ContrastContext::*;
        assert!(Color::BLACK.is_contrasting(&Color::WHITE, Enhanced));

        let gray = Color::from_hex_rgba("#767676");
        let lighter = Color::from_hex_rgba("#777777");
        assert!(gray.is_contrasting(&Color::WHITE, Standard));
        assert!(gray.is_contrasting(&Color::WHITE, EnhancedLargeText));
        assert!(!lighter.is_contrasting(&Color::WHITE, Standard));
        assert!(!gray.is_contrasting(&Color::WHITE, Enhanced));

        let gray = Color::from_hex_rgba("#949494");
        let lighter = Color::from_hex_rgba("#959595");
        assert!(gray.is_contrasting(&Color::WHITE, StandardLargeText));
        assert!(!lighter.is_contrasting(&Color::WHITE, StandardLargeText));
    }

    #[test]
    fn test_grayscale() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let third = 1.0 / 3.0;
        assert_eq!(
            red.grayscale(GrayscaleMode::Average),
            Color::new(third, third, third, 1.0)
        );
        assert_eq!(red.grayscale(GrayscaleMode::default()), Color::white(0.299, 1.0));
        assert_eq!(
            red.with_alpha(0.5).grayscale(GrayscaleMode::Maximum),
            Color::white(1.0, 0.5)
        );
    }

    #[test]
    fn test_inverted() {
        let color = Color::new(0.25, 0.5, 0.75, 0.6);
        assert_eq!(color.inverted(), Color::new(0.75, 0.5, 0.25, 0.6));
        assert_eq!(color.inverted().inverted(), color);
        assert_eq!(Color::WHITE.inverted().inverted(), Color::WHITE);
    }

    #[test]
    fn test_hue_adjustment() {
        let rose = Color::from_hex_rgba("#D6A5A4");
        let [hue, _, _] = rose.to_hsl();

        for degrees in [0.0, 360.0, -360.0, 720.0] {
            let [adjusted, _, _] = rose.hue_adjusted(degrees).to_hsl();
            assert!(hue_distance(adjusted, hue) < 1e-6);
        }

        let twice = rose.hue_adjusted(180.0).hue_adjusted(180.0);
        assert_close(&twice.to_rgba(), &rose.to_rgba(), 1e-9);
        assert_close(
            &rose.complement().complement().to_rgba(),
            &rose.to_rgba(),
            1e-9,
        );

        let [complement, _, _] = rose.complement().to_hsl();
        assert!(hue_distance(complement, hue + 180.0) < 1e-6);

        let gray = Color::white(0.5, 1.0);
        assert_eq!(gray.hue_adjusted(90.0), gray);
    }

    #[test]
    fn test_saturation_lightness() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        assert_eq!(red.saturated(0.5), red);
        assert_eq!(red.desaturated(0.5), Color::rgb(0.75, 0.25, 0.25));
        assert_eq!(red.lightened(0.25), Color::rgb(1.0, 0.5, 0.5));
        assert_eq!(red.darkened(0.25), Color::rgb(0.5, 0.0, 0.0));
        assert_eq!(red.with_alpha(0.5).lightened(1.0), Color::white(1.0, 0.5));
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            Color::BLACK.mixed(ColorSpace::Rgb, 0.5, &Color::ONE),
            Color::new(0.5, 0.5, 0.5, 1.0)
        );
        assert_eq!(
            Color::ZERO.mixed(ColorSpace::Rgb, 0.25, &Color::WHITE),
            Color::new(0.25, 0.25, 0.25, 0.25)
        );
        assert_eq!(Color::BLACK.mixed(ColorSpace::Rgb, 2.0, &Color::WHITE), Color::WHITE);
        assert_eq!(Color::BLACK.mixed(ColorSpace::Rgb, -1.0, &Color::WHITE), Color::BLACK);
        assert_eq!(
            Color::BLACK.mixed(ColorSpace::Rgb, crate::Float::NAN, &Color::WHITE),
            Color::BLACK
        );
    }

    #[test]
    fn test_mixed_hue() {
        let c1 = Color::from_hsl(10.0, 1.0, 0.5, 1.0);
        let c2 = Color::from_hsl(350.0, 1.0, 0.5, 1.0);

        let [hue, _, _] = c1.mixed(ColorSpace::Hsl, 0.5, &c2).to_hsl();
        assert!(hue_distance(hue, 0.0) < 1e-6);
        let [hue, _, _] = c1.mixed(ColorSpace::Hsb, 0.5, &c2).to_hsb();
        assert!(hue_distance(hue, 0.0) < 1e-6);

        let longer = c1.mixed_with(ColorSpace::Hsl, 0.5, &c2, HueInterpolation::Longer);
        let [hue, _, _] = longer.to_hsl();
        assert!(hue_distance(hue, 180.0) < 1e-6);

        // Gray tones have hue zero, which takes part in the mix.
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let [hue, saturation, lightness] =
            Color::WHITE.mixed(ColorSpace::Hsl, 0.5, &blue).to_hsl();
        assert!(hue_distance(hue, 300.0) < 1e-6);
        assert_abs_diff_eq!(saturation, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(lightness, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_with_black() {
        let green = Color::rgb(0.0, 1.0, 0.0);

        let [hue, saturation, lightness] =
            green.mixed(ColorSpace::Hsl, 0.5, &Color::BLACK).to_hsl();
        assert!(hue_distance(hue, 60.0) < 1e-6);
        assert_abs_diff_eq!(saturation, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(lightness, 0.25, epsilon = 1e-9);

        let [hue, _, brightness] = green.mixed(ColorSpace::Hsb, 0.5, &Color::BLACK).to_hsb();
        assert!(hue_distance(hue, 60.0) < 1e-6);
        assert_abs_diff_eq!(brightness, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_mixed_lab() {
        let gray = Color::BLACK.mixed(ColorSpace::Lab, 0.5, &Color::WHITE);
        assert_close(&gray.to_rgba(), &[0.466, 0.466, 0.466, 1.0], 1e-9);
    }

    #[test]
    fn test_tint_shade() {
        assert_eq!(Color::BLACK.tinted(0.5), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::WHITE.shaded(0.25), Color::rgb(0.75, 0.75, 0.75));
        assert_eq!(Color::ZERO.tinted(1.0), Color::WHITE);

        let rose = Color::from_hex_rgba("#D6A5A4");
        assert_eq!(rose.tinted(0.0), rose);
        assert_eq!(rose.shaded(1.0), Color::BLACK);
    }

    /// A layer that records the `input` field of every debug event.
    #[derive(Clone, Default)]
    struct DebugInputs(Arc<Mutex<Vec<String>>>);

    struct InputVisitor<'a>(&'a mut Option<String>);

    impl Visit for InputVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "input" {
                *self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    impl<S: Subscriber> Layer<S> for DebugInputs {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::DEBUG {
                let mut input = None;
                event.record(&mut InputVisitor(&mut input));
                if let Some(input) = input {
                    self.0.lock().unwrap().push(input);
                }
            }
        }
    }

    #[test]
    fn test_hex_fallback_logs() {
        let inputs = DebugInputs::default();
        let subscriber = tracing_subscriber::registry().with(inputs.clone());

        tracing::subscriber::with_default(subscriber, || {
            assert_eq!(Color::from_hex_rgba("#12345"), Color::BLACK);
            assert_eq!(Color::from_hex_argb("#0f0").to_hex(), "#00FF00");
            assert_eq!(Color::from_hex_argb("#gg"), Color::BLACK);
        });

        assert_eq!(*inputs.0.lock().unwrap(), vec!["#12345", "#gg"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let color = Color::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&color)?;
        assert_eq!(json, r#"{"red":0.25,"green":0.5,"blue":0.75,"alpha":1.0}"#);
        assert_eq!(serde_json::from_str::<Color>(&json)?, color);

        let clamped: Color =
            serde_json::from_str(r#"{"red":2.0,"green":-1.0,"blue":0.5,"alpha":1.0}"#)?;
        assert_eq!(clamped, Color::rgb(1.0, 0.0, 0.5));

        let space: ColorSpace = serde_json::from_str(r#""Lab""#)?;
        assert_eq!(space, ColorSpace::Lab);
        Ok(())
    }
}
