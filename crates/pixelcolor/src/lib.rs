//! # Pixel Color
//!
//! Pixelcolor models colors as four normalized channels (red, green, blue, and
//! alpha) and moves them between the color spaces that user interfaces
//! actually use: gamma-corrected RGB, HSB (also known as HSV), HSL, CIE XYZ,
//! and CIELAB.
//!
//!
//! ## 1. Overview
//!
//! Pixelcolor's main abstractions are:
//!
//!   * [`Color`] is an immutable, freely copyable color value made from four
//!     [`Channel`]s. Its methods expose nearly all of pixelcolor's
//!     functionality, including conversion to other color spaces,
//!     calculation of luminance and contrast, and derivation of new colors by
//!     inversion, grayscaling, saturation, lightness and hue adjustment,
//!     mixing, tinting, and shading.
//!   * [`Channel`] enforces the one invariant of color values: every channel
//!     lies in `0.0..=1.0`. Out-of-range values are clamped on construction,
//!     so no constructor ever fails.
//!   * [`ColorSpace`] selects the space for [`Color::mixed`], while
//!     [`HueInterpolation`] picks the arc taken between two hues.
//!   * [`GrayscaleMode`] and [`ContrastContext`] select the reduction used by
//!     [`Color::grayscale`] and the minimum ratio used by
//!     [`Color::is_contrasting`], respectively.
//!   * The [`convert`] module exposes the underlying conversion functions on
//!     plain coordinate arrays.
//!
//! ```
//! # use pixelcolor::{Color, ColorSpace, ContrastContext};
//! let rose = Color::from_hex_rgba("#D6A5A4");
//! assert_eq!(rose.to_hex(), "#D6A5A4");
//!
//! let darker = rose.darkened(0.3);
//! assert!(darker.is_dark());
//! assert!(darker.is_contrasting(&Color::WHITE, ContrastContext::StandardLargeText));
//!
//! let halfway = Color::BLACK.mixed(ColorSpace::Rgb, 0.5, &Color::WHITE);
//! assert_eq!(halfway.to_rgba(), [0.5, 0.5, 0.5, 1.0]);
//! ```
//!
//!
//! ## 2. Hexadecimal Notation
//!
//! Colors in hashed hexadecimal notation may have 3, 4, 6, or 8 digits. Since
//! the 4 and 8 digit forms are used with the alpha channel first as well as
//! last, pixelcolor never guesses: [`Color::from_hex_rgba`] and
//! [`Color::from_hex_argb`] name the order, as do [`Color::to_hex_rgba`] and
//! [`Color::to_hex_argb`]. Both parsing constructors fall back on opaque black
//! for malformed strings; [`Color::try_from_hex`] and `str::parse` report
//! the [`HexFormatError`](error::HexFormatError) instead.
//!
//!
//! ## 3. Optional Features
//!
//! Pixelcolor supports three feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`serde`** derives `Serialize` and `Deserialize` for [`Color`] and
//!     the selector enums. Deserialized channels are clamped just like
//!     constructor arguments. This feature is disabled by default.
//!   - **`pyffi`** controls pixelcolor's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Pixelcolor logs through [`tracing`] and never installs a subscriber
//! itself.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod object;

pub mod convert {
    //! Conversion functions between color spaces, operating on coordinate
    //! arrays.
    //!
    //! RGB coordinates are gamma-corrected sRGB in `0.0..=1.0`. HSB and HSL
    //! coordinates are ordered hue (degrees), saturation, and
    //! brightness/lightness. XYZ coordinates are scaled so that the D65 white
    //! point is `[95.05, 100.0, 108.9]`, and Lab coordinates are ordered L, a,
    //! b. Every function clamps or wraps out-of-range inputs instead of
    //! failing.
    pub use crate::core::{
        hsb_to_hsl, hsb_to_rgb, hsl_to_hsb, hsl_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_hsb,
        rgb_to_hsl, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
    };
}

pub use core::{
    Channel, ColorSpace, ContrastContext, GrayscaleMode, HexOrder, HsbComponent, HslComponent,
    HueInterpolation,
};
pub use object::Color;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn pixelcolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Color>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<ContrastContext>()?;
    m.add_class::<GrayscaleMode>()?;
    m.add_class::<HexOrder>()?;
    m.add_class::<HsbComponent>()?;
    m.add_class::<HslComponent>()?;
    m.add_class::<HueInterpolation>()?;
    Ok(())
}
