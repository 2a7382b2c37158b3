#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// The reduction from three channels to a single gray level.
///
/// See [Lightness and human
/// perception](https://en.wikipedia.org/wiki/Lightness#Lightness_and_human_perception)
/// for a comparison of the different approaches.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrayscaleMode {
    /// The weighted average `0.299 R + 0.587 G + 0.114 B`, which accounts
    /// for the eye's uneven sensitivity to the three primaries.
    #[default]
    Weighted,
    /// HSL lightness, i.e., the mean of the largest and smallest channel.
    Lightness,
    /// The unweighted average of the three channels.
    Average,
    /// The largest channel, which also is HSB brightness.
    Maximum,
}

impl GrayscaleMode {
    /// Determine the gray level for the given RGB coordinates.
    pub(crate) fn gray_level(&self, coordinates: &[Float; 3]) -> Float {
        let [r, g, b] = *coordinates;
        match *self {
            Self::Weighted => super::to_brightness(coordinates),
            Self::Lightness => (r.max(g).max(b) + r.min(g).min(b)) / 2.0,
            Self::Average => (r + g + b) / 3.0,
            Self::Maximum => r.max(g).max(b),
        }
    }
}
