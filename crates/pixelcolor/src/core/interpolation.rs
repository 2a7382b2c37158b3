#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::{from_rgb, ColorSpace};
use crate::Float;

/// A choice of strategy for interpolating hues.
///
/// This enum is used by [`Color::mixed_with`](crate::Color::mixed_with).
///
/// Since hues are expressed as angles, the same perceptual hue has an infinite
/// number of representations modulo 360. Furthermore, there are two ways of
/// interpolating between two hues, clockwise and counter-clockwise. Consistent
/// with [CSS Color 4](https://www.w3.org/TR/css-color-4/#hue-interpolation),
/// the interpolation strategy selects the way based either on the distance
/// between hues, [`HueInterpolation::Shorter`] and
/// [`HueInterpolation::Longer`], or on the direction,
/// [`HueInterpolation::Increasing`] and [`HueInterpolation::Decreasing`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HueInterpolation {
    /// Take the shorter arc between the two hue angles.
    #[default]
    Shorter,
    /// Take the longer arc between the two hue angles.
    Longer,
    /// Keep increasing hue angles.
    Increasing,
    /// Keep decreasing hue angles.
    Decreasing,
}

/// Adjust the pair of hues based on interpolation strategy.
fn prepare_hue_interpolation(strategy: HueInterpolation, h1: Float, h2: Float) -> [Float; 2] {
    match strategy {
        HueInterpolation::Shorter => {
            if 180.0 < h2 - h1 {
                return [h1 + 360.0, h2];
            } else if h2 - h1 < -180.0 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Longer => {
            if (0.0..=180.0).contains(&(h2 - h1)) {
                return [h1 + 360.0, h2];
            } else if (-180.0..=0.0).contains(&(h2 - h1)) {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Increasing => {
            if h2 < h1 {
                return [h1, h2 + 360.0];
            }
        }
        HueInterpolation::Decreasing => {
            if h1 < h2 {
                return [h1 + 360.0, h2];
            }
        }
    }

    [h1, h2]
}

/// Prepare RGB coordinates for interpolation.
///
/// This function converts both colors into the interpolation space. For the
/// polar spaces, it also adjusts the hues according to the strategy, so that
/// linear interpolation takes the intended arc. Gray tones keep their
/// converted hue of zero.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn prepare_to_interpolate(
    rgb1: &[Float; 3],
    rgb2: &[Float; 3],
    space: ColorSpace,
    strategy: HueInterpolation,
) -> ([Float; 3], [Float; 3]) {
    let mut coordinates1 = from_rgb(space, rgb1);
    let mut coordinates2 = from_rgb(space, rgb2);

    if space.is_polar() {
        // Hue comes first.
        [coordinates1[0], coordinates2[0]] =
            prepare_hue_interpolation(strategy, coordinates1[0], coordinates2[0]);
    }

    (coordinates1, coordinates2)
}

/// Interpolate between the prepared coordinates.
///
/// This function calculates the linear interpolation for the given factor
/// between equivalent coordinates of the two colors. For the result to be
/// meaningful, the coordinates must be prepared with
/// [`prepare_to_interpolate`]. Hues may exceed 360º and need to be
/// normalized again.
#[must_use = "function returns new color coordinates and does not mutate original values"]
pub(crate) fn interpolate(
    fraction: Float,
    coordinates1: &[Float; 3],
    coordinates2: &[Float; 3],
) -> [Float; 3] {
    [
        fraction.mul_add(coordinates2[0] - coordinates1[0], coordinates1[0]),
        fraction.mul_add(coordinates2[1] - coordinates1[1], coordinates1[1]),
        fraction.mul_add(coordinates2[2] - coordinates1[2], coordinates1[2]),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::normalize_hue;
    use crate::core::test_util::hue_distance;

    #[test]
    fn test_prepare_hue() {
        use HueInterpolation::*;

        assert_eq!(prepare_hue_interpolation(Shorter, 10.0, 350.0), [370.0, 350.0]);
        assert_eq!(prepare_hue_interpolation(Shorter, 350.0, 10.0), [350.0, 370.0]);
        assert_eq!(prepare_hue_interpolation(Shorter, 10.0, 50.0), [10.0, 50.0]);
        assert_eq!(prepare_hue_interpolation(Longer, 10.0, 50.0), [370.0, 50.0]);
        assert_eq!(prepare_hue_interpolation(Longer, 10.0, 350.0), [10.0, 350.0]);
        assert_eq!(prepare_hue_interpolation(Increasing, 50.0, 10.0), [50.0, 370.0]);
        assert_eq!(prepare_hue_interpolation(Decreasing, 10.0, 50.0), [370.0, 50.0]);
    }

    #[test]
    fn test_interpolate() {
        let (c1, c2) = prepare_to_interpolate(
            &[0.0, 0.0, 0.0],
            &[1.0, 1.0, 1.0],
            ColorSpace::Rgb,
            HueInterpolation::Shorter,
        );
        assert_eq!(interpolate(0.5, &c1, &c2), [0.5, 0.5, 0.5]);
        assert_eq!(interpolate(0.0, &c1, &c2), c1);
        assert_eq!(interpolate(1.0, &c1, &c2), c2);
    }

    #[test]
    fn test_interpolate_hue() {
        for (strategy, expected) in [
            (HueInterpolation::Shorter, 0.0),
            (HueInterpolation::Longer, 180.0),
            (HueInterpolation::Increasing, 180.0),
            (HueInterpolation::Decreasing, 0.0),
        ] {
            let [h1, h2] = prepare_hue_interpolation(strategy, 10.0, 350.0);
            let [hue, _, _] = interpolate(0.5, &[h1, 1.0, 0.5], &[h2, 1.0, 0.5]);
            assert!(hue_distance(normalize_hue(hue), expected) < 1e-9);
        }
    }

    #[test]
    fn test_gray_hue() {
        // White converts with hue zero, which then takes the shorter arc.
        let (c1, c2) = prepare_to_interpolate(
            &[1.0, 1.0, 1.0],
            &[0.0, 0.0, 1.0],
            ColorSpace::Hsl,
            HueInterpolation::Shorter,
        );
        assert_eq!(c1, [360.0, 0.0, 1.0]);
        assert_eq!(c2, [240.0, 1.0, 0.5]);

        let (c1, c2) = prepare_to_interpolate(
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0],
            ColorSpace::Hsb,
            HueInterpolation::Shorter,
        );
        assert_eq!(c1, [120.0, 1.0, 1.0]);
        assert_eq!(c2, [0.0, 0.0, 0.0]);
    }
}
