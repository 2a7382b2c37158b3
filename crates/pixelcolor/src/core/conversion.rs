use super::{ColorSpace, FloatExt};
use crate::Float;

/// Normalize the hue to `0.0..360.0`.
///
/// Any finite hue wraps around the color wheel. Not-a-number and infinite
/// hues become zero.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let h = hue.rem_euclid(360.0);
    // rem_euclid may round tiny negative hues up to 360.0.
    if h.is_nan() || 360.0 <= h {
        0.0
    } else {
        h + 0.0
    }
}

/// Determine the hue in degrees from the maximum channel and the difference
/// between maximum and minimum channel. Gray tones have hue zero.
fn hue_degrees(rgb: &[Float; 3], max: Float, delta: Float) -> Float {
    if delta == 0.0 {
        return 0.0;
    }

    let [r, g, b] = *rgb;
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    normalize_hue(sector * 60.0)
}

#[inline]
fn min_max(rgb: &[Float; 3]) -> (Float, Float) {
    let [r, g, b] = *rgb;
    (r.min(g).min(b), r.max(g).max(b))
}

#[inline]
fn clamp_rgb(rgb: &[Float; 3]) -> [Float; 3] {
    [rgb[0].clamp_unit(), rgb[1].clamp_unit(), rgb[2].clamp_unit()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSB coordinates to RGB.
///
/// Hue is measured in degrees and wraps around, so that 360º, 720º, and -360º
/// all are red. Saturation and brightness are clamped to `0.0..=1.0`.
///
/// ```
/// # use pixelcolor::convert::hsb_to_rgb;
/// assert_eq!(hsb_to_rgb(&[120.0, 1.0, 1.0]), [0.0, 1.0, 0.0]);
/// assert_eq!(hsb_to_rgb(&[360.0, 1.0, 1.0]), [1.0, 0.0, 0.0]);
/// ```
pub fn hsb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let h = normalize_hue(value[0]) / 360.0;
    let s = value[1].clamp_unit();
    let v = value[2].clamp_unit();

    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * f.mul_add(-s, 1.0);
    let t = v * (1.0 - f).mul_add(-s, 1.0);

    // Hues just shy of 360º may still land on sector 6.
    let rgb = match (sector as usize) % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };

    clamp_rgb(&rgb)
}

/// Convert RGB coordinates to HSB.
///
/// Gray tones have hue and saturation zero.
pub fn rgb_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let rgb = clamp_rgb(value);
    let (min, max) = min_max(&rgb);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    [hue_degrees(&rgb, max, delta), saturation, max]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute one RGB channel from the HSL helper values and the hue offset for
/// that channel.
fn hue_to_channel(m1: Float, m2: Float, hue: Float) -> Float {
    let h = hue.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        (m2 - m1).mul_add(h * 6.0, m1)
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        (m2 - m1).mul_add((2.0 / 3.0 - h) * 6.0, m1)
    } else {
        m1
    }
}

/// Convert HSL coordinates to RGB.
///
/// Hue is measured in degrees and wraps around. Saturation and lightness are
/// clamped to `0.0..=1.0`.
///
/// ```
/// # use pixelcolor::convert::hsl_to_rgb;
/// assert_eq!(hsl_to_rgb(&[0.0, 1.0, 0.5]), [1.0, 0.0, 0.0]);
/// assert_eq!(hsl_to_rgb(&[240.0, 1.0, 0.5]), [0.0, 0.0, 1.0]);
/// ```
pub fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let h = normalize_hue(value[0]) / 360.0;
    let s = value[1].clamp_unit();
    let l = value[2].clamp_unit();

    let m2 = if l <= 0.5 {
        l * (s + 1.0)
    } else {
        l + s - l * s
    };
    let m1 = l.mul_add(2.0, -m2);

    clamp_rgb(&[
        hue_to_channel(m1, m2, h + 1.0 / 3.0),
        hue_to_channel(m1, m2, h),
        hue_to_channel(m1, m2, h - 1.0 / 3.0),
    ])
}

/// Convert RGB coordinates to HSL.
///
/// Gray tones have hue and saturation zero.
pub fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let rgb = clamp_rgb(value);
    let (min, max) = min_max(&rgb);
    let delta = max - min;
    if delta == 0.0 {
        return [0.0, 0.0, max];
    }

    let l = (max + min) / 2.0;
    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    [hue_degrees(&rgb, max, delta), s, l]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSL coordinates to HSB. Hue is normalized but otherwise
/// unchanged.
pub fn hsl_to_hsb(value: &[Float; 3]) -> [Float; 3] {
    let s = value[1].clamp_unit();
    let l = value[2].clamp_unit();

    let v = s.mul_add(l.min(1.0 - l), l);
    let saturation = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    [normalize_hue(value[0]), saturation.clamp_unit(), v]
}

/// Convert HSB coordinates to HSL. Hue is normalized but otherwise
/// unchanged.
pub fn hsb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let s = value[1].clamp_unit();
    let v = value[2].clamp_unit();

    let l = v * (1.0 - s / 2.0);
    let saturation = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    [normalize_hue(value[0]), saturation.clamp_unit(), l]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// The D65 reference white in XYZ, scaled so that Y is 100.
const WHITE_POINT: [Float; 3] = [95.05, 100.0, 108.9];

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2406, -1.5372, -0.4986 ],
    [ -0.9689,  1.8758,  0.0415 ],
    [  0.0557, -0.2040,  1.0570 ],
];

/// Remove sRGB's gamma from a channel.
#[inline]
fn decode_gamma(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply sRGB's gamma to a linear channel.
#[inline]
fn encode_gamma(value: Float) -> Float {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

/// Convert XYZ coordinates to RGB.
///
/// The coordinates are first clamped to the range spanned by black and the
/// D65 white point `[95.05, 100.0, 108.9]`. The resulting channels are rounded
/// to three decimals and clamped to `0.0..=1.0`, since XYZ covers colors that
/// sRGB cannot display.
pub fn xyz_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let xyz = [
        value[0].clamp(0.0, WHITE_POINT[0]) / 100.0,
        value[1].clamp(0.0, WHITE_POINT[1]) / 100.0,
        value[2].clamp(0.0, WHITE_POINT[2]) / 100.0,
    ];
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &xyz);

    [
        encode_gamma(r).round_to(3).clamp_unit(),
        encode_gamma(g).round_to(3).clamp_unit(),
        encode_gamma(b).round_to(3).clamp_unit(),
    ]
}

/// Convert RGB coordinates to XYZ.
///
/// The result is scaled so that white has luminance Y 100 and is rounded to
/// four decimals.
///
/// ```
/// # use pixelcolor::convert::rgb_to_xyz;
/// assert_eq!(rgb_to_xyz(&[1.0, 0.0, 0.0]), [41.24, 21.26, 1.93]);
/// ```
pub fn rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = clamp_rgb(value);
    let linear = [decode_gamma(r), decode_gamma(g), decode_gamma(b)];
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);

    [
        (x * 100.0).round_to(4),
        (y * 100.0).round_to(4),
        (z * 100.0).round_to(4),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

const LAB_EPSILON: Float = 0.008856;
const LAB_SLOPE: Float = 7.787;
const LAB_OFFSET: Float = 16.0 / 116.0;

/// Clamp Lab coordinates to L in `0..=100` and a, b in `-128..=127`.
#[inline]
fn clamp_lab(value: &[Float; 3]) -> [Float; 3] {
    [
        value[0].clamp(0.0, 100.0),
        value[1].clamp(-128.0, 127.0),
        value[2].clamp(-128.0, 127.0),
    ]
}

/// Convert Lab coordinates to XYZ.
pub fn lab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        let cubed = value.powi(3);
        if LAB_EPSILON < cubed {
            cubed
        } else {
            (value - LAB_OFFSET) / LAB_SLOPE
        }
    }

    let [l, a, b] = clamp_lab(value);
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    [
        WHITE_POINT[0] * convert(fx),
        WHITE_POINT[1] * convert(fy),
        WHITE_POINT[2] * convert(fz),
    ]
}

/// Convert XYZ coordinates to Lab.
///
/// The XYZ coordinates are clamped just like for [`xyz_to_rgb`]. The result
/// is rounded to three decimals.
pub fn xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if LAB_EPSILON < value {
            value.cbrt()
        } else {
            LAB_SLOPE.mul_add(value, LAB_OFFSET)
        }
    }

    let fx = convert(value[0].clamp(0.0, WHITE_POINT[0]) / WHITE_POINT[0]);
    let fy = convert(value[1].clamp(0.0, WHITE_POINT[1]) / WHITE_POINT[1]);
    let fz = convert(value[2].clamp(0.0, WHITE_POINT[2]) / WHITE_POINT[2]);

    clamp_lab(&[
        fy.mul_add(116.0, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ])
    .map(|c| c.round_to(3))
}

/// Convert Lab coordinates to RGB.
///
/// ```
/// # use pixelcolor::convert::lab_to_rgb;
/// assert_eq!(lab_to_rgb(&[100.0, 0.0, 0.0]), [1.0, 1.0, 1.0]);
/// assert_eq!(lab_to_rgb(&[53.233, 80.105, 67.223]), [1.0, 0.0, 0.0]);
/// ```
pub fn lab_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_rgb(&lab_to_xyz(value))
}

/// Convert RGB coordinates to Lab.
pub fn rgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    xyz_to_lab(&rgb_to_xyz(value))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB coordinates to the given color space.
pub(crate) fn from_rgb(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Rgb => clamp_rgb(value),
        ColorSpace::Hsl => rgb_to_hsl(value),
        ColorSpace::Hsb => rgb_to_hsb(value),
        ColorSpace::Lab => rgb_to_lab(value),
    }
}

/// Convert coordinates in the given color space to RGB.
pub(crate) fn to_rgb(space: ColorSpace, value: &[Float; 3]) -> [Float; 3] {
    match space {
        ColorSpace::Rgb => clamp_rgb(value),
        ColorSpace::Hsl => hsl_to_rgb(value),
        ColorSpace::Hsb => hsb_to_rgb(value),
        ColorSpace::Lab => lab_to_rgb(value),
    }
}
