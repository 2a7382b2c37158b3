mod channel;
mod contrast;
mod conversion;
mod grayscale;
mod interpolation;
mod math;
mod space;
mod string;

#[cfg(test)]
pub(crate) mod test_util;

// channel
pub use channel::Channel;

// contrast
pub use contrast::ContrastContext;
pub(crate) use contrast::{to_brightness, to_contrast_ratio, to_luminance};

// conversion
pub use conversion::{
    hsb_to_hsl, hsb_to_rgb, hsl_to_hsb, hsl_to_rgb, lab_to_rgb, lab_to_xyz, rgb_to_hsb,
    rgb_to_hsl, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
pub(crate) use conversion::{from_rgb, normalize_hue, to_rgb};

// grayscale
pub use grayscale::GrayscaleMode;

// interpolation
pub use interpolation::HueInterpolation;
pub(crate) use interpolation::{interpolate, prepare_to_interpolate};

// math
pub(crate) use math::FloatExt;

// space
pub use space::{ColorSpace, HsbComponent, HslComponent};

// string
pub use string::HexOrder;
pub(crate) use string::{format_hex, parse_hex};
