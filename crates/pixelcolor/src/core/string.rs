#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::HexFormatError;
use crate::Float;

/// The position of the alpha channel in hexadecimal notation.
///
/// Four and eight digit hexadecimal colors come in two flavors. CSS puts the
/// alpha channel last, as in `#RRGGBBAA`, whereas Android and several design
/// tools put it first, as in `#AARRGGBB`. Three and six digit colors have no
/// alpha channel and are unaffected.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "pixelcolor")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HexOrder {
    /// Alpha comes last, i.e., `#RGBA` and `#RRGGBBAA`.
    #[default]
    Rgba,
    /// Alpha comes first, i.e., `#ARGB` and `#AARRGGBB`.
    Argb,
}

/// Parse a color in hexadecimal notation.
///
/// The string may be surrounded by whitespace and may start with a hash. It
/// must have 3, 4, 6, or 8 hexadecimal digits, with single-digit channels
/// being doubled. If successful, this function returns red, green, blue, and
/// alpha in unit range, in that order.
pub(crate) fn parse_hex(s: &str, order: HexOrder) -> Result<[Float; 4], HexFormatError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.is_empty() {
        return Err(HexFormatError::Empty);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // Also rules out multi-byte characters, so byte offsets are safe.
        return Err(HexFormatError::MalformedDigit);
    }

    let width = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        n => return Err(HexFormatError::UnsupportedLength(n)),
    };

    fn parse_channel(digits: &str, index: usize, width: usize) -> Result<u8, HexFormatError> {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(HexFormatError::MalformedDigit)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| HexFormatError::MalformedDigit)?;

        Ok(if width == 1 { 17 * n } else { n })
    }

    let count = digits.len() / width;
    let mut channels = [0_u8; 4];
    for (index, channel) in channels.iter_mut().take(count).enumerate() {
        *channel = parse_channel(digits, index, width)?;
    }

    let [c1, c2, c3, c4] = channels;
    let [r, g, b, a] = match (count, order) {
        (3, _) => [c1, c2, c3, 0xff],
        (_, HexOrder::Rgba) => [c1, c2, c3, c4],
        (_, HexOrder::Argb) => [c2, c3, c4, c1],
    };

    Ok([
        r as Float / 255.0,
        g as Float / 255.0,
        b as Float / 255.0,
        a as Float / 255.0,
    ])
}

/// Convert a unit-range channel to its 8-bit representation.
#[inline]
fn to_byte(value: Float) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Format the channels in hexadecimal notation.
///
/// Without an order, this function omits the alpha channel and produces
/// `#RRGGBB`. Otherwise, it produces `#RRGGBBAA` or `#AARRGGBB`. Digits are
/// uppercase.
pub(crate) fn format_hex(channels: &[Float; 4], order: Option<HexOrder>) -> String {
    let [r, g, b, a] = channels.map(to_byte);
    match order {
        None => format!("#{:02X}{:02X}{:02X}", r, g, b),
        Some(HexOrder::Rgba) => format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a),
        Some(HexOrder::Argb) => format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
    }
}
