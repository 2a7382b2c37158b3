use super::FloatExt;
use crate::{Bits, Float};

/// A single color channel.
///
/// A channel is a floating point number in unit range `0.0..=1.0`. The only
/// way to create a channel, [`Channel::new`], clamps its argument to that
/// range, replaces not-a-number with zero, and replaces negative zero with
/// positive zero. As a result, channels are totally ordered and two channels
/// are equal exactly when their bits are.
///
/// ```
/// # use pixelcolor::{Channel, Float};
/// assert_eq!(Channel::new(1.5).value(), 1.0);
/// assert_eq!(Channel::new(-0.25), Channel::ZERO);
/// assert_eq!(Channel::new(Float::NAN), Channel::ZERO);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Float", into = "Float")
)]
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Channel(Float);

impl Channel {
    /// The channel with value zero.
    pub const ZERO: Channel = Channel(0.0);

    /// The channel with value one.
    pub const ONE: Channel = Channel(1.0);

    /// Create a new channel, clamping the value to unit range.
    #[inline]
    pub fn new(value: Float) -> Self {
        // Adding positive zero turns negative zero into positive zero.
        Self(value.clamp_unit() + 0.0)
    }

    /// Create a new channel from its 8-bit representation.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        Self(value as Float / 255.0)
    }

    /// Access the channel's value.
    #[inline]
    pub const fn value(self) -> Float {
        self.0
    }

    /// Convert the channel to its 8-bit representation, rounding to the
    /// nearest integer.
    ///
    /// ```
    /// # use pixelcolor::Channel;
    /// assert_eq!(Channel::new(0.5).to_u8(), 128);
    /// assert_eq!(Channel::from_u8(0xd6).to_u8(), 0xd6);
    /// ```
    #[inline]
    pub fn to_u8(self) -> u8 {
        (self.0 * 255.0).round() as u8
    }

    /// Get the channel's bits.
    #[inline]
    pub fn to_bits(self) -> Bits {
        self.0.to_bits()
    }
}

impl From<Float> for Channel {
    fn from(value: Float) -> Self {
        Self::new(value)
    }
}

impl From<Channel> for Float {
    fn from(value: Channel) -> Self {
        value.0
    }
}

impl AsRef<Float> for Channel {
    fn as_ref(&self) -> &Float {
        &self.0
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Channel {}

impl std::hash::Hash for Channel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

#[cfg(test)]
mod test {
    use super::Channel;
    use crate::Float;

    #[test]
    fn test_clamping() {
        assert_eq!(Channel::new(0.25).value(), 0.25);
        assert_eq!(Channel::new(-3.0), Channel::ZERO);
        assert_eq!(Channel::new(3.0), Channel::ONE);
        assert_eq!(Channel::new(Float::NAN), Channel::ZERO);
        assert_eq!(Channel::new(Float::INFINITY), Channel::ONE);
        assert_eq!(Channel::new(Float::NEG_INFINITY), Channel::ZERO);
    }

    #[test]
    fn test_negative_zero() {
        let zero = Channel::new(-0.0);
        assert_eq!(zero, Channel::ZERO);
        assert!(zero.value().is_sign_positive());
    }

    #[test]
    fn test_8bit() {
        for byte in 0..=255_u8 {
            assert_eq!(Channel::from_u8(byte).to_u8(), byte);
        }
        assert_eq!(Channel::ONE.to_u8(), 255);
        assert_eq!(Channel::new(0.499 / 255.0).to_u8(), 0);
    }

    #[test]
    fn test_conversion() {
        let channel: Channel = (2.0 as Float).into();
        assert_eq!(channel, Channel::ONE);
        let value: Float = Channel::new(0.75).into();
        assert_eq!(value, 0.75);
    }
}
