use crate::Float;

/// An extension trait for floating point numbers.
///
/// It collects the two numeric chores shared by all conversions: clipping to
/// unit range and limiting decimal precision.
pub(crate) trait FloatExt {
    /// Clamp to `0.0..=1.0`, mapping not-a-number to zero.
    fn clamp_unit(self) -> Self;

    /// Round to the given number of digits after the decimal.
    fn round_to(self, decimals: i32) -> Self;
}

impl FloatExt for Float {
    #[inline]
    fn clamp_unit(self) -> Self {
        if self.is_nan() {
            0.0
        } else {
            self.clamp(0.0, 1.0)
        }
    }

    #[inline]
    fn round_to(self, decimals: i32) -> Self {
        let factor = (10.0 as Float).powi(decimals);
        (self * factor).round() / factor
    }
}
