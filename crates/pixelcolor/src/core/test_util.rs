use approx::assert_abs_diff_eq;

use crate::Float;

/// Assert that the coordinates are element-wise within epsilon of each other.
#[track_caller]
pub(crate) fn assert_close<const N: usize>(
    actual: &[Float; N],
    expected: &[Float; N],
    epsilon: Float,
) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = epsilon);
    }
}

/// Determine the distance between two hues in degrees, going the short way
/// around the color wheel.
pub(crate) fn hue_distance(hue1: Float, hue2: Float) -> Float {
    let delta = (hue1 - hue2).rem_euclid(360.0);
    delta.min(360.0 - delta)
}

#[cfg(test)]
mod test {
    use super::hue_distance;

    #[test]
    fn test_hue_distance() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(350.0, 10.0), 20.0);
        assert_eq!(hue_distance(90.0, 90.0), 0.0);
    }
}
