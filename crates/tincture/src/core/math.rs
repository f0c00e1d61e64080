use crate::Float;

/// Extension trait for floating point numbers.
pub(crate) trait FloatExt {
    /// The factor for rounding before equality testing and hashing. It drops
    /// the least significant decimal digits.
    const ROUNDING_FACTOR: Self;

    /// The tolerance for comparing coordinates after round trips through
    /// another colour model.
    #[cfg(test)]
    const TOLERANCE: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e12;

    #[cfg(test)]
    const TOLERANCE: f64 = 1e-9;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e5;

    #[cfg(test)]
    const TOLERANCE: f32 = 1e-4;
}

/// Clamp the value to unit range.
///
/// Conversions may overshoot the unit range by a few units in the last place.
/// This function absorbs that noise. It also maps not-a-number to zero.
#[inline]
pub(crate) fn clamp_unit(value: Float) -> Float {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Normalize the hue to `0..360`.
///
/// Reducing a tiny negative angle modulo 360 may produce exactly 360. This
/// function maps that result back to 0.
#[inline]
pub(crate) fn normalize_hue(hue: Float) -> Float {
    let hue = hue.rem_euclid(360.0);
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Move the quantity toward one of its bounds by the given proportion.
///
/// A positive proportion moves the quantity toward 1, a negative proportion
/// toward 0. The proportion must be `-1..=1`.
#[inline]
pub(crate) fn shift_toward_bound(quantity: Float, proportion: Float) -> Float {
    if proportion > 0.0 {
        (1.0 - quantity).mul_add(proportion, quantity)
    } else {
        quantity * (1.0 + proportion)
    }
}

#[cfg(test)]
mod test {
    use super::{clamp_unit, normalize_hue, shift_toward_bound};
    use crate::assert_close_enough;

    #[test]
    fn test_normalize_hue() {
        assert_close_enough!(normalize_hue(380.0), 20.0);
        assert_close_enough!(normalize_hue(-30.0), 330.0);
        assert_close_enough!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }

    #[test]
    fn test_clamp_and_shift() {
        assert_eq!(clamp_unit(1.0000000000000002), 1.0);
        assert_eq!(clamp_unit(-0.0), 0.0);
        assert_eq!(clamp_unit(crate::Float::NAN), 0.0);

        assert_close_enough!(shift_toward_bound(0.5, 0.5), 0.75);
        assert_close_enough!(shift_toward_bound(0.5, -0.5), 0.25);
        assert_close_enough!(shift_toward_bound(0.3, 1.0), 1.0);
        assert_close_enough!(shift_toward_bound(0.3, -1.0), 0.0);
    }
}
