use crate::error::OutOfRangeError;
use crate::Float;

/// A linear scale for reading and writing coordinates.
///
/// Colours store their coordinates in canonical form, i.e., with unit range
/// for most coordinates and degrees for hues. A scale maps between unit range
/// and its own bounds `low..=high`, so that a coordinate can be read or written
/// as a percentage, a byte, or anything else with linear bounds.
///
/// An *integral* scale rounds scaled values to the nearest integer, with ties
/// going to the even integer. Scales created from a range of integers are
/// integral, scales created from a range of floating point numbers are not:
///
/// ```
/// # use tincture::Scale;
/// let percent = Scale::from(0..=100);
/// assert!(percent.is_integral());
/// assert_eq!(percent.to_scaled(0.123), 12.0);
///
/// let precise = Scale::from(0.0..=100.0);
/// assert!(!precise.is_integral());
/// assert!((precise.to_scaled(0.123) - 12.3).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    low: Float,
    high: Float,
    integral: bool,
}

impl Scale {
    /// The canonical unit range `0.0..=1.0`.
    pub const UNIT: Scale = Scale {
        low: 0.0,
        high: 1.0,
        integral: false,
    };

    /// The signed unit range `-1.0..=1.0` used by the YIQ chroma components.
    pub const SIGNED_UNIT: Scale = Scale {
        low: -1.0,
        high: 1.0,
        integral: false,
    };

    /// Whole percentages `0..=100`.
    pub const PERCENT: Scale = Scale {
        low: 0.0,
        high: 100.0,
        integral: true,
    };

    /// Byte values `0..=255`.
    pub const BYTE: Scale = Scale {
        low: 0.0,
        high: 255.0,
        integral: true,
    };

    /// Degrees `0.0..=360.0`, the canonical range for hues.
    pub const DEGREES: Scale = Scale {
        low: 0.0,
        high: 360.0,
        integral: false,
    };

    /// Create a new scale.
    pub const fn new(low: Float, high: Float, integral: bool) -> Self {
        Self {
            low,
            high,
            integral,
        }
    }

    /// Get the lower bound.
    #[inline]
    pub const fn low(&self) -> Float {
        self.low
    }

    /// Get the upper bound.
    #[inline]
    pub const fn high(&self) -> Float {
        self.high
    }

    /// Determine whether this scale rounds to integers.
    #[inline]
    pub const fn is_integral(&self) -> bool {
        self.integral
    }

    /// Determine whether the value falls into this scale's bounds.
    #[inline]
    pub fn contains(&self, value: Float) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Map a value with unit range to this scale.
    ///
    /// The mapping is linear. For integral scales, the result is rounded to the
    /// nearest integer, with ties going to even.
    pub fn to_scaled(&self, unit: Float) -> Float {
        let scaled = unit.mul_add(self.high - self.low, self.low);
        if self.integral {
            scaled.round_ties_even()
        } else {
            scaled
        }
    }

    /// Map a value on this scale back to unit range.
    ///
    /// This method fails if the value does not fall into this scale's bounds,
    /// including for not-a-number. It also fails for degenerate scales, whose
    /// bounds are the same, since they cannot be inverted.
    pub fn to_unit(&self, scaled: Float) -> Result<Float, OutOfRangeError> {
        OutOfRangeError::check(scaled, self.low, self.high)?;

        let span = self.high - self.low;
        if span <= 0.0 {
            return Err(OutOfRangeError::new(scaled, self.low..=self.high));
        }

        Ok((scaled - self.low) / span)
    }

    /// Map a circular value, such as a hue, back to unit range.
    ///
    /// Before mapping the value, this method reduces it modulo this scale's
    /// span into `low..high`. Hence, on a scale of degrees, 380 and 20 are the
    /// same value. The result is `0.0..1.0`. This method fails for
    /// not-a-number, infinities, and degenerate scales.
    pub fn wrap_to_unit(&self, scaled: Float) -> Result<Float, OutOfRangeError> {
        let span = self.high - self.low;
        if !scaled.is_finite() || span <= 0.0 {
            return Err(OutOfRangeError::new(scaled, self.low..=self.high));
        }

        let unit = (scaled - self.low).rem_euclid(span) / span;
        Ok(if unit >= 1.0 { 0.0 } else { unit })
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<std::ops::RangeInclusive<i32>> for Scale {
    fn from(value: std::ops::RangeInclusive<i32>) -> Self {
        Self::new(*value.start() as Float, *value.end() as Float, true)
    }
}

impl From<std::ops::RangeInclusive<Float>> for Scale {
    fn from(value: std::ops::RangeInclusive<Float>) -> Self {
        Self::new(*value.start(), *value.end(), false)
    }
}

// ====================================================================================================================
