mod conversion;
mod equality;
mod gamut;
mod math;
mod range;
mod string;

// conversion
pub use conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb};
pub(crate) use conversion::{from_24bit, replace_luma, to_24bit, to_hsl, to_hsv, to_luma, to_yiq};

// equality
#[cfg(test)]
pub(crate) use equality::assert_same_coordinates;
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_coordinates;

// math
pub(crate) use math::{clamp_unit, normalize_hue, shift_toward_bound, FloatExt};

// range
pub use range::Scale;

// string
pub(crate) use string::{format_hex, parse_hex};
pub use string::{HexFormat, Shortening};
