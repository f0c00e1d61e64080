//! Utility module with tincture's errors.
//!
//! Every fallible operation validates its inputs before touching a colour.
//! Hence, an error always leaves the colour it was raised for unchanged.

#[cfg(feature = "pyffi")]
use pyo3::{
    exceptions::{PyLookupError, PyTypeError, PyValueError},
    prelude::*,
};

use crate::Float;

/// An argument conflict.
///
/// This error indicates that a colour was specified in more than one way, e.g.,
/// as both hexadecimal string and CSS3 name. The two fields name the first and
/// second construction mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgumentConflictError {
    pub first: &'static str,
    pub second: &'static str,
}

impl ArgumentConflictError {
    /// Create a new argument conflict error.
    pub const fn new(first: &'static str, second: &'static str) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for ArgumentConflictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "colour should be specified in one way only but is specified as {} and {}",
            self.first, self.second
        ))
    }
}

impl std::error::Error for ArgumentConflictError {}

#[cfg(feature = "pyffi")]
impl From<ArgumentConflictError> for PyErr {
    fn from(value: ArgumentConflictError) -> Self {
        PyTypeError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An out-of-range error.
///
/// This error indicates a numeric argument outside its declared bounds. The
/// ranges used by this crate include:
///
///   * `0..=1` for RGB channels, HSV/HSL saturation, value, and lightness,
///     luma, intensity, and mixing proportions;
///   * `-1..=1` for the in-phase and quadrature components of YIQ as well as
///     the proportions of relative shifts;
///   * whatever bounds a [`Scale`](crate::Scale) declares for scaled
///     coordinates.
///
/// Not-a-numbers never fit into any range.
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfRangeError {
    pub value: Float,
    pub expected: std::ops::RangeInclusive<Float>,
}

impl OutOfRangeError {
    /// Create a new out-of-range error.
    pub const fn new(value: Float, expected: std::ops::RangeInclusive<Float>) -> Self {
        Self { value, expected }
    }

    /// Check that the value falls into the given range.
    #[inline]
    pub(crate) fn check(value: Float, low: Float, high: Float) -> Result<Float, Self> {
        if (low..=high).contains(&value) {
            Ok(value)
        } else {
            Err(Self::new(value, low..=high))
        }
    }
}

impl std::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfRangeError {}

#[cfg(feature = "pyffi")]
impl From<OutOfRangeError> for PyErr {
    fn from(value: OutOfRangeError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous hexadecimal colour string.
///
/// Valid strings have three or six hexadecimal digits with an optional leading
/// `#`. Letters may be upper or lower case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexFormatError {
    /// An empty string or a lone `#`.
    Empty,

    /// A string with neither three nor six characters after the optional
    /// `#`. For example, `#12345` is missing a digit.
    UnexpectedLength,

    /// A string with the correct length but characters other than hexadecimal
    /// digits. For example, `zzz` and `#0g0` are malformed.
    MalformedHex,
}

impl std::fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use HexFormatError::*;

        match *self {
            Empty => f.write_str("hex colour should have digits but is empty"),
            UnexpectedLength => f.write_str("hex colour should have 3 or 6 digits but does not"),
            MalformedHex => {
                f.write_str("hex colour should contain hexadecimal digits only but does not")
            }
        }
    }
}

impl std::error::Error for HexFormatError {}

#[cfg(feature = "pyffi")]
impl From<HexFormatError> for PyErr {
    fn from(value: HexFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// A failed lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// A name that is not one of the 147 CSS3 colour names.
    UnknownName,

    /// Data to be hashed whose `Display` implementation reported an error.
    Unprintable,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::UnknownName => f.write_str("no such CSS3 named colour"),
            Self::Unprintable => f.write_str("data to be hashed could not be converted to string"),
        }
    }
}

impl std::error::Error for LookupError {}

#[cfg(feature = "pyffi")]
impl From<LookupError> for PyErr {
    fn from(value: LookupError) -> Self {
        PyLookupError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// Any of tincture's errors.
///
/// Operations that can fail for more than one reason return this error. The
/// `From` implementations make `?` work across all of them.
#[derive(Clone, Debug, PartialEq)]
pub enum ColourError {
    ArgumentConflict(ArgumentConflictError),
    OutOfRange(OutOfRangeError),
    HexFormat(HexFormatError),
    Lookup(LookupError),
}

impl std::fmt::Display for ColourError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArgumentConflict(error) => std::fmt::Display::fmt(error, f),
            Self::OutOfRange(error) => std::fmt::Display::fmt(error, f),
            Self::HexFormat(error) => std::fmt::Display::fmt(error, f),
            Self::Lookup(error) => std::fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for ColourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArgumentConflict(error) => Some(error),
            Self::OutOfRange(error) => Some(error),
            Self::HexFormat(error) => Some(error),
            Self::Lookup(error) => Some(error),
        }
    }
}

impl From<ArgumentConflictError> for ColourError {
    fn from(value: ArgumentConflictError) -> Self {
        Self::ArgumentConflict(value)
    }
}

impl From<OutOfRangeError> for ColourError {
    fn from(value: OutOfRangeError) -> Self {
        Self::OutOfRange(value)
    }
}

impl From<HexFormatError> for ColourError {
    fn from(value: HexFormatError) -> Self {
        Self::HexFormat(value)
    }
}

impl From<LookupError> for ColourError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}

#[cfg(feature = "pyffi")]
impl From<ColourError> for PyErr {
    fn from(value: ColourError) -> Self {
        match value {
            ColourError::ArgumentConflict(error) => error.into(),
            ColourError::OutOfRange(error) => error.into(),
            ColourError::HexFormat(error) => error.into(),
            ColourError::Lookup(error) => error.into(),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColourError, HexFormatError, LookupError, OutOfRangeError};
    use std::error::Error;

    #[test]
    fn test_display() {
        let error = OutOfRangeError::new(1.5, 0.0..=1.0);
        assert_eq!(error.to_string(), "1.5 does not fit into range 0..=1");

        let error = ColourError::from(HexFormatError::MalformedHex);
        assert_eq!(
            error.to_string(),
            "hex colour should contain hexadecimal digits only but does not"
        );
        assert!(error.source().is_some());

        assert_eq!(
            ColourError::from(LookupError::UnknownName).to_string(),
            "no such CSS3 named colour"
        );
    }

    #[test]
    fn test_check() {
        assert_eq!(OutOfRangeError::check(0.5, 0.0, 1.0), Ok(0.5));
        assert!(OutOfRangeError::check(-0.1, 0.0, 1.0).is_err());
        assert!(OutOfRangeError::check(crate::Float::NAN, 0.0, 1.0).is_err());
    }
}
