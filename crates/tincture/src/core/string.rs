use super::conversion::to_24bit;
use super::math::clamp_unit;
use crate::error::HexFormatError;
use crate::Float;

/// The choice of short, three digit hexadecimal notation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shortening {
    /// Always use six digits.
    #[default]
    Never,
    /// Use three digits if that doesn't lose information, i.e., every 8-bit
    /// coordinate is a multiple of 17.
    Allow,
    /// Always use three digits, snapping every coordinate to the nearest of 16
    /// levels.
    Force,
}

/// Options for formatting colours in hexadecimal notation.
///
/// The default is the familiar `#123abc` form, i.e., with leading marker and
/// six lowercase digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexFormat {
    /// Whether to emit a leading `#`.
    pub marker: bool,
    /// Whether to emit three instead of six digits.
    pub shortening: Shortening,
}

impl HexFormat {
    /// Create new hexadecimal format options.
    pub const fn new(marker: bool, shortening: Shortening) -> Self {
        Self { marker, shortening }
    }
}

impl Default for HexFormat {
    fn default() -> Self {
        Self::new(true, Shortening::Never)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The string may start with a `#` and must have three or six hexadecimal
/// digits, upper or lower case. This function transparently expands
/// single-digit coordinates by repeating the digit.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], HexFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.is_empty() {
        return Err(HexFormatError::Empty);
    } else if digits.len() != 3 && digits.len() != 6 {
        return Err(HexFormatError::UnexpectedLength);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, HexFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(HexFormatError::MalformedHex)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| HexFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Format RGB coordinates in hexadecimal notation with the given options.
pub(crate) fn format_hex(coordinates: &[Float; 3], format: HexFormat) -> String {
    let marker = if format.marker { "#" } else { "" };

    match format.shortening {
        Shortening::Force => {
            let [r, g, b] = coordinates.map(|c| (clamp_unit(c) * 15.0).round_ties_even() as u8);
            format!("{}{:x}{:x}{:x}", marker, r, g, b)
        }
        Shortening::Allow | Shortening::Never => {
            let [r, g, b] = to_24bit(coordinates);
            if format.shortening == Shortening::Allow && r % 17 == 0 && g % 17 == 0 && b % 17 == 0
            {
                format!("{}{:x}{:x}{:x}", marker, r / 17, g / 17, b / 17)
            } else {
                format!("{}{:02x}{:02x}{:02x}", marker, r, g, b)
            }
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex, HexFormat, HexFormatError, Shortening};
    use crate::core::from_24bit;

    #[test]
    fn test_parse_hex() -> Result<(), HexFormatError> {
        assert_eq!(parse_hex("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hex("FfA")?, [0xff_u8, 0xff, 0xaa]);
        assert_eq!(parse_hex("c0ffee")?, [0xc0_u8, 0xff, 0xee]);
        assert_eq!(parse_hex(""), Err(HexFormatError::Empty));
        assert_eq!(parse_hex("#"), Err(HexFormatError::Empty));
        assert_eq!(parse_hex("#ff"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("##fff"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("#1234567"), Err(HexFormatError::UnexpectedLength));
        assert_eq!(parse_hex("zzz"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("#0g0"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("+12"), Err(HexFormatError::MalformedHex));
        assert_eq!(parse_hex("💩00"), Err(HexFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_format_hex() {
        let teal = from_24bit(0x00, 0x88, 0x88);
        assert_eq!(format_hex(&teal, HexFormat::default()), "#008888");
        assert_eq!(
            format_hex(&teal, HexFormat::new(false, Shortening::Never)),
            "008888"
        );
        assert_eq!(
            format_hex(&teal, HexFormat::new(true, Shortening::Allow)),
            "#088"
        );
        assert_eq!(
            format_hex(&teal, HexFormat::new(true, Shortening::Force)),
            "#088"
        );

        let coral = from_24bit(0xff, 0x7f, 0x50);
        assert_eq!(
            format_hex(&coral, HexFormat::new(true, Shortening::Allow)),
            "#ff7f50"
        );
        assert_eq!(
            format_hex(&coral, HexFormat::new(false, Shortening::Force)),
            "f75"
        );
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), HexFormatError> {
        for hex in ["#000000", "#ffffff", "#a96590", "#010203", "#fedcba"] {
            let [r, g, b] = parse_hex(hex)?;
            assert_eq!(format_hex(&from_24bit(r, g, b), HexFormat::default()), hex);
        }

        let [r, g, b] = parse_hex("#ABC")?;
        assert_eq!(
            format_hex(&from_24bit(r, g, b), HexFormat::default()),
            "#aabbcc"
        );
        Ok(())
    }
}
