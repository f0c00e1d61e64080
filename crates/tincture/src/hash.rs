//! Deterministic colours for arbitrary data.
//!
//! The same data always maps to the same colour. That makes hash colours a
//! good fit for telling apart user names, tags, or hosts at a glance.
//!
//! The algorithm is fixed so that independent implementations produce the same
//! colours:
//!
//!  1. Convert the data to a string with its `Display` implementation.
//!  2. Compute the MD5 digest of the string's UTF-8 bytes.
//!  3. Read bytes `0..4`, `4..8`, and `8..12` of the digest as big-endian
//!     unsigned 32-bit integers and divide each by 2<sup>32</sup>. The
//!     resulting fractions select hue, saturation, and luma, in that order,
//!     from the [`HashBounds`].
//!  4. Create a colour from hue, saturation, and luma as HSV value. Then
//!     replace its luma with the selected luma, since HSV value and luma are
//!     not the same quantity.
//!
//! # Example
//!
//! ```
//! # use tincture::Colour;
//! # use tincture::hash::HashBounds;
//! # use tincture::error::ColourError;
//! let tremby = Colour::from_hash("tremby")?;
//! assert_eq!(tremby.hex(), "#a96590");
//!
//! let reddish = HashBounds::builder()
//!     .hue(-20.0, 20.0)
//!     .build()?;
//! let hue = Colour::from_hash_within("tremby", &reddish)?.hue();
//! assert!(hue <= 20.0 || 340.0 <= hue);
//! # Ok::<(), ColourError>(())
//! ```

use md5::{Digest, Md5};

use crate::core::{hsv_to_rgb, replace_luma};
use crate::error::{ColourError, LookupError, OutOfRangeError};
use crate::{Colour, Float};

/// 2<sup>32</sup>, the number of distinct values of a 32-bit word.
const WORD_VALUES: Float = 4_294_967_296.0;

#[derive(Clone, Copy, Debug, PartialEq)]
struct BoundsData {
    hue: [Float; 2],
    saturation: [Float; 2],
    luma: [Float; 2],
}

impl BoundsData {
    pub const fn new() -> Self {
        Self {
            hue: [0.0, 360.0],
            saturation: [0.2, 1.0],
            luma: [0.3, 0.7],
        }
    }
}

/// A builder of hash bounds.
#[derive(Debug)]
pub struct HashBoundsBuilder(BoundsData);

impl HashBoundsBuilder {
    /// Set the hue window in degrees.
    ///
    /// The window runs from `low` to `high`, so that `-20, 140` covers reds,
    /// yellows, and greens, whereas `140, 340` covers greens, blues, and
    /// purples. Bounds beyond ±360 are reduced modulo 360, keeping their sign.
    pub fn hue(&mut self, low: Float, high: Float) -> &mut Self {
        self.0.hue = [low, high];
        self
    }

    /// Set the saturation window. Both bounds must have unit range.
    pub fn saturation(&mut self, low: Float, high: Float) -> &mut Self {
        self.0.saturation = [low, high];
        self
    }

    /// Set the luma window. Both bounds must have unit range.
    pub fn luma(&mut self, low: Float, high: Float) -> &mut Self {
        self.0.luma = [low, high];
        self
    }

    /// Instantiate the hash bounds.
    ///
    /// This method fails if a hue bound is not finite, a saturation or luma
    /// bound falls outside unit range, or a saturation or luma window has its
    /// lower bound above its upper bound.
    pub fn build(&self) -> Result<HashBounds, OutOfRangeError> {
        let [mut low, mut high] = self.0.hue;
        for bound in [low, high] {
            if !bound.is_finite() {
                return Err(OutOfRangeError::new(bound, Float::MIN..=Float::MAX));
            }
        }

        if 360.0 < low.abs() {
            low %= 360.0;
        }
        if 360.0 < high.abs() {
            high %= 360.0;
        }

        let saturation = check_window(self.0.saturation)?;
        let luma = check_window(self.0.luma)?;

        Ok(HashBounds(BoundsData {
            hue: [low, high],
            saturation,
            luma,
        }))
    }
}

/// Ensure that the window is a subrange of unit range.
fn check_window(window: [Float; 2]) -> Result<[Float; 2], OutOfRangeError> {
    let [low, high] = window;
    OutOfRangeError::check(low, 0.0, 1.0)?;
    OutOfRangeError::check(high, 0.0, 1.0)?;
    OutOfRangeError::check(low, 0.0, high)?;
    Ok(window)
}

/// The bounds for hashing data to colours.
///
/// By default, hash colours may have any hue, saturation `0.2..=1.0` so as to
/// exclude near-greys, and luma `0.3..=0.7` so as to remain visible on both
/// black and white backgrounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HashBounds(BoundsData);

impl Default for HashBounds {
    fn default() -> Self {
        HashBounds(BoundsData::new())
    }
}

impl HashBounds {
    /// Create a new builder with the default bounds.
    pub fn builder() -> HashBoundsBuilder {
        HashBoundsBuilder(BoundsData::new())
    }

    /// Get the hue window in degrees.
    pub fn hue(&self) -> [Float; 2] {
        self.0.hue
    }

    /// Get the saturation window.
    pub fn saturation(&self) -> [Float; 2] {
        self.0.saturation
    }

    /// Get the luma window.
    pub fn luma(&self) -> [Float; 2] {
        self.0.luma
    }
}

// ====================================================================================================================

/// Convert the data to a string.
///
/// This function fails if the data's `Display` implementation fails.
pub(crate) fn stringify<T: std::fmt::Display + ?Sized>(data: &T) -> Result<String, LookupError> {
    use std::fmt::Write;

    let mut text = String::new();
    write!(text, "{}", data).map_err(|_| LookupError::Unprintable)?;
    Ok(text)
}

/// Determine hue, saturation, and luma for the given text.
fn to_hsy(text: &str, bounds: &HashBounds) -> [Float; 3] {
    let digest = Md5::digest(text.as_bytes());

    let mut fractions: [Float; 3] = [0.0; 3];
    for (fraction, chunk) in fractions.iter_mut().zip(digest.chunks_exact(4)) {
        let word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        *fraction = word as Float / WORD_VALUES;
    }

    let windows = [bounds.hue(), bounds.saturation(), bounds.luma()];
    let mut hsy: [Float; 3] = [0.0; 3];
    for ((value, fraction), [low, high]) in hsy.iter_mut().zip(fractions).zip(windows) {
        *value = fraction.mul_add(high - low, low);
    }

    log::trace!(
        "hashing {:?} to hue {}, saturation {}, luma {}",
        text,
        hsy[0],
        hsy[1],
        hsy[2]
    );

    hsy
}

/// Determine the RGB coordinates for the given text.
fn to_rgb(text: &str, bounds: &HashBounds) -> Result<[Float; 3], OutOfRangeError> {
    let [hue, saturation, luma] = to_hsy(text, bounds);
    let rgb = hsv_to_rgb(&[hue, saturation, luma])?;
    replace_luma(&rgb, luma)
}

impl Colour {
    /// Create a new colour for the given data with the default hash bounds.
    pub fn from_hash<T: std::fmt::Display + ?Sized>(data: &T) -> Result<Self, ColourError> {
        Self::from_hash_within(data, &HashBounds::default())
    }

    /// Create a new colour for the given data within the given hash bounds.
    pub fn from_hash_within<T: std::fmt::Display + ?Sized>(
        data: &T,
        bounds: &HashBounds,
    ) -> Result<Self, ColourError> {
        let mut colour = Self::new();
        colour.set_hash(data, bounds)?;
        Ok(colour)
    }

    /// Update this colour to the colour for the given data within the given
    /// hash bounds.
    pub fn set_hash<T: std::fmt::Display + ?Sized>(
        &mut self,
        data: &T,
        bounds: &HashBounds,
    ) -> Result<&mut Self, ColourError> {
        let text = stringify(data)?;
        let rgb = to_rgb(&text, bounds)?;
        Ok(self.commit(rgb))
    }
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::{stringify, to_hsy, HashBounds};
    use crate::error::{ColourError, LookupError, OutOfRangeError};
    use crate::{assert_close_enough, Colour, Float};

    #[test]
    fn test_tremby() -> Result<(), ColourError> {
        let tolerance = <Float as crate::core::FloatExt>::TOLERANCE;

        let [hue, saturation, luma] = to_hsy("tremby", &HashBounds::default());
        assert!((hue - 322.06471843644977).abs() < tolerance);
        assert!((saturation - 0.5392024593427778).abs() < tolerance);
        assert!((luma - 0.49496762556955215).abs() < tolerance);

        let colour = Colour::from_hash("tremby")?;
        assert_eq!(colour.hex(), "#a96590");
        assert!((colour.luma() - 0.49496762556955215).abs() < tolerance);

        // Again, and again.
        for _ in 0..3 {
            assert_eq!(Colour::from_hash("tremby")?, colour);
        }
        Ok(())
    }

    #[test]
    fn test_more_names() -> Result<(), ColourError> {
        assert_eq!(Colour::from_hash("yappy")?.hex(), "#3bc5d6");
        assert_eq!(Colour::from_hash("mon")?.hex(), "#a28254");
        assert_eq!(Colour::from_hash("bill")?.hex(), "#ff83c8");
        assert_eq!(Colour::from_hash(&42)?, Colour::from_hash("42")?);
        Ok(())
    }

    #[test]
    fn test_luma_window() -> Result<(), ColourError> {
        let bounds = HashBounds::default();
        for n in 0..200 {
            let luma = Colour::from_hash(&n)?.luma();
            assert!(
                bounds.luma()[0] - 1e-9 <= luma && luma <= bounds.luma()[1] + 1e-9,
                "luma {} of hash colour for {} is out of bounds",
                luma,
                n
            );
        }
        Ok(())
    }

    #[test]
    fn test_hue_window() -> Result<(), ColourError> {
        let bounds = HashBounds::builder().hue(-20.0, 20.0).build()?;
        assert_eq!(bounds.hue(), [-20.0, 20.0]);

        let [hue, _, _] = to_hsy("tremby", &bounds);
        assert!((hue - 15.784968715161085).abs() < 1e-9);
        assert_eq!(Colour::from_hash_within("tremby", &bounds)?.hex(), "#a3715f");

        let bounds = HashBounds::builder().hue(-380.0, 740.0).build()?;
        assert_close_enough!(bounds.hue()[0], -20.0);
        assert_close_enough!(bounds.hue()[1], 20.0);

        let bounds = HashBounds::builder().hue(0.0, 360.0).build()?;
        assert_eq!(bounds, HashBounds::default());
        Ok(())
    }

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            HashBounds::builder().saturation(0.8, 0.2).build(),
            Err(OutOfRangeError::new(0.8, 0.0..=0.2))
        );
        assert!(HashBounds::builder().luma(0.3, 1.2).build().is_err());
        assert!(HashBounds::builder().luma(-0.1, 0.5).build().is_err());
        assert!(HashBounds::builder().hue(Float::NAN, 0.0).build().is_err());
    }

    struct Unprintable;

    impl std::fmt::Display for Unprintable {
        fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn test_unprintable() {
        assert_eq!(stringify(&Unprintable), Err(LookupError::Unprintable));

        let mut colour = Colour::new();
        assert_eq!(
            colour.set_hash(&Unprintable, &HashBounds::default()),
            Err(ColourError::Lookup(LookupError::Unprintable))
        );
        assert_eq!(colour, Colour::new());
    }
}
