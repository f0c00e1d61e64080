use std::str::FromStr;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_hex, from_24bit, hsl_to_rgb, hsv_to_rgb, parse_hex, to_24bit, to_eq_coordinates,
    to_hsl, to_hsv, to_yiq, yiq_to_rgb, HexFormat, Scale,
};
use crate::error::{
    ArgumentConflictError, ColourError, HexFormatError, LookupError, OutOfRangeError,
};
use crate::hash::{stringify, HashBounds};
use crate::named::{css3_name, css3_to_24bit};
use crate::Float;

/// Three optional coordinates for updating a colour.
///
/// A missing coordinate leaves the colour's current value for that coordinate
/// as is. Complete arrays of coordinates convert into components as well:
///
/// ```
/// # use tincture::{Colour, Components};
/// # use tincture::error::ColourError;
/// let mut colour = Colour::from_rgb([0.2, 0.4, 0.6])?;
/// colour.set_rgb([None, Some(1.0), None])?;
/// assert_eq!(colour.rgb(), [0.2, 1.0, 0.6]);
///
/// colour.set_rgb([0.0, 0.0, 0.0])?;
/// assert_eq!(colour, Colour::new());
/// # Ok::<(), ColourError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Components(pub [Option<Float>; 3]);

impl Components {
    /// Create new components with only the first coordinate.
    pub const fn first(value: Float) -> Self {
        Self([Some(value), None, None])
    }

    /// Create new components with only the second coordinate.
    pub const fn second(value: Float) -> Self {
        Self([None, Some(value), None])
    }

    /// Create new components with only the third coordinate.
    pub const fn third(value: Float) -> Self {
        Self([None, None, Some(value)])
    }

    /// Fill in the missing coordinates from the current ones.
    fn merge(&self, current: [Float; 3]) -> [Float; 3] {
        let [c1, c2, c3] = self.0;
        [
            c1.unwrap_or(current[0]),
            c2.unwrap_or(current[1]),
            c3.unwrap_or(current[2]),
        ]
    }

    /// Convert each present coordinate with the corresponding function.
    fn try_map<F1, F2, F3>(&self, f1: F1, f2: F2, f3: F3) -> Result<Self, OutOfRangeError>
    where
        F1: Fn(Float) -> Result<Float, OutOfRangeError>,
        F2: Fn(Float) -> Result<Float, OutOfRangeError>,
        F3: Fn(Float) -> Result<Float, OutOfRangeError>,
    {
        let [c1, c2, c3] = self.0;
        Ok(Self([
            c1.map(f1).transpose()?,
            c2.map(f2).transpose()?,
            c3.map(f3).transpose()?,
        ]))
    }
}

impl From<[Float; 3]> for Components {
    fn from(value: [Float; 3]) -> Self {
        Self(value.map(Some))
    }
}

impl From<[Option<Float>; 3]> for Components {
    fn from(value: [Option<Float>; 3]) -> Self {
        Self(value)
    }
}

impl From<(Option<Float>, Option<Float>, Option<Float>)> for Components {
    fn from(value: (Option<Float>, Option<Float>, Option<Float>)) -> Self {
        Self([value.0, value.1, value.2])
    }
}

// ====================================================================================================================

/// A colour specification.
///
/// Each variant is one way of specifying a colour. [`Colour::from_spec`] turns
/// a specification into a colour, validating its arguments in the process.
/// Unlike scanning a single argument for its shape, the variant makes the
/// intent explicit: A three-character string is a hexadecimal colour when
/// wrapped as [`Spec::Hex`] and the hashed data when wrapped as
/// [`Spec::Hash`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Spec {
    /// Black.
    #[default]
    Black,
    /// A grey with the given intensity.
    Grey(Float),
    /// RGB coordinates with unit range.
    Rgb([Float; 3]),
    /// RGB coordinates on the given scale.
    RgbIn([Float; 3], Scale),
    /// HSV coordinates with hue in degrees.
    Hsv([Float; 3]),
    /// HSV coordinates with hue and the other two coordinates on their own
    /// scales.
    HsvIn([Float; 3], Scale, Scale),
    /// HSL coordinates with hue in degrees.
    Hsl([Float; 3]),
    /// HSL coordinates with hue and the other two coordinates on their own
    /// scales.
    HslIn([Float; 3], Scale, Scale),
    /// YIQ coordinates.
    Yiq([Float; 3]),
    /// A hexadecimal string.
    Hex(String),
    /// A CSS3 colour name.
    Css3(String),
    /// The string form of some data, hashed within the given bounds.
    Hash(String, HashBounds),
    /// A copy of another colour.
    Copy(Colour),
}

impl Spec {
    /// Create a hash specification for the given data.
    ///
    /// This method converts the data to a string with its `Display`
    /// implementation, failing if that implementation fails.
    pub fn hash<T: std::fmt::Display + ?Sized>(
        data: &T,
        bounds: HashBounds,
    ) -> Result<Self, LookupError> {
        Ok(Self::Hash(stringify(data)?, bounds))
    }

    /// Get the name of this specification's mode.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Black => "black",
            Self::Grey(_) => "grey",
            Self::Rgb(_) | Self::RgbIn(..) => "rgb",
            Self::Hsv(_) | Self::HsvIn(..) => "hsv",
            Self::Hsl(_) | Self::HslIn(..) => "hsl",
            Self::Yiq(_) => "yiq",
            Self::Hex(_) => "hex",
            Self::Css3(_) => "css3",
            Self::Hash(..) => "hash",
            Self::Copy(_) => "copy",
        }
    }
}

/// A builder of colours.
///
/// The builder accepts at most one colour specification. Building a colour
/// after specifying more than one fails with an
/// [`ArgumentConflictError`](crate::error::ArgumentConflictError), even if
/// the individual specifications are invalid as well. Building a colour
/// without any specification produces black.
///
/// ```
/// # use tincture::Colour;
/// # use tincture::error::{ArgumentConflictError, ColourError};
/// let teal = Colour::builder().hex("#008080").build()?;
/// assert_eq!(teal.css3(), Some("teal"));
///
/// let conflict = Colour::builder().hex("#008080").css3("teal").build();
/// assert_eq!(
///     conflict,
///     Err(ColourError::ArgumentConflict(ArgumentConflictError::new("hex", "css3")))
/// );
/// # Ok::<(), ColourError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ColourBuilder {
    spec: Option<Result<Spec, ColourError>>,
    conflict: Option<ArgumentConflictError>,
}

impl ColourBuilder {
    fn push(&mut self, name: &'static str, spec: Result<Spec, ColourError>) -> &mut Self {
        if self.spec.is_none() {
            self.spec = Some(spec);
        } else if self.conflict.is_none() {
            // Only hashing fails before build().
            let first = match &self.spec {
                Some(Ok(first)) => first.name(),
                _ => "hash",
            };
            self.conflict = Some(ArgumentConflictError::new(first, name));
        }
        self
    }

    /// Specify a grey with the given intensity.
    pub fn grey(&mut self, intensity: Float) -> &mut Self {
        self.push("grey", Ok(Spec::Grey(intensity)))
    }

    /// Specify RGB coordinates with unit range.
    pub fn rgb(&mut self, rgb: [Float; 3]) -> &mut Self {
        self.push("rgb", Ok(Spec::Rgb(rgb)))
    }

    /// Specify RGB coordinates on the given scale.
    pub fn rgb_in(&mut self, rgb: [Float; 3], scale: Scale) -> &mut Self {
        self.push("rgb", Ok(Spec::RgbIn(rgb, scale)))
    }

    /// Specify HSV coordinates with hue in degrees.
    pub fn hsv(&mut self, hsv: [Float; 3]) -> &mut Self {
        self.push("hsv", Ok(Spec::Hsv(hsv)))
    }

    /// Specify HSV coordinates on the given scales.
    pub fn hsv_in(&mut self, hsv: [Float; 3], hue: Scale, scale: Scale) -> &mut Self {
        self.push("hsv", Ok(Spec::HsvIn(hsv, hue, scale)))
    }

    /// Specify HSL coordinates with hue in degrees.
    pub fn hsl(&mut self, hsl: [Float; 3]) -> &mut Self {
        self.push("hsl", Ok(Spec::Hsl(hsl)))
    }

    /// Specify HSL coordinates on the given scales.
    pub fn hsl_in(&mut self, hsl: [Float; 3], hue: Scale, scale: Scale) -> &mut Self {
        self.push("hsl", Ok(Spec::HslIn(hsl, hue, scale)))
    }

    /// Specify YIQ coordinates.
    pub fn yiq(&mut self, yiq: [Float; 3]) -> &mut Self {
        self.push("yiq", Ok(Spec::Yiq(yiq)))
    }

    /// Specify a hexadecimal string.
    pub fn hex(&mut self, hex: &str) -> &mut Self {
        self.push("hex", Ok(Spec::Hex(hex.to_owned())))
    }

    /// Specify a CSS3 colour name.
    pub fn css3(&mut self, name: &str) -> &mut Self {
        self.push("css3", Ok(Spec::Css3(name.to_owned())))
    }

    /// Specify data to be hashed within the default bounds.
    pub fn hash<T: std::fmt::Display + ?Sized>(&mut self, data: &T) -> &mut Self {
        self.hash_within(data, HashBounds::default())
    }

    /// Specify data to be hashed within the given bounds.
    pub fn hash_within<T: std::fmt::Display + ?Sized>(
        &mut self,
        data: &T,
        bounds: HashBounds,
    ) -> &mut Self {
        let spec = Spec::hash(data, bounds).map_err(ColourError::from);
        self.push("hash", spec)
    }

    /// Specify a colour to copy.
    pub fn copy(&mut self, colour: &Colour) -> &mut Self {
        self.push("copy", Ok(Spec::Copy(*colour)))
    }

    /// Instantiate the colour.
    pub fn build(&self) -> Result<Colour, ColourError> {
        if let Some(conflict) = self.conflict {
            return Err(conflict.into());
        }

        match &self.spec {
            None => Ok(Colour::new()),
            Some(Ok(spec)) => Colour::from_spec(spec),
            Some(Err(error)) => Err(error.clone()),
        }
    }
}

// ====================================================================================================================

/// A colour.
///
/// Every colour object stores three RGB coordinates with unit range. All
/// other representations, HSV, HSL, YIQ, hexadecimal strings, and CSS3 names,
/// are computed from these coordinates on demand and written back to them on
/// update. Hence there is exactly one source of truth.
///
/// # Reading and Writing Coordinates
///
/// For each colour model, a getter such as [`Colour::hsv`] returns the
/// canonical coordinates, i.e., unit range except for hues, which are in
/// degrees `0..360`. A getter with `_in` suffix, such as [`Colour::hsv_in`],
/// maps them onto [`Scale`]s instead.
///
/// The corresponding setters accept [`Components`], so that they can update
/// some coordinates while leaving others as is. They validate all coordinates
/// before updating the colour. If they fail, the colour is unchanged. Hues are
/// circular and may have any finite magnitude.
///
/// Setters return a mutable reference to the colour, so that updates can be
/// chained. Since colours are `Copy`, an independent copy is only an
/// assignment away.
///
/// ```
/// # use tincture::{Colour, Components, Scale};
/// # use tincture::error::ColourError;
/// let mut colour = Colour::from_css3("goldenrod")?;
/// assert_eq!(colour.rgb_in(Scale::BYTE), [218.0, 165.0, 32.0]);
///
/// let original = colour;
/// colour
///     .set_rgb_in([None, Some(255.0), None], Scale::BYTE)?
///     .set_hsv(Components::first(200.0))?;
/// assert_ne!(colour, original);
/// assert!((colour.hsv()[0] - 200.0).abs() < 1e-9);
/// # Ok::<(), ColourError>(())
/// ```
///
/// # Equality Testing and Hashing
///
/// Two colours are equal if their RGB coordinates are equal after rounding
/// away the least significant decimal digits. Hashing performs the same
/// normalization, so that equal colours also have equal hashes.
#[cfg_attr(feature = "pyffi", pyclass(eq, module = "tincture"))]
#[derive(Clone, Copy)]
pub struct Colour {
    rgb: [Float; 3],
}

impl Colour {
    /// Create a new black colour.
    pub const fn new() -> Self {
        Self { rgb: [0.0, 0.0, 0.0] }
    }

    /// Create a new colour from the specification.
    pub fn from_spec(spec: &Spec) -> Result<Self, ColourError> {
        let colour = match spec {
            Spec::Black => Self::new(),
            Spec::Grey(intensity) => Self::from_grey(*intensity)?,
            Spec::Rgb(rgb) => Self::from_rgb(*rgb)?,
            Spec::RgbIn(rgb, scale) => *Self::new().set_rgb_in(*rgb, *scale)?,
            Spec::Hsv(hsv) => Self::from_hsv(*hsv)?,
            Spec::HsvIn(hsv, hue, scale) => *Self::new().set_hsv_in(*hsv, *hue, *scale)?,
            Spec::Hsl(hsl) => Self::from_hsl(*hsl)?,
            Spec::HslIn(hsl, hue, scale) => *Self::new().set_hsl_in(*hsl, *hue, *scale)?,
            Spec::Yiq(yiq) => Self::from_yiq(*yiq)?,
            Spec::Hex(hex) => Self::from_hex(hex)?,
            Spec::Css3(name) => Self::from_css3(name)?,
            Spec::Hash(text, bounds) => Self::from_hash_within(text, bounds)?,
            Spec::Copy(colour) => *colour,
        };

        Ok(colour)
    }

    /// Create a new colour builder.
    pub fn builder() -> ColourBuilder {
        ColourBuilder::default()
    }

    /// Create a new grey with the given intensity.
    pub fn from_grey(intensity: Float) -> Result<Self, OutOfRangeError> {
        let intensity = OutOfRangeError::check(intensity, 0.0, 1.0)?;
        Ok(Self {
            rgb: [intensity, intensity, intensity],
        })
    }

    /// Create a new colour from RGB coordinates with unit range.
    pub fn from_rgb(rgb: [Float; 3]) -> Result<Self, OutOfRangeError> {
        for c in rgb {
            OutOfRangeError::check(c, 0.0, 1.0)?;
        }
        Ok(Self { rgb })
    }

    /// Create a new colour from 24-bit RGB coordinates.
    ///
    /// ```
    /// # use tincture::Colour;
    /// let orange = Colour::from_24bit(0xff, 0xa5, 0x00);
    /// assert_eq!(orange.hex(), "#ffa500");
    /// assert_eq!(orange.css3(), Some("orange"));
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: from_24bit(r, g, b),
        }
    }

    /// Create a new colour from HSV coordinates with hue in degrees.
    pub fn from_hsv(hsv: [Float; 3]) -> Result<Self, OutOfRangeError> {
        hsv_to_rgb(&hsv).map(|rgb| Self { rgb })
    }

    /// Create a new colour from HSL coordinates with hue in degrees.
    pub fn from_hsl(hsl: [Float; 3]) -> Result<Self, OutOfRangeError> {
        hsl_to_rgb(&hsl).map(|rgb| Self { rgb })
    }

    /// Create a new colour from YIQ coordinates.
    pub fn from_yiq(yiq: [Float; 3]) -> Result<Self, OutOfRangeError> {
        yiq_to_rgb(&yiq).map(|rgb| Self { rgb })
    }

    /// Create a new colour from a hexadecimal string.
    pub fn from_hex(hex: &str) -> Result<Self, HexFormatError> {
        let [r, g, b] = parse_hex(hex)?;
        Ok(Self::from_24bit(r, g, b))
    }

    /// Create a new colour from a CSS3 colour name, ignoring ASCII case.
    pub fn from_css3(name: &str) -> Result<Self, LookupError> {
        let [r, g, b] = css3_to_24bit(name)?;
        Ok(Self::from_24bit(r, g, b))
    }

    /// Replace the RGB coordinates, which must have been validated.
    #[inline]
    pub(crate) fn commit(&mut self, rgb: [Float; 3]) -> &mut Self {
        self.rgb = rgb;
        self
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the RGB coordinates.
    #[inline]
    pub fn rgb(&self) -> [Float; 3] {
        self.rgb
    }

    /// Get the RGB coordinates on the given scale.
    pub fn rgb_in(&self, scale: Scale) -> [Float; 3] {
        self.rgb.map(|c| scale.to_scaled(c))
    }

    /// Update the RGB coordinates.
    pub fn set_rgb<C: Into<Components>>(&mut self, rgb: C) -> Result<&mut Self, ColourError> {
        let rgb = rgb.into().merge(self.rgb);
        let colour = Self::from_rgb(rgb)?;
        Ok(self.commit(colour.rgb))
    }

    /// Update the RGB coordinates on the given scale.
    pub fn set_rgb_in<C: Into<Components>>(
        &mut self,
        rgb: C,
        scale: Scale,
    ) -> Result<&mut Self, ColourError> {
        let convert = |c| scale.to_unit(c);
        let rgb = rgb.into().try_map(convert, convert, convert)?;
        self.set_rgb(rgb)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the HSV coordinates, with hue in degrees.
    pub fn hsv(&self) -> [Float; 3] {
        to_hsv(&self.rgb)
    }

    /// Get the HSV coordinates, with hue on the first scale and saturation as
    /// well as value on the second scale.
    pub fn hsv_in(&self, hue: Scale, scale: Scale) -> [Float; 3] {
        scale_hsx(self.hsv(), hue, scale)
    }

    /// Update the HSV coordinates, with hue in degrees.
    pub fn set_hsv<C: Into<Components>>(&mut self, hsv: C) -> Result<&mut Self, ColourError> {
        let hsv = hsv.into().merge(self.hsv());
        let rgb = hsv_to_rgb(&hsv)?;
        Ok(self.commit(rgb))
    }

    /// Update the HSV coordinates, with hue on the first scale and saturation
    /// as well as value on the second scale.
    pub fn set_hsv_in<C: Into<Components>>(
        &mut self,
        hsv: C,
        hue: Scale,
        scale: Scale,
    ) -> Result<&mut Self, ColourError> {
        let hsv = unscale_hsx(hsv.into(), hue, scale)?;
        self.set_hsv(hsv)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the HSL coordinates, with hue in degrees.
    pub fn hsl(&self) -> [Float; 3] {
        to_hsl(&self.rgb)
    }

    /// Get the HSL coordinates, with hue on the first scale and saturation as
    /// well as lightness on the second scale.
    pub fn hsl_in(&self, hue: Scale, scale: Scale) -> [Float; 3] {
        scale_hsx(self.hsl(), hue, scale)
    }

    /// Update the HSL coordinates, with hue in degrees.
    pub fn set_hsl<C: Into<Components>>(&mut self, hsl: C) -> Result<&mut Self, ColourError> {
        let hsl = hsl.into().merge(self.hsl());
        let rgb = hsl_to_rgb(&hsl)?;
        Ok(self.commit(rgb))
    }

    /// Update the HSL coordinates, with hue on the first scale and saturation
    /// as well as lightness on the second scale.
    pub fn set_hsl_in<C: Into<Components>>(
        &mut self,
        hsl: C,
        hue: Scale,
        scale: Scale,
    ) -> Result<&mut Self, ColourError> {
        let hsl = unscale_hsx(hsl.into(), hue, scale)?;
        self.set_hsl(hsl)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the YIQ coordinates.
    ///
    /// Luma has unit range. In-phase and quadrature components have range
    /// `-1..=1`, though colours inside the RGB cube only reach about ±0.6.
    pub fn yiq(&self) -> [Float; 3] {
        to_yiq(&self.rgb)
    }

    /// Get the YIQ coordinates, with luma on the first scale and the in-phase
    /// as well as quadrature components mapped from `-1..=1` onto the second
    /// scale.
    pub fn yiq_in(&self, luma: Scale, chroma: Scale) -> [Float; 3] {
        let [y, i, q] = self.yiq();
        [
            luma.to_scaled(y),
            chroma.to_scaled(i.mul_add(0.5, 0.5)),
            chroma.to_scaled(q.mul_add(0.5, 0.5)),
        ]
    }

    /// Update the YIQ coordinates.
    ///
    /// Not every combination of valid YIQ coordinates falls into the RGB cube.
    /// For such combinations, this method keeps the luma and reduces the
    /// in-phase and quadrature components just enough to reach the cube.
    pub fn set_yiq<C: Into<Components>>(&mut self, yiq: C) -> Result<&mut Self, ColourError> {
        let yiq = yiq.into().merge(self.yiq());
        let rgb = yiq_to_rgb(&yiq)?;
        Ok(self.commit(rgb))
    }

    /// Update the YIQ coordinates, with luma on the first scale and in-phase as
    /// well as quadrature components on the second scale.
    pub fn set_yiq_in<C: Into<Components>>(
        &mut self,
        yiq: C,
        luma: Scale,
        chroma: Scale,
    ) -> Result<&mut Self, ColourError> {
        let to_signed = |c| chroma.to_unit(c).map(|u| u.mul_add(2.0, -1.0));
        let yiq = yiq
            .into()
            .try_map(|c| luma.to_unit(c), to_signed, to_signed)?;
        self.set_yiq(yiq)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the intensity, if this colour is a grey.
    ///
    /// A colour is grey if all three RGB coordinates are the same. For other
    /// colours, this method returns `None`.
    pub fn grey(&self) -> Option<Float> {
        let [r, g, b] = self.rgb;
        if r == g && g == b {
            Some(r)
        } else {
            None
        }
    }

    /// Get the intensity on the given scale, if this colour is a grey.
    pub fn grey_in(&self, scale: Scale) -> Option<Float> {
        self.grey().map(|intensity| scale.to_scaled(intensity))
    }

    /// Update this colour to a grey with the given intensity.
    pub fn set_grey(&mut self, intensity: Float) -> Result<&mut Self, ColourError> {
        let colour = Self::from_grey(intensity)?;
        Ok(self.commit(colour.rgb))
    }

    /// Update this colour to a grey with the given intensity on the given
    /// scale.
    pub fn set_grey_in(&mut self, intensity: Float, scale: Scale) -> Result<&mut Self, ColourError> {
        let intensity = scale.to_unit(intensity)?;
        self.set_grey(intensity)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this colour to 24-bit RGB representation.
    pub fn to_24bit(&self) -> [u8; 3] {
        to_24bit(&self.rgb)
    }

    /// Format this colour in familiar `#123abc` hexadecimal notation.
    pub fn hex(&self) -> String {
        format_hex(&self.rgb, HexFormat::default())
    }

    /// Format this colour in hexadecimal notation with the given options.
    ///
    /// ```
    /// # use tincture::{Colour, HexFormat, Shortening};
    /// let colour = Colour::from_24bit(0x33, 0x99, 0xff);
    /// assert_eq!(colour.to_hex(HexFormat::new(true, Shortening::Allow)), "#39f");
    ///
    /// let colour = Colour::from_24bit(0x34, 0x99, 0xff);
    /// assert_eq!(colour.to_hex(HexFormat::new(false, Shortening::Allow)), "3499ff");
    /// assert_eq!(colour.to_hex(HexFormat::new(false, Shortening::Force)), "39f");
    /// ```
    pub fn to_hex(&self, format: HexFormat) -> String {
        format_hex(&self.rgb, format)
    }

    /// Update this colour from a hexadecimal string.
    pub fn set_hex(&mut self, hex: &str) -> Result<&mut Self, ColourError> {
        let colour = Self::from_hex(hex)?;
        Ok(self.commit(colour.rgb))
    }

    /// Get the CSS3 name of this colour.
    ///
    /// This method compares the 24-bit coordinates of this colour with those of
    /// all CSS3 colours. It returns the first matching name in alphabetical
    /// order or `None` if no colour matches exactly.
    pub fn css3(&self) -> Option<&'static str> {
        css3_name(self.to_24bit())
    }

    /// Update this colour from a CSS3 colour name, ignoring ASCII case.
    pub fn set_css3(&mut self, name: &str) -> Result<&mut Self, ColourError> {
        let colour = Self::from_css3(name)?;
        Ok(self.commit(colour.rgb))
    }
}

/// Map canonical HSV/HSL coordinates onto the given scales.
fn scale_hsx(hsx: [Float; 3], hue: Scale, scale: Scale) -> [Float; 3] {
    let [h, s, x] = hsx;
    [
        hue.to_scaled(h / 360.0),
        scale.to_scaled(s),
        scale.to_scaled(x),
    ]
}

/// Map HSV/HSL components on the given scales back to canonical components.
fn unscale_hsx(hsx: Components, hue: Scale, scale: Scale) -> Result<Components, OutOfRangeError> {
    hsx.try_map(
        |h| hue.wrap_to_unit(h).map(|u| u * 360.0),
        |s| scale.to_unit(s),
        |x| scale.to_unit(x),
    )
}

// ====================================================================================================================

impl Default for Colour {
    /// Create a new black colour.
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Colour {
    type Err = HexFormatError;

    /// Parse a hexadecimal string.
    ///
    /// CSS3 names are not recognized here, use [`Colour::from_css3`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for Colour {
    type Error = HexFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Colour::from_str(value)
    }
}

impl TryFrom<Spec> for Colour {
    type Error = ColourError;

    fn try_from(value: Spec) -> Result<Self, Self::Error> {
        Colour::from_spec(&value)
    }
}

impl AsRef<[Float; 3]> for Colour {
    fn as_ref(&self) -> &[Float; 3] {
        &self.rgb
    }
}

impl std::hash::Hash for Colour {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_coordinates(&self.rgb).hash(state);
    }
}

impl PartialEq for Colour {
    /// Determine whether this colour equals the other colour.
    ///
    /// This method zeroes out not-a-numbers, rounds away the least significant
    /// decimal digits, and drops the sign of negative zero before comparing
    /// RGB coordinates as bit strings. [`Colour`]'s implementation of `Hash`
    /// performs the very same steps.
    ///
    /// ```
    /// # use tincture::Colour;
    /// # use tincture::error::ColourError;
    /// let a = Colour::from_rgb([0.1 + 0.2, 0.5, 0.5])?;
    /// let b = Colour::from_rgb([0.3, 0.5, 0.5])?;
    /// assert_eq!(a, b);
    /// # Ok::<(), ColourError>(())
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.rgb == other.rgb {
            return true;
        }

        to_eq_coordinates(&self.rgb) == to_eq_coordinates(&other.rgb)
    }
}

impl Eq for Colour {}

impl std::fmt::Debug for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.rgb;
        f.write_fmt(format_args!("Colour([{}, {}, {}])", r, g, b))
    }
}

impl std::fmt::Display for Colour {
    /// Format this colour in `#123abc` hexadecimal notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

// ====================================================================================================================

#[cfg(feature = "pyffi")]
#[pymethods]
impl Colour {
    /// Create a new colour from a hexadecimal string or CSS3 name. <i
    /// class=python-only>Python only!</i>
    ///
    /// Without argument, the colour is black.
    #[new]
    #[pyo3(signature = (spec=None))]
    pub fn py_new(spec: Option<&str>) -> Result<Self, ColourError> {
        let Some(text) = spec else {
            return Ok(Self::new());
        };

        Self::from_hex(text)
            .or_else(|_| Self::from_css3(text))
            .map_err(ColourError::from)
    }

    /// Create a new colour from RGB coordinates with unit range. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_rgb")]
    pub fn py_from_rgb(rgb: [Float; 3]) -> Result<Self, ColourError> {
        Ok(Self::from_rgb(rgb)?)
    }

    /// Create a new colour from HSV coordinates. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hsv")]
    pub fn py_from_hsv(hsv: [Float; 3]) -> Result<Self, ColourError> {
        Ok(Self::from_hsv(hsv)?)
    }

    /// Create a new colour from HSL coordinates. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hsl")]
    pub fn py_from_hsl(hsl: [Float; 3]) -> Result<Self, ColourError> {
        Ok(Self::from_hsl(hsl)?)
    }

    /// Create a new colour from YIQ coordinates. <i class=python-only>Python
    /// only!</i>
    #[staticmethod]
    #[pyo3(name = "from_yiq")]
    pub fn py_from_yiq(yiq: [Float; 3]) -> Result<Self, ColourError> {
        Ok(Self::from_yiq(yiq)?)
    }

    /// Create a new colour for the string with the default hash bounds. <i
    /// class=python-only>Python only!</i>
    #[staticmethod]
    #[pyo3(name = "from_hash")]
    pub fn py_from_hash(text: &str) -> Result<Self, ColourError> {
        Self::from_hash(text)
    }

    /// Get the RGB coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "rgb")]
    pub fn py_rgb(&self) -> [Float; 3] {
        self.rgb
    }

    /// Get the HSV coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "hsv")]
    pub fn py_hsv(&self) -> [Float; 3] {
        self.hsv()
    }

    /// Get the HSL coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "hsl")]
    pub fn py_hsl(&self) -> [Float; 3] {
        self.hsl()
    }

    /// Get the YIQ coordinates. <i class=python-only>Python only!</i>
    #[pyo3(name = "yiq")]
    pub fn py_yiq(&self) -> [Float; 3] {
        self.yiq()
    }

    /// Get the luma. <i class=python-only>Python only!</i>
    #[pyo3(name = "luma")]
    pub fn py_luma(&self) -> Float {
        self.luma()
    }

    /// Format this colour in hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "hex")]
    pub fn py_hex(&self) -> String {
        self.hex()
    }

    /// Get the CSS3 name of this colour. <i class=python-only>Python only!</i>
    #[pyo3(name = "css3")]
    pub fn py_css3(&self) -> Option<&'static str> {
        self.css3()
    }

    /// Get the more readable text colour for this colour as background. <i
    /// class=python-only>Python only!</i>
    #[must_use]
    #[pyo3(name = "foreground")]
    pub fn py_foreground(&self) -> Self {
        self.foreground()
    }

    /// Create a copy of this colour mixed with the other colour. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "mix")]
    pub fn py_mix(&self, other: &Colour, proportion: Float) -> Result<Self, ColourError> {
        let mut colour = *self;
        colour.mix(other, proportion)?;
        Ok(colour)
    }

    /// Render this colour as HTML swatch. <i class=python-only>Python only!</i>
    #[pyo3(name = "swatch", signature = (show_hex=true, css_class=None))]
    pub fn py_swatch(&self, show_hex: bool, css_class: Option<&str>) -> String {
        let mut builder = crate::SwatchOptions::builder();
        builder.show_hex(show_hex);
        if let Some(class) = css_class {
            builder.css_class(class);
        }
        self.swatch(&builder.build())
    }

    /// Convert this colour to its debug representation. <i
    /// class=python-only>Python only!</i>
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Convert this colour to its hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    pub fn __str__(&self) -> String {
        self.hex()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{Colour, Components, Spec};
    use crate::core::assert_same_coordinates;
    use crate::error::{
        ArgumentConflictError, ColourError, HexFormatError, LookupError, OutOfRangeError,
    };
    use crate::hash::HashBounds;
    use crate::{assert_close_enough, Float, Scale};

    #[test]
    fn test_red() -> Result<(), ColourError> {
        let red = Colour::from_hex("#ff0000")?;
        assert_eq!(red.rgb_in(Scale::BYTE), [255.0, 0.0, 0.0]);
        assert_eq!(red.to_24bit(), [255, 0, 0]);
        assert_eq!(red.hsv(), [0.0, 1.0, 1.0]);
        assert_close_enough!(red.yiq()[0], 0.299);
        assert_eq!(red.css3(), Some("red"));
        assert_eq!(red.to_string(), "#ff0000");
        Ok(())
    }

    #[test]
    fn test_from_spec() -> Result<(), ColourError> {
        assert_eq!(Colour::from_spec(&Spec::Black)?, Colour::new());
        assert_eq!(Colour::from_spec(&Spec::Grey(0.5))?.grey(), Some(0.5));
        assert_eq!(
            Colour::from_spec(&Spec::RgbIn([255.0, 23.0, 0.0], Scale::BYTE))?.hex(),
            "#ff1700"
        );
        assert_eq!(
            Colour::from_spec(&Spec::RgbIn([4.0, 6.9, 3.5], Scale::from(3.5..=7.0)))?.to_24bit(),
            [36, 248, 0]
        );
        assert_eq!(
            Colour::from_spec(&Spec::HsvIn(
                [180.0, 100.0, 100.0],
                Scale::DEGREES,
                Scale::PERCENT
            ))?
            .hex(),
            "#00ffff"
        );
        assert_eq!(
            Colour::from_spec(&Spec::Hsl([240.0, 1.0, 0.5]))?.hex(),
            "#0000ff"
        );
        assert_eq!(
            Colour::from_spec(&Spec::Hex("c09".to_owned()))?.hex(),
            "#cc0099"
        );
        assert_eq!(
            Colour::from_spec(&Spec::Css3("SPRINGGREEN".to_owned()))?.hex(),
            "#00ff7f"
        );
        assert_eq!(
            Colour::from_spec(&Spec::hash("tremby", HashBounds::default())?)?.hex(),
            "#a96590"
        );

        let midnight = Colour::from_css3("midnightblue")?;
        assert_eq!(Colour::from_spec(&Spec::Copy(midnight))?, midnight);
        Ok(())
    }

    #[test]
    fn test_builder() -> Result<(), ColourError> {
        assert_eq!(Colour::builder().build()?, Colour::new());
        assert_eq!(
            Colour::builder().css3("darkorchid").build()?.hex(),
            "#9932cc"
        );

        assert_eq!(
            Colour::builder().grey(0.5).rgb([0.1, 0.2, 0.3]).build(),
            Err(ColourError::ArgumentConflict(ArgumentConflictError::new(
                "grey", "rgb"
            )))
        );

        // Conflicts take precedence over invalid arguments.
        assert_eq!(
            Colour::builder().hex("zzz").css3("notacolour").build(),
            Err(ColourError::ArgumentConflict(ArgumentConflictError::new(
                "hex", "css3"
            )))
        );
        assert_eq!(
            Colour::builder().hex("zzz").build(),
            Err(ColourError::HexFormat(HexFormatError::MalformedHex))
        );
        Ok(())
    }

    #[test]
    fn test_errors_leave_colour_unchanged() -> Result<(), ColourError> {
        let mut colour = Colour::from_css3("goldenrod")?;
        let original = colour;

        assert_eq!(
            colour.set_rgb([1.5, 0.0, 0.0]).map(|c| *c),
            Err(ColourError::OutOfRange(OutOfRangeError::new(1.5, 0.0..=1.0)))
        );
        assert!(colour.set_rgb([Some(0.0), None, Some(-0.1)]).is_err());
        assert!(colour.set_rgb_in([256.0, 0.0, 0.0], Scale::BYTE).is_err());
        assert!(colour.set_hsv([None, Some(1.2), None]).is_err());
        assert!(colour.set_hsl([Float::NAN, 0.5, 0.5]).is_err());
        assert!(colour.set_yiq([None, Some(-1.5), None]).is_err());
        assert!(colour.set_grey(2.0).is_err());
        assert_eq!(
            colour.set_hex("zzz").map(|c| *c),
            Err(ColourError::HexFormat(HexFormatError::MalformedHex))
        );
        assert_eq!(
            colour.set_css3("notacolour").map(|c| *c),
            Err(ColourError::Lookup(LookupError::UnknownName))
        );
        assert_eq!(colour, original);

        assert!(Colour::from_rgb([1.5, 0.0, 0.0]).is_err());
        Ok(())
    }

    #[test]
    fn test_partial_update() -> Result<(), ColourError> {
        let mut colour = Colour::from_24bit(0x22, 0x88, 0xcc);
        let [_, saturation, value] = colour.hsv();

        colour.set_hsv(Components::first(20.0))?;
        let [hue, s, v] = colour.hsv();
        assert_close_enough!(hue, 20.0);
        assert_close_enough!(s, saturation);
        assert_close_enough!(v, value);

        let [hue, _, lightness] = colour.hsl();
        colour.set_hsl([None, Some(0.25), None])?;
        assert_same_coordinates!(colour.hsl(), [hue, 0.25, lightness]);

        let [luma, i, _] = colour.yiq();
        colour.set_yiq(Components::third(0.0))?;
        assert_same_coordinates!(colour.yiq(), [luma, i, 0.0]);
        Ok(())
    }

    #[test]
    fn test_hue_is_circular() -> Result<(), ColourError> {
        let mut c1 = Colour::from_24bit(0x22, 0x88, 0xcc);
        let mut c2 = c1;
        c1.set_hsv(Components::first(380.0))?;
        c2.set_hsv(Components::first(20.0))?;
        assert_eq!(c1, c2);

        c1.set_hsl_in(Components::first(-50.0), Scale::PERCENT, Scale::PERCENT)?;
        assert_close_enough!(c1.hsl()[0], 180.0);
        Ok(())
    }

    #[test]
    fn test_scaled() -> Result<(), ColourError> {
        let colour = Colour::from_css3("goldenrod")?;
        assert_eq!(colour.rgb_in(Scale::BYTE), [218.0, 165.0, 32.0]);
        assert_eq!(colour.rgb_in(Scale::from(10..=30)), [27.0, 23.0, 13.0]);
        assert_same_coordinates!(
            colour.rgb_in(Scale::from(10.0..=30.0)),
            [
                27.098039215686274,
                22.941176470588236,
                12.509803921568627
            ]
        );
        assert_eq!(
            colour.hsv_in(Scale::from(0..=360), Scale::PERCENT),
            [43.0, 85.0, 85.0]
        );

        let [y, i, q] = colour.yiq_in(Scale::PERCENT, Scale::from(-100..=100));
        let [y0, i0, q0] = colour.yiq();
        assert_eq!(y, (y0 * 100.0).round_ties_even());
        assert_eq!(i, (i0 * 100.0).round_ties_even());
        assert_eq!(q, (q0 * 100.0).round_ties_even());

        let mut copy = colour;
        copy.set_yiq_in(
            colour.yiq_in(Scale::UNIT, Scale::SIGNED_UNIT),
            Scale::UNIT,
            Scale::SIGNED_UNIT,
        )?;
        assert_same_coordinates!(copy.rgb(), colour.rgb());
        Ok(())
    }

    #[test]
    fn test_grey() -> Result<(), ColourError> {
        let mut colour = Colour::from_grey(0.25)?;
        assert_eq!(colour.grey(), Some(0.25));
        assert_eq!(colour.grey_in(Scale::PERCENT), Some(25.0));
        assert_eq!(colour.hsv()[1], 0.0);

        colour.set_grey_in(51.0, Scale::BYTE)?;
        assert_eq!(colour.hex(), "#333333");
        assert_eq!(Colour::from_24bit(1, 2, 3).grey(), None);
        Ok(())
    }

    #[test]
    fn test_css3() -> Result<(), ColourError> {
        assert_eq!(Colour::from_css3("cyan")?, Colour::from_css3("aqua")?);
        assert_eq!(Colour::from_css3("cyan")?.css3(), Some("aqua"));
        assert_eq!(Colour::from_css3("DarkGrey")?.css3(), Some("darkgray"));
        assert_eq!(Colour::from_24bit(1, 2, 3).css3(), None);
        assert_eq!(
            Colour::from_css3("notacolour"),
            Err(LookupError::UnknownName)
        );
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), HexFormatError> {
        let colour: Colour = "#ABC".parse()?;
        assert_eq!(colour.hex(), "#aabbcc");
        assert_eq!(Colour::try_from("012345")?.to_24bit(), [0x01, 0x23, 0x45]);
        assert_eq!("#ff".parse::<Colour>(), Err(HexFormatError::UnexpectedLength));
        assert_eq!("red".parse::<Colour>(), Err(HexFormatError::MalformedHex));
        assert_eq!("zzz".parse::<Colour>(), Err(HexFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_random_round_trips() -> Result<(), ColourError> {
        let mut rng = StdRng::seed_from_u64(0x7c0_10a5);

        for _ in 0..1_000 {
            let rgb: [Float; 3] = [rng.random(), rng.random(), rng.random()];
            let colour = Colour::from_rgb(rgb)?;

            assert_same_coordinates!(Colour::from_hsv(colour.hsv())?.rgb(), rgb);
            assert_same_coordinates!(Colour::from_hsl(colour.hsl())?.rgb(), rgb);
            assert_same_coordinates!(Colour::from_yiq(colour.yiq())?.rgb(), rgb);

            let bytes = Colour::from_hex(&colour.hex())?.rgb();
            for (byte, original) in bytes.iter().zip(rgb) {
                assert!((byte - original).abs() <= 0.5 / 255.0 + 1e-12);
            }
        }
        Ok(())
    }
}
