//! Single-quantity accessors, relative shifts, and mixing.
//!
//! Each quantity, i.e., hue, HSV saturation, HSL saturation, HSV value, HSL
//! lightness, luma, and intensity, has a getter, an absolute setter, and a
//! relative shift. Shifts take a proportion `-1..=1`, except for hue, which
//! shifts by degrees. A positive proportion moves the quantity toward 1, a
//! negative proportion toward 0:
//!
//! ```
//! # use tincture::{Colour, Preserve};
//! # use tincture::error::ColourError;
//! let mut colour = Colour::from_hsv([120.0, 0.5, 0.4])?;
//! colour.shift_value(0.5, Preserve::Nothing)?;
//! assert!((colour.value() - 0.7).abs() < 1e-9);
//!
//! colour.shift_value(-0.5, Preserve::Nothing)?;
//! assert!((colour.value() - 0.35).abs() < 1e-9);
//! # Ok::<(), ColourError>(())
//! ```
//!
//! Changing the hue, saturation, value, or lightness of a colour usually
//! changes its perceived brightness as well. [`Preserve::Luma`] restores the
//! original luma after such a change.

use crate::core::{
    clamp_unit, hsl_to_rgb, hsv_to_rgb, replace_luma, shift_toward_bound, to_hsl, to_hsv, to_luma,
};
use crate::error::{ColourError, OutOfRangeError};
use crate::{Colour, Float};

/// What to preserve when changing a colour's hue, saturation, value, or
/// lightness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preserve {
    /// Let the luma change along with the updated quantity.
    #[default]
    Nothing,
    /// Restore the luma, i.e., perceived brightness, after updating the
    /// quantity.
    Luma,
}

/// The two cylindrical colour models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cylinder {
    Hsv,
    Hsl,
}

impl Cylinder {
    fn coordinates(&self, rgb: &[Float; 3]) -> [Float; 3] {
        match *self {
            Self::Hsv => to_hsv(rgb),
            Self::Hsl => to_hsl(rgb),
        }
    }

    fn to_rgb(&self, coordinates: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
        match *self {
            Self::Hsv => hsv_to_rgb(coordinates),
            Self::Hsl => hsl_to_rgb(coordinates),
        }
    }
}

/// Ensure that the proportion of a relative shift is `-1..=1`.
fn check_proportion(proportion: Float) -> Result<Float, OutOfRangeError> {
    OutOfRangeError::check(proportion, -1.0, 1.0)
}

impl Colour {
    /// Update one coordinate of the cylindrical model, optionally restoring
    /// the luma afterwards.
    fn update_cylinder(
        &mut self,
        cylinder: Cylinder,
        index: usize,
        value: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        let mut coordinates = cylinder.coordinates(&self.rgb());
        coordinates[index] = value;
        let mut rgb = cylinder.to_rgb(&coordinates)?;

        if preserve == Preserve::Luma {
            rgb = replace_luma(&rgb, self.luma())?;
        }

        Ok(self.commit(rgb))
    }

    /// Shift one coordinate of the cylindrical model toward one of its
    /// bounds.
    fn shift_cylinder(
        &mut self,
        cylinder: Cylinder,
        index: usize,
        proportion: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        let proportion = check_proportion(proportion)?;
        if proportion == 0.0 {
            return Ok(self);
        }

        let current = cylinder.coordinates(&self.rgb())[index];
        let updated = clamp_unit(shift_toward_bound(current, proportion));
        self.update_cylinder(cylinder, index, updated, preserve)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the hue in degrees `0..360`.
    pub fn hue(&self) -> Float {
        self.hsv()[0]
    }

    /// Update the hue in degrees.
    ///
    /// The hue may have any finite magnitude and is reduced modulo 360.
    pub fn set_hue(&mut self, hue: Float, preserve: Preserve) -> Result<&mut Self, ColourError> {
        self.update_cylinder(Cylinder::Hsv, 0, hue, preserve)
    }

    /// Rotate the hue by the given number of degrees.
    ///
    /// ```
    /// # use tincture::{Colour, Preserve};
    /// # use tincture::error::ColourError;
    /// let mut blue = Colour::from_css3("blue")?;
    /// blue.shift_hue(30.0, Preserve::Luma)?;
    ///
    /// assert!((blue.hue() - 270.0).abs() < 1e-9);
    /// assert!((blue.luma() - 0.114).abs() < 1e-9);
    /// assert_eq!(blue.hex(), "#37006e");
    /// # Ok::<(), ColourError>(())
    /// ```
    pub fn shift_hue(&mut self, degrees: Float, preserve: Preserve) -> Result<&mut Self, ColourError> {
        if degrees == 0.0 {
            return Ok(self);
        }
        let hue = self.hue() + degrees;
        self.set_hue(hue, preserve)
    }

    /// Get the saturation in the HSV model.
    pub fn saturation_hsv(&self) -> Float {
        self.hsv()[1]
    }

    /// Update the saturation in the HSV model.
    pub fn set_saturation_hsv(
        &mut self,
        saturation: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.update_cylinder(Cylinder::Hsv, 1, saturation, preserve)
    }

    /// Shift the saturation in the HSV model by the given proportion.
    pub fn shift_saturation_hsv(
        &mut self,
        proportion: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.shift_cylinder(Cylinder::Hsv, 1, proportion, preserve)
    }

    /// Get the saturation in the HSL model.
    pub fn saturation_hsl(&self) -> Float {
        self.hsl()[1]
    }

    /// Update the saturation in the HSL model.
    pub fn set_saturation_hsl(
        &mut self,
        saturation: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.update_cylinder(Cylinder::Hsl, 1, saturation, preserve)
    }

    /// Shift the saturation in the HSL model by the given proportion.
    pub fn shift_saturation_hsl(
        &mut self,
        proportion: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.shift_cylinder(Cylinder::Hsl, 1, proportion, preserve)
    }

    /// Get the value in the HSV model.
    pub fn value(&self) -> Float {
        self.hsv()[2]
    }

    /// Update the value in the HSV model.
    pub fn set_value(&mut self, value: Float, preserve: Preserve) -> Result<&mut Self, ColourError> {
        self.update_cylinder(Cylinder::Hsv, 2, value, preserve)
    }

    /// Shift the value in the HSV model by the given proportion.
    ///
    /// Unless the colour is fully desaturated, shifting by 1 does not result
    /// in white.
    pub fn shift_value(
        &mut self,
        proportion: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.shift_cylinder(Cylinder::Hsv, 2, proportion, preserve)
    }

    /// Get the lightness in the HSL model.
    pub fn lightness(&self) -> Float {
        self.hsl()[2]
    }

    /// Update the lightness in the HSL model.
    pub fn set_lightness(
        &mut self,
        lightness: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.update_cylinder(Cylinder::Hsl, 2, lightness, preserve)
    }

    /// Shift the lightness in the HSL model by the given proportion.
    ///
    /// Shifting by 1 results in white, shifting by -1 in black.
    pub fn shift_lightness(
        &mut self,
        proportion: Float,
        preserve: Preserve,
    ) -> Result<&mut Self, ColourError> {
        self.shift_cylinder(Cylinder::Hsl, 2, proportion, preserve)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the luma, i.e., the perceived brightness.
    pub fn luma(&self) -> Float {
        clamp_unit(to_luma(&self.rgb()))
    }

    /// Update the luma.
    ///
    /// This method keeps the in-phase and quadrature components of the YIQ
    /// model. If the result falls outside the RGB cube, it reduces chroma
    /// until it fits. The hue stays the same either way.
    pub fn set_luma(&mut self, luma: Float) -> Result<&mut Self, ColourError> {
        let rgb = replace_luma(&self.rgb(), luma)?;
        Ok(self.commit(rgb))
    }

    /// Shift the luma by the given proportion.
    pub fn shift_luma(&mut self, proportion: Float) -> Result<&mut Self, ColourError> {
        let proportion = check_proportion(proportion)?;
        if proportion == 0.0 {
            return Ok(self);
        }

        let luma = clamp_unit(shift_toward_bound(self.luma(), proportion));
        self.set_luma(luma)
    }

    /// Get the intensity, i.e., the mean of the RGB coordinates.
    pub fn intensity(&self) -> Float {
        let [r, g, b] = self.rgb();
        (r + g + b) / 3.0
    }

    /// Update the intensity.
    ///
    /// Intensity 0 results in black and intensity 1 in white. Any other
    /// intensity is reached by mixing this colour with black or white.
    pub fn set_intensity(&mut self, intensity: Float) -> Result<&mut Self, ColourError> {
        let intensity = OutOfRangeError::check(intensity, 0.0, 1.0)?;
        if intensity == 0.0 || intensity == 1.0 {
            return self.set_grey(intensity);
        }

        let current = self.intensity();
        let difference = intensity - current;
        if difference == 0.0 {
            return Ok(self);
        }

        let proportion = if difference > 0.0 {
            difference / (1.0 - current)
        } else {
            difference / current
        };

        self.shift_intensity(proportion.clamp(-1.0, 1.0))
    }

    /// Shift the intensity by the given proportion.
    ///
    /// A positive proportion mixes this colour with white, a negative one with
    /// black. Either way, this colour moves along a straight line through the
    /// RGB cube.
    pub fn shift_intensity(&mut self, proportion: Float) -> Result<&mut Self, ColourError> {
        let proportion = check_proportion(proportion)?;
        if proportion == 0.0 {
            Ok(self)
        } else if proportion > 0.0 {
            self.mix(&Colour::from_24bit(0xff, 0xff, 0xff), proportion)
        } else {
            self.mix(&Colour::new(), -proportion)
        }
    }

    /// Mix this colour with another colour.
    ///
    /// The proportion must be `0..=1`. It determines how far this colour
    /// moves toward the other colour, with 0 leaving this colour as is and 1
    /// producing a copy of the other colour.
    ///
    /// ```
    /// # use tincture::Colour;
    /// # use tincture::error::ColourError;
    /// let mut colour = Colour::new();
    /// colour.mix(&Colour::from_css3("white")?, 0.5)?;
    /// assert_eq!(colour.rgb(), [0.5, 0.5, 0.5]);
    /// # Ok::<(), ColourError>(())
    /// ```
    pub fn mix(&mut self, other: &Colour, proportion: Float) -> Result<&mut Self, ColourError> {
        let proportion = OutOfRangeError::check(proportion, 0.0, 1.0)?;

        let [r1, g1, b1] = self.rgb();
        let [r2, g2, b2] = other.rgb();
        let rgb = [
            clamp_unit((r2 - r1).mul_add(proportion, r1)),
            clamp_unit((g2 - g1).mul_add(proportion, g1)),
            clamp_unit((b2 - b1).mul_add(proportion, b1)),
        ];

        Ok(self.commit(rgb))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Determine whether black text is more readable on this colour than
    /// white text. That is the case for colours with luma above 0.5.
    pub fn use_black_text(&self) -> bool {
        self.luma() > 0.5
    }

    /// Get the more readable text colour for this colour as background.
    ///
    /// ```
    /// # use tincture::Colour;
    /// # use tincture::error::ColourError;
    /// assert_eq!(Colour::from_css3("yellow")?.foreground(), Colour::new());
    /// assert_eq!(Colour::from_css3("navy")?.foreground().hex(), "#ffffff");
    /// # Ok::<(), ColourError>(())
    /// ```
    #[must_use]
    pub fn foreground(&self) -> Colour {
        if self.use_black_text() {
            Colour::new()
        } else {
            Colour::from_24bit(0xff, 0xff, 0xff)
        }
    }

    /// Render this colour as an HTML swatch.
    ///
    /// The result is a `span` element with class `swatch` whose background is
    /// this colour and whose text colour is the more readable of black and
    /// white. Without a CSS class in the options, the element also carries
    /// inline styles for font and padding.
    ///
    /// ```
    /// # use tincture::{Colour, SwatchOptions};
    /// let swatch = Colour::from_24bit(0xff, 0xd7, 0x00).swatch(&SwatchOptions::default());
    /// assert_eq!(
    ///     swatch,
    ///     "<span class=\"swatch\" style=\"font-family: monospace; padding: 0.3em 0.8em; \
    ///      background-color: #ffd700; color: black\">#ffd700</span>"
    /// );
    /// ```
    pub fn swatch(&self, options: &SwatchOptions) -> String {
        let hex = self.hex();
        let text = if self.use_black_text() { "black" } else { "white" };
        let (class, style) = options.css_class().map_or(
            (String::new(), "font-family: monospace; padding: 0.3em 0.8em; "),
            |class| (format!(" {}", class), ""),
        );
        let label = if options.show_hex() {
            hex.clone()
        } else {
            "&nbsp;".repeat(7)
        };

        format!(
            "<span class=\"swatch{}\" style=\"{}background-color: {}; color: {}\">{}</span>",
            class, style, hex, text, label
        )
    }
}

// ====================================================================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
struct SwatchData {
    show_hex: bool,
    css_class: Option<String>,
}

impl SwatchData {
    pub const fn new() -> Self {
        Self {
            show_hex: true,
            css_class: None,
        }
    }
}

/// A builder of swatch options.
#[derive(Debug)]
pub struct SwatchOptionsBuilder(SwatchData);

impl SwatchOptionsBuilder {
    /// Show the hexadecimal notation inside the swatch, or blank space.
    pub fn show_hex(&mut self, show_hex: bool) -> &mut Self {
        self.0.show_hex = show_hex;
        self
    }

    /// Add the CSS class to the swatch, which also drops the inline styles
    /// for font and padding.
    pub fn css_class(&mut self, class: &str) -> &mut Self {
        self.0.css_class = Some(class.to_owned());
        self
    }

    /// Instantiate the swatch options.
    pub fn build(&self) -> SwatchOptions {
        SwatchOptions(self.0.clone())
    }
}

/// Options for rendering HTML swatches.
///
/// By default, swatches show the hexadecimal notation and have no extra CSS
/// class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwatchOptions(SwatchData);

impl Default for SwatchOptions {
    fn default() -> Self {
        SwatchOptions(SwatchData::new())
    }
}

impl SwatchOptions {
    /// Create a new builder with the default options.
    pub fn builder() -> SwatchOptionsBuilder {
        SwatchOptionsBuilder(SwatchData::new())
    }

    /// Determine whether to show the hexadecimal notation.
    pub fn show_hex(&self) -> bool {
        self.0.show_hex
    }

    /// Get the extra CSS class.
    pub fn css_class(&self) -> Option<&str> {
        self.0.css_class.as_deref()
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Preserve, SwatchOptions};
    use crate::error::{ColourError, OutOfRangeError};
    use crate::{assert_close_enough, Colour, Float};

    fn tolerance() -> Float {
        <Float as crate::core::FloatExt>::TOLERANCE
    }

    #[test]
    fn test_perceptual_hue_shift() -> Result<(), ColourError> {
        let blue = Colour::from_24bit(0, 0, 0xff);
        assert_close_enough!(blue.luma(), 0.114);

        let mut shifted = blue;
        shifted.shift_hue(30.0, Preserve::Luma)?;
        assert!((shifted.hue() - 270.0).abs() < tolerance());
        assert!((shifted.luma() - 0.114).abs() < tolerance());
        assert!((shifted.rgb()[0] - 0.21631878557874765).abs() < tolerance());
        assert_eq!(shifted.rgb()[1], 0.0);
        assert!((shifted.rgb()[2] - 0.43263757115749535).abs() < tolerance());
        assert_eq!(shifted.hex(), "#37006e");

        let mut plain = blue;
        plain.shift_hue(30.0, Preserve::Nothing)?;
        assert_eq!(plain.hex(), "#8000ff");
        assert!(plain.luma() > blue.luma());
        Ok(())
    }

    #[test]
    fn test_hue() -> Result<(), ColourError> {
        let mut colour = Colour::from_hsv([100.0, 0.6, 0.7])?;
        colour.set_hue(-60.0, Preserve::Nothing)?;
        assert!((colour.hue() - 300.0).abs() < tolerance());
        assert!((colour.saturation_hsv() - 0.6).abs() < tolerance());
        assert!((colour.value() - 0.7).abs() < tolerance());

        colour.shift_hue(90.0, Preserve::Nothing)?;
        assert!((colour.hue() - 30.0).abs() < tolerance());

        let before = colour;
        colour.shift_hue(0.0, Preserve::Luma)?;
        assert_eq!(colour.rgb(), before.rgb());

        assert!(colour.set_hue(Float::NAN, Preserve::Nothing).is_err());
        assert_eq!(colour, before);
        Ok(())
    }

    #[test]
    fn test_saturation() -> Result<(), ColourError> {
        let mut colour = Colour::from_hsv([200.0, 0.4, 0.8])?;
        colour.shift_saturation_hsv(0.5, Preserve::Nothing)?;
        assert!((colour.saturation_hsv() - 0.7).abs() < tolerance());
        colour.shift_saturation_hsv(-1.0, Preserve::Nothing)?;
        assert_eq!(colour.saturation_hsv(), 0.0);
        assert!(colour.grey().is_some());

        let mut colour = Colour::from_hsl([200.0, 0.4, 0.6])?;
        let luma = colour.luma();
        colour.set_saturation_hsl(0.9, Preserve::Luma)?;
        assert!((colour.luma() - luma).abs() < tolerance());
        assert!((colour.hue() - 200.0).abs() < tolerance());
        colour.shift_saturation_hsl(-0.5, Preserve::Nothing)?;

        assert!(colour.set_saturation_hsv(1.5, Preserve::Nothing).is_err());
        assert!(colour.set_saturation_hsl(-0.5, Preserve::Nothing).is_err());
        Ok(())
    }

    #[test]
    fn test_value_and_lightness() -> Result<(), ColourError> {
        let mut colour = Colour::from_hsl([30.0, 0.8, 0.4])?;
        colour.shift_lightness(1.0, Preserve::Nothing)?;
        assert_eq!(colour.hex(), "#ffffff");

        let mut colour = Colour::from_hsl([30.0, 0.8, 0.4])?;
        colour.shift_lightness(-1.0, Preserve::Nothing)?;
        assert_eq!(colour, Colour::new());

        let mut colour = Colour::from_hsv([30.0, 0.8, 0.4])?;
        colour.set_value(0.9, Preserve::Nothing)?;
        assert!((colour.value() - 0.9).abs() < tolerance());
        colour.set_lightness(0.5, Preserve::Nothing)?;
        assert!((colour.lightness() - 0.5).abs() < tolerance());
        assert!((colour.hue() - 30.0).abs() < tolerance());
        Ok(())
    }

    #[test]
    fn test_luma() -> Result<(), ColourError> {
        let mut colour = Colour::from_css3("seagreen")?;
        let hue = colour.hue();

        colour.set_luma(0.2)?;
        assert!((colour.luma() - 0.2).abs() < tolerance());
        assert!((colour.hue() - hue).abs() < 1e-6);

        colour.shift_luma(0.5)?;
        assert!((colour.luma() - 0.6).abs() < tolerance());
        colour.shift_luma(-0.5)?;
        assert!((colour.luma() - 0.3).abs() < tolerance());

        // Pushing luma to the top leaves white only.
        colour.set_luma(1.0)?;
        assert_eq!(colour.hex(), "#ffffff");

        assert_eq!(
            colour.set_luma(1.1).map(|c| *c),
            Err(ColourError::OutOfRange(OutOfRangeError::new(1.1, 0.0..=1.0)))
        );
        Ok(())
    }

    #[test]
    fn test_intensity() -> Result<(), ColourError> {
        let mut colour = Colour::from_24bit(0x20, 0x60, 0xa0);
        assert_close_enough!(colour.intensity(), 0x60 as Float / 255.0);

        colour.set_intensity(0.75)?;
        assert!((colour.intensity() - 0.75).abs() < tolerance());

        colour.set_intensity(0.1)?;
        assert!((colour.intensity() - 0.1).abs() < tolerance());

        colour.set_intensity(1.0)?;
        assert_eq!(colour.grey(), Some(1.0));
        colour.set_intensity(0.0)?;
        assert_eq!(colour, Colour::new());

        colour.shift_intensity(0.5)?;
        assert_eq!(colour.rgb(), [0.5, 0.5, 0.5]);
        colour.shift_intensity(-0.5)?;
        assert_eq!(colour.rgb(), [0.25, 0.25, 0.25]);

        assert!(colour.set_intensity(-0.1).is_err());
        assert!(colour.shift_intensity(1.5).is_err());
        Ok(())
    }

    #[test]
    fn test_mix() -> Result<(), ColourError> {
        let white = Colour::from_css3("white")?;
        let mut grey = Colour::new();
        grey.mix(&white, 0.5)?;
        assert_eq!(grey.rgb(), [0.5, 0.5, 0.5]);
        assert_eq!(grey.grey(), Some(0.5));

        let mut colour = Colour::from_css3("olive")?;
        let original = colour;
        colour.mix(&white, 0.0)?;
        assert_eq!(colour, original);
        colour.mix(&white, 1.0)?;
        assert_eq!(colour.rgb(), white.rgb());

        assert_eq!(
            colour.mix(&original, 1.5).map(|c| *c),
            Err(ColourError::OutOfRange(OutOfRangeError::new(1.5, 0.0..=1.0)))
        );
        assert_eq!(colour, white);
        Ok(())
    }

    #[test]
    fn test_invalid_proportions_leave_colour_unchanged() -> Result<(), ColourError> {
        let mut colour = Colour::from_css3("tomato")?;
        let original = colour;

        assert_eq!(
            colour.shift_value(1.5, Preserve::Nothing).map(|c| *c),
            Err(ColourError::OutOfRange(OutOfRangeError::new(1.5, -1.0..=1.0)))
        );
        assert!(colour.shift_lightness(-2.0, Preserve::Luma).is_err());
        assert!(colour.shift_saturation_hsv(Float::NAN, Preserve::Nothing).is_err());
        assert!(colour.shift_saturation_hsl(1.01, Preserve::Nothing).is_err());
        assert!(colour.shift_luma(-1.5).is_err());
        assert!(colour.shift_hue(Float::INFINITY, Preserve::Nothing).is_err());
        assert_eq!(colour, original);
        Ok(())
    }

    #[test]
    fn test_foreground() -> Result<(), ColourError> {
        assert!(Colour::from_css3("white")?.use_black_text());
        assert!(!Colour::new().use_black_text());

        let mut colour = Colour::from_grey(0.49)?;
        assert!(!colour.use_black_text());
        colour.set_grey(0.51)?;
        assert!(colour.use_black_text());

        assert_eq!(Colour::from_css3("lime")?.foreground(), Colour::new());
        assert_eq!(
            Colour::from_css3("red")?.foreground(),
            Colour::from_css3("white")?
        );
        Ok(())
    }

    #[test]
    fn test_swatch() -> Result<(), ColourError> {
        let navy = Colour::from_css3("navy")?;
        let options = SwatchOptions::builder()
            .show_hex(false)
            .css_class("chip")
            .build();
        assert_eq!(options.css_class(), Some("chip"));

        assert_eq!(
            navy.swatch(&options),
            "<span class=\"swatch chip\" style=\"background-color: #000080; color: white\">\
             &nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</span>"
        );
        assert_eq!(
            navy.swatch(&SwatchOptions::default()),
            "<span class=\"swatch\" style=\"font-family: monospace; padding: 0.3em 0.8em; \
             background-color: #000080; color: white\">#000080</span>"
        );
        Ok(())
    }
}
