use super::gamut::reduce_chroma;
use super::math::{clamp_unit, normalize_hue};
use crate::error::OutOfRangeError;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the RGB coordinates to 24-bit representation.
///
/// This function clamps coordinates to unit range and rounds ties to even, so
/// that 0.5 becomes 0x80.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    coordinates.map(|c| (clamp_unit(c) * 255.0).round_ties_even() as u8)
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Ensure that all RGB coordinates have unit range.
fn check_rgb(rgb: &[Float; 3]) -> Result<(), OutOfRangeError> {
    for c in rgb {
        OutOfRangeError::check(*c, 0.0, 1.0)?;
    }
    Ok(())
}

/// Ensure that the hue is finite and saturation plus value/lightness have unit
/// range.
fn check_hsx(hsx: &[Float; 3]) -> Result<(), OutOfRangeError> {
    if !hsx[0].is_finite() {
        return Err(OutOfRangeError::new(hsx[0], 0.0..=360.0));
    }
    OutOfRangeError::check(hsx[1], 0.0, 1.0)?;
    OutOfRangeError::check(hsx[2], 0.0, 1.0)?;
    Ok(())
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the hue in degrees `0..360` for RGB coordinates with the given
/// maximum and chroma. Achromatic colours have hue 0.
fn to_hue(rgb: &[Float; 3], max: Float, chroma: Float) -> Float {
    if chroma == 0.0 {
        return 0.0;
    }

    let [r, g, b] = *rgb;
    let sector = if max == r {
        ((g - b) / chroma).rem_euclid(6.0)
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    normalize_hue(60.0 * sector)
}

/// Determine RGB coordinates from hue, chroma, and the offset added to all
/// three coordinates. This is the common second half of HSV and HSL to RGB.
fn from_hue(hue: Float, chroma: Float, offset: Float) -> [Float; 3] {
    let sector = normalize_hue(hue) / 60.0;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let [r, g, b] = match sector as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    };

    [
        clamp_unit(r + offset),
        clamp_unit(g + offset),
        clamp_unit(b + offset),
    ]
}

/// Convert RGB to HSV.
///
/// The result has the hue in degrees `0..360` and saturation as well as value
/// in unit range. Achromatic colours have zero hue and saturation.
pub fn rgb_to_hsv(rgb: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    check_rgb(rgb)?;
    Ok(to_hsv(rgb))
}

/// Convert in-gamut RGB to HSV without checking the coordinates.
pub(crate) fn to_hsv(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let chroma = max - r.min(g).min(b);
    let saturation = if chroma == 0.0 { 0.0 } else { chroma / max };

    [to_hue(rgb, max, chroma), clamp_unit(saturation), max]
}

/// Convert HSV to RGB.
///
/// The hue may have any finite magnitude and is reduced modulo 360.
pub fn hsv_to_rgb(hsv: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    check_hsx(hsv)?;

    let [hue, saturation, value] = *hsv;
    let chroma = value * saturation;
    Ok(from_hue(hue, chroma, value - chroma))
}

/// Convert RGB to HSL.
///
/// The result has the hue in degrees `0..360` and saturation as well as
/// lightness in unit range. Achromatic colours have zero hue and saturation.
pub fn rgb_to_hsl(rgb: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    check_rgb(rgb)?;
    Ok(to_hsl(rgb))
}

/// Convert in-gamut RGB to HSL without checking the coordinates.
pub(crate) fn to_hsl(rgb: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    let lightness = (max + min) / 2.0;
    let saturation = if chroma == 0.0 {
        0.0
    } else {
        chroma / (1.0 - lightness.mul_add(2.0, -1.0).abs())
    };

    [to_hue(rgb, max, chroma), clamp_unit(saturation), lightness]
}

/// Convert HSL to RGB.
///
/// The hue may have any finite magnitude and is reduced modulo 360.
pub fn hsl_to_rgb(hsl: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    check_hsx(hsl)?;

    let [hue, saturation, lightness] = *hsl;
    let chroma = (1.0 - lightness.mul_add(2.0, -1.0).abs()) * saturation;
    Ok(from_hue(hue, chroma, lightness - chroma / 2.0))
}

// --------------------------------------------------------------------------------------------------------------------
// The NTSC 1953 coefficients. Both chroma rows sum to zero, so greys have zero
// chroma and the first column of the inverse is all ones.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const RGB_TO_YIQ: [[Float; 3]; 3] = [
    [ 0.299,  0.587,  0.114 ],
    [ 0.596, -0.274, -0.322 ],
    [ 0.211, -0.523,  0.312 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const YIQ_TO_RGB: [[Float; 3]; 3] = [
    [ 1.0,  0.9561706854041451,  0.6214325663465856 ],
    [ 1.0, -0.2726886023301063, -0.6468132370201738 ],
    [ 1.0, -1.1037440821760263,  1.7006230946773062 ],
];

/// Determine the luma of the RGB coordinates.
#[inline]
pub(crate) fn to_luma(rgb: &[Float; 3]) -> Float {
    let [r, g, b] = *rgb;
    let [w1, w2, w3] = RGB_TO_YIQ[0];
    w1.mul_add(r, w2.mul_add(g, w3 * b))
}

/// Convert RGB to YIQ.
///
/// The result has luma in unit range and in-phase as well as quadrature
/// components in `-0.6..=0.6`.
pub fn rgb_to_yiq(rgb: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    check_rgb(rgb)?;
    Ok(to_yiq(rgb))
}

/// Convert in-gamut RGB to YIQ without checking the coordinates.
#[inline]
pub(crate) fn to_yiq(rgb: &[Float; 3]) -> [Float; 3] {
    multiply(&RGB_TO_YIQ, rgb)
}

/// Convert YIQ to RGB.
///
/// Luma must have unit range and the in-phase as well as quadrature components
/// must be `-1..=1`. Not all such coordinates describe colours inside the RGB
/// cube. For those that don't, this function keeps the luma and reduces chroma
/// just enough for the result to fit.
pub fn yiq_to_rgb(yiq: &[Float; 3]) -> Result<[Float; 3], OutOfRangeError> {
    let [y, i, q] = *yiq;
    OutOfRangeError::check(y, 0.0, 1.0)?;
    OutOfRangeError::check(i, -1.0, 1.0)?;
    OutOfRangeError::check(q, -1.0, 1.0)?;

    Ok(reduce_chroma(y, &multiply(&YIQ_TO_RGB, yiq)))
}

/// Replace the luma of in-gamut RGB coordinates.
///
/// This function keeps the in-phase and quadrature components, i.e., all three
/// RGB coordinates change by the same amount. If the result falls outside the
/// RGB cube, chroma shrinks toward grey. Neither step changes the hue.
pub(crate) fn replace_luma(rgb: &[Float; 3], luma: Float) -> Result<[Float; 3], OutOfRangeError> {
    let [_, i, q] = to_yiq(rgb);
    yiq_to_rgb(&[luma, i, q])
}

// ====================================================================================================================
