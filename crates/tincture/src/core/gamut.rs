use super::math::clamp_unit;
use crate::Float;

/// Determine whether the RGB coordinates are inside the unit cube.
#[inline]
pub(crate) fn in_gamut(coordinates: &[Float; 3]) -> bool {
    coordinates.iter().all(|c| (0.0..=1.0).contains(c))
}

/// Map the given RGB coordinates into the unit cube while keeping their luma.
///
/// Every point `luma + k * (rgb - luma)` has the same luma, the same hue, and
/// the same ratio between in-phase and quadrature components as the original
/// coordinates. Only chroma changes. This function picks the largest factor
/// `k` in `0..=1` that puts all three coordinates into unit range. Coordinates
/// that already are in gamut pass through unchanged, modulo clamping of
/// floating point noise.
pub(crate) fn reduce_chroma(luma: Float, coordinates: &[Float; 3]) -> [Float; 3] {
    if in_gamut(coordinates) {
        return *coordinates;
    }

    let mut factor: Float = 1.0;
    for &c in coordinates {
        if 1.0 < c {
            factor = factor.min((1.0 - luma) / (c - luma));
        } else if c < 0.0 {
            factor = factor.min(luma / (luma - c));
        }
    }

    log::debug!(
        "scaling chroma by {} to bring {:?} with luma {} into RGB gamut",
        factor,
        coordinates,
        luma
    );

    coordinates.map(|c| clamp_unit(factor.mul_add(c - luma, luma)))
}
