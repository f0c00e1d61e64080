//! # Tincture
//!
//! Tincture is a small library for colour values: It converts between RGB,
//! HSV, HSL, YIQ, hexadecimal notation, and CSS3 names, it adjusts colours
//! while keeping their perceived brightness, and it derives stable colours
//! from arbitrary data.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Tincture's main abstractions are:
//!
//!   * [`Colour`] stores three RGB coordinates with unit range and computes all
//!     other representations from them. Its getters and setters cover each
//!     colour model, optionally mapped onto a [`Scale`] such as percentages or
//!     bytes. Setters accept [`Components`], so that they can update some
//!     coordinates while leaving others as is.
//!   * [`Spec`] and [`ColourBuilder`] name the many ways of specifying a
//!     colour explicitly, with the builder rejecting conflicting
//!     specifications.
//!   * The [`hash`] module maps arbitrary data to colours within
//!     [`HashBounds`](hash::HashBounds), so that the same user name, tag, or
//!     host always gets the same colour.
//!   * The [`named`] module holds the 147 CSS3 colour names.
//!   * The [`conversion`] module exposes the underlying conversion functions.
//!
//! All fallible operations validate their arguments before changing a colour.
//! If they fail, the colour is unchanged. The [`error`] module has the details.
//!
//!
//! ## 2. Perceived Brightness
//!
//! HSV value and HSL lightness are not perceptually uniform. Rotating the hue
//! of pure blue by 30 degrees keeps its value at 1.0 but more than doubles its
//! luma, i.e., the YIQ model's measure of perceived brightness.
//! [`Preserve::Luma`] undoes that side effect:
//!
//! ```
//! # use tincture::{Colour, Preserve};
//! # use tincture::error::ColourError;
//! let blue = Colour::from_css3("blue")?;
//!
//! let mut plain = blue;
//! plain.shift_hue(30.0, Preserve::Nothing)?;
//! assert_eq!(plain.hex(), "#8000ff");
//!
//! let mut perceptual = blue;
//! perceptual.shift_hue(30.0, Preserve::Luma)?;
//! assert_eq!(perceptual.hex(), "#37006e");
//! assert!((perceptual.luma() - blue.luma()).abs() < 1e-9);
//! # Ok::<(), ColourError>(())
//! ```
//!
//! Text on a coloured background should be black if the background's luma
//! exceeds 0.5 and white otherwise. [`Colour::foreground`] picks the colour
//! and [`Colour::swatch`] uses it for rendering HTML swatches.
//!
//!
//! ## 3. Optional Features
//!
//! Tincture supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.
//!   - **`pyffi`** controls tincture's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Python
//! are decorated with <i class=python-only>Python only!</i>.
//!
//!
//! ## 4. Logging
//!
//! Tincture logs through the [log](https://crates.io/crates/log) facade.
//! Gamut mapping of out-of-cube YIQ coordinates is logged at debug level and
//! the hue, saturation, and luma selected for hashed data at trace level. An
//! application sees these messages after installing a logger implementation.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
pub mod hash;
pub mod named;
mod object;
mod shift;

pub mod conversion {
    //! Conversion functions between RGB and the other colour models.
    //!
    //! All functions validate their inputs. RGB coordinates, saturation,
    //! value, lightness, and luma must have unit range, hues must be finite,
    //! and YIQ's in-phase and quadrature components must be `-1..=1`.
    //!
    //! ```
    //! # use tincture::conversion::{hsv_to_rgb, rgb_to_hsv};
    //! # use tincture::error::OutOfRangeError;
    //! assert_eq!(rgb_to_hsv(&[1.0, 0.0, 0.0])?, [0.0, 1.0, 1.0]);
    //! assert_eq!(hsv_to_rgb(&[120.0, 1.0, 1.0])?, [0.0, 1.0, 0.0]);
    //! assert!(rgb_to_hsv(&[1.5, 0.0, 0.0]).is_err());
    //! # Ok::<(), OutOfRangeError>(())
    //! ```
    pub use crate::core::{
        hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb,
    };
}

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{HexFormat, Scale, Shortening};
pub use object::{Colour, ColourBuilder, Components, Spec};
pub use shift::{Preserve, SwatchOptions, SwatchOptionsBuilder};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn tincture(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;
    m.add_class::<Colour>()?;
    Ok(())
}
