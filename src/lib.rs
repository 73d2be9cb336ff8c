//! A small library for converting colors between sRGB and OKLCH, the cylindrical form of Björn
//! Ottosson's [OKLab](https://bottosson.github.io/posts/oklab/) perceptual color space, and for
//! measuring how different two colors look. OKLab is built so that the straight-line distance between
//! two colors tracks how different they appear, which makes OKLCH a much better place than HSL to
//! adjust lightness or shift hue without surprises.
//!
//! ```
//! use oklch::prelude::*;
//!
//! let teal = OKLCHColor::from_rgb(64. / 255., 177. / 255., 183. / 255.);
//! assert!((teal.lightness - 0.6999109).abs() <= 1e-5);
//!
//! let (r, g, b) = teal.to_srgb();
//! assert!((r - 64. / 255.).abs() <= 1e-5);
//! assert!((g - 177. / 255.).abs() <= 1e-5);
//! assert!((b - 183. / 255.).abs() <= 1e-5);
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
extern crate num;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate rulinalg;

pub mod color;
pub mod colors;
pub mod consts;
pub mod coord;
pub mod gamma;
pub mod prelude;
