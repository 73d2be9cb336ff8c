//! This file defines the [`Color`] trait, which every color type in this crate implements. OKLab is
//! the hub: each color knows how to get to and from OKLab, and every other conversion goes through
//! it. This is also where perceptual difference lives, because Euclidean distance in OKLab *is* the
//! perceptual distance ΔEOK.

use colors::oklabcolor::OKLABColor;

/// A trait that includes any color representation that can be converted to and from the OKLab color
/// space.
///
/// # Example
/// ```
/// # use oklch::prelude::*;
/// let teal = OKLCHColor::from_rgb(64. / 255., 177. / 255., 183. / 255.);
/// let lab: OKLABColor = teal.convert();
/// let back: OKLCHColor = lab.convert();
/// assert!(back.approx_equal(&teal));
/// // converting doesn't change where a color is, so the distance between the two is tiny
/// assert!(teal.distance(&lab) <= 1e-6);
/// ```
pub trait Color: Sized {
    /// Converts from an OKLab color.
    fn from_oklab(lab: OKLABColor) -> Self;
    /// Converts to an OKLab color.
    fn to_oklab(&self) -> OKLABColor;

    /// Converts to any other color type, going through OKLab.
    fn convert<T: Color>(&self) -> T {
        T::from_oklab(self.to_oklab())
    }

    /// The perceptual difference between two colors, ΔEOK: the straight-line distance between them in
    /// OKLab. There is no weighting, so the result is on the same scale as OKLab lightness, and
    /// it's symmetric and never negative. The two colors can be of different types.
    fn distance<T: Color>(&self, other: &T) -> f32 {
        self.to_oklab().euclidean_distance(&other.to_oklab())
    }
}
