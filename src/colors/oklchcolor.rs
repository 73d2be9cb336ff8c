//! This file implements the OKLCH color space, a cylindrical transformation of OKLab that uses
//! chroma and hue instead of two opponent color axes. This is the color type most users want: it
//! converts straight from and to sRGB, and measures how different two colors look.

use color::Color;
use colors::oklabcolor::OKLABColor;
use consts::TEST_PRECISION;
use coord::Coord;

/// A cylindrical form of OKLab, analogous to the relationship between HSL and RGB.
///
/// Every field is public and nothing is validated, so colors that no display could show (or that no
/// eye could see) are perfectly representable. Comparing with `==` is exact: use
/// [`approx_equal`](OKLCHColor::approx_equal) to allow for rounding.
/// # Example
///
/// ```
/// # use oklch::prelude::*;
/// // hue-shift a teal by half a turn, keeping lightness and chroma
/// let teal = OKLCHColor::from_rgb(64. / 255., 177. / 255., 183. / 255.);
/// let mut opposite = teal;
/// opposite.hue += std::f32::consts::PI;
/// let (r, g, b) = opposite.to_srgb();
/// // red-ish now: red is the largest channel
/// assert!(r > g && r > b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OKLCHColor {
    /// Perceptual lightness, identical to OKLab's. Ranges from 0 (black) to 1 (white); anything
    /// outside of that isn't a real color.
    pub lightness: f32,
    /// Chromatic intensity: the distance from the gray of the same lightness. Starts at 0 and has no
    /// upper limit, although sRGB colors never get much past 0.32.
    pub chroma: f32,
    /// The hue angle, in radians. Colors made from sRGB get a value between -π and π, but any angle
    /// is accepted and adding full turns doesn't change the color.
    pub hue: f32,
}

impl OKLCHColor {
    /// Makes a color directly from its three components, without any checks.
    pub fn new(lightness: f32, chroma: f32, hue: f32) -> OKLCHColor {
        OKLCHColor {
            lightness,
            chroma,
            hue,
        }
    }

    /// Converts gamma-encoded sRGB into OKLCH. Each channel is nominally in the range 0-1, but this
    /// isn't enforced: out-of-range values go through the math and give whatever they give.
    /// # Example
    /// ```
    /// # use oklch::prelude::*;
    /// let white = OKLCHColor::from_rgb(1., 1., 1.);
    /// assert!((white.lightness - 1.).abs() <= 1e-5);
    /// assert!(white.chroma <= 1e-4);
    /// ```
    pub fn from_rgb(r: f32, g: f32, b: f32) -> OKLCHColor {
        OKLCHColor::from_oklab(OKLABColor::from_rgb(r, g, b))
    }

    /// Converts to gamma-encoded sRGB as a `(red, green, blue)` tuple. Colors outside of the sRGB
    /// gamut are brought back in by clamping each channel to 0-1 independently, which keeps the
    /// output valid but can shift the hue.
    pub fn to_srgb(&self) -> (f32, f32, f32) {
        self.to_oklab().to_srgb()
    }

    /// The perceptual difference between this color and `other`, as ΔEOK: the Euclidean distance
    /// between the two in OKLab. A difference of around 0.02 is just noticeable.
    /// # Example
    /// ```
    /// # use oklch::prelude::*;
    /// let red = OKLCHColor::from_rgb(1., 0., 0.);
    /// let green = OKLCHColor::from_rgb(0., 1., 0.);
    /// assert_eq!(red.difference(&green), green.difference(&red));
    /// assert_eq!(red.difference(&red), 0.);
    /// ```
    pub fn difference(&self, other: &OKLCHColor) -> f32 {
        self.distance(other)
    }

    /// Returns `true` if every component is within a small tolerance of `other`'s. Hue is compared
    /// as a plain number, so angles a full turn apart don't count as equal.
    pub fn approx_equal(&self, other: &OKLCHColor) -> bool {
        approx_eq!(f32, self.lightness, other.lightness, epsilon = TEST_PRECISION)
            && approx_eq!(f32, self.chroma, other.chroma, epsilon = TEST_PRECISION)
            && approx_eq!(f32, self.hue, other.hue, epsilon = TEST_PRECISION)
    }
}

impl Color for OKLCHColor {
    /// Converts from OKLab: the radius and angle of the (a, b) point become chroma and hue.
    fn from_oklab(lab: OKLABColor) -> OKLCHColor {
        OKLCHColor {
            lightness: lab.l,
            chroma: (lab.a * lab.a + lab.b * lab.b).sqrt(),
            hue: lab.b.atan2(lab.a),
        }
    }
    /// Converts back to OKLab: a = c cos h, b = c sin h.
    fn to_oklab(&self) -> OKLABColor {
        OKLABColor {
            l: self.lightness,
            a: self.chroma * self.hue.cos(),
            b: self.chroma * self.hue.sin(),
        }
    }
}

impl From<Coord> for OKLCHColor {
    fn from(c: Coord) -> OKLCHColor {
        OKLCHColor {
            lightness: c.x,
            chroma: c.y,
            hue: c.z,
        }
    }
}

impl From<OKLCHColor> for Coord {
    fn from(val: OKLCHColor) -> Self {
        Coord {
            x: val.lightness,
            y: val.chroma,
            z: val.hue,
        }
    }
}
