//! A module that implements the [OKLab color space](https://bottosson.github.io/posts/oklab/). OKLab
//! has the same shape as CIELAB (a lightness axis and two opponent color axes) but is built so
//! that straight-line distance matches perceived difference much better. Getting there from sRGB is
//! three steps: undo the gamma curve, move linear light into LMS cone responses with one matrix,
//! then take a cube root and apply a second matrix.

use color::Color;
use consts::{LINEAR_RGB_TO_LMS, LMS_TO_LINEAR_RGB, LMS_TO_OKLAB, OKLAB_TO_LMS, TEST_PRECISION};
use coord::Coord;
use gamma;

/// A color in the OKLab color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OKLABColor {
    /// Perceptual lightness: 0 is black and 1 is diffuse white.
    pub l: f32,
    /// The green-red opponent axis. Negative is green, positive is red. Most visible colors fall
    /// within about ±0.4.
    pub a: f32,
    /// The blue-yellow opponent axis. Negative is blue, positive is yellow. Most visible colors fall
    /// within about ±0.4.
    pub b: f32,
}

impl OKLABColor {
    /// Converts linear (not gamma-encoded) sRGB into OKLab. Nothing is clamped: any triple of floats
    /// is accepted.
    pub fn from_linear_rgb(rgb: Coord) -> OKLABColor {
        let lms = rgb.transform(&LINEAR_RGB_TO_LMS);
        // cbrt keeps the sign, so negative cone responses from imaginary colors stay real
        OKLABColor::from(lms.map(f32::cbrt).transform(&LMS_TO_OKLAB))
    }

    /// Converts to linear sRGB. Colors outside of the sRGB gamut come back with components outside
    /// of 0-1.
    pub fn to_linear_rgb(&self) -> Coord {
        let lms = Coord::from(*self).transform(&*OKLAB_TO_LMS).map(|x| x.powi(3));
        lms.transform(&*LMS_TO_LINEAR_RGB)
    }

    /// Converts gamma-encoded sRGB, nominally in the range 0-1, into OKLab. The range isn't checked.
    pub fn from_rgb(r: f32, g: f32, b: f32) -> OKLABColor {
        OKLABColor::from_linear_rgb(gamma::decode(Coord { x: r, y: g, z: b }))
    }

    /// Converts to gamma-encoded sRGB. Each channel is clamped to 0-1 as the very last step, so
    /// out-of-gamut colors get the nearest value per channel and a NaN channel comes out as 0.
    pub fn to_srgb(&self) -> (f32, f32, f32) {
        let srgb = gamma::encode(self.to_linear_rgb());
        (
            gamma::clamp_unit(srgb.x),
            gamma::clamp_unit(srgb.y),
            gamma::clamp_unit(srgb.z),
        )
    }

    /// The straight-line distance between two OKLab colors.
    pub fn euclidean_distance(&self, other: &OKLABColor) -> f32 {
        Coord::from(*self).euclidean_distance(&Coord::from(*other))
    }

    /// Returns `true` if every component is within a small tolerance of `other`'s. `==` compares
    /// exactly, which is rarely what you want after a round trip.
    pub fn approx_equal(&self, other: &OKLABColor) -> bool {
        approx_eq!(f32, self.l, other.l, epsilon = TEST_PRECISION)
            && approx_eq!(f32, self.a, other.a, epsilon = TEST_PRECISION)
            && approx_eq!(f32, self.b, other.b, epsilon = TEST_PRECISION)
    }
}

impl Color for OKLABColor {
    fn from_oklab(lab: OKLABColor) -> OKLABColor {
        lab
    }
    fn to_oklab(&self) -> OKLABColor {
        *self
    }
}

impl From<Coord> for OKLABColor {
    fn from(c: Coord) -> OKLABColor {
        OKLABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<OKLABColor> for Coord {
    fn from(val: OKLABColor) -> Self {
        Coord {
            x: val.l,
            y: val.a,
            z: val.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white = OKLABColor::from_rgb(1.0, 1.0, 1.0);
        assert!((white.l - 1.0).abs() <= TEST_PRECISION);
        assert!(white.a.abs() <= 1e-4);
        assert!(white.b.abs() <= 1e-4);
        let black = OKLABColor::from_rgb(0.0, 0.0, 0.0);
        assert_eq!(black, OKLABColor { l: 0.0, a: 0.0, b: 0.0 });
    }
    #[test]
    fn test_published_primaries() {
        // reference values from Ottosson's post
        let red = OKLABColor::from_rgb(1.0, 0.0, 0.0);
        assert!((red.l - 0.627955).abs() <= 1e-4);
        assert!((red.a - 0.224863).abs() <= 1e-4);
        assert!((red.b - 0.125846).abs() <= 1e-4);
        let blue = OKLABColor::from_rgb(0.0, 0.0, 1.0);
        assert!((blue.l - 0.452014).abs() <= 1e-4);
        assert!((blue.a + 0.032457).abs() <= 1e-4);
        assert!((blue.b + 0.311528).abs() <= 1e-4);
    }
    #[test]
    fn test_linear_rgb_roundtrip() {
        let rgb = Coord {
            x: 0.6,
            y: 0.3,
            z: 0.8,
        };
        let lab = OKLABColor::from_linear_rgb(rgb);
        assert!(lab.to_linear_rgb().euclidean_distance(&rgb) <= TEST_PRECISION);
    }
    #[test]
    fn test_error_accumulation() {
        let rgb = Coord {
            x: 0.6,
            y: 0.3,
            z: 0.8,
        };
        let mut lab = OKLABColor::from_linear_rgb(rgb);
        for _i in 0..20 {
            lab = OKLABColor::from_linear_rgb(lab.to_linear_rgb());
        }
        assert!(lab.to_linear_rgb().euclidean_distance(&rgb) <= 1e-4);
    }
    #[test]
    fn test_negative_lms_gives_real_root() {
        // an imaginary color with negative linear light: still finite, not NaN
        let lab = OKLABColor::from_linear_rgb(Coord {
            x: -0.5,
            y: -0.5,
            z: -0.5,
        });
        assert!(lab.l < 0.0);
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
        let back = lab.to_linear_rgb();
        assert!((back.x + 0.5).abs() <= 1e-4);
    }
    #[test]
    fn test_srgb_output_is_clamped() {
        let (r, g, b) = OKLABColor { l: 0.7, a: 0.4, b: 0.0 }.to_srgb();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!(b >= 0.0 && b <= 1.0);
    }
    #[test]
    fn test_approx_equal() {
        let lab = OKLABColor { l: 0.5, a: 0.1, b: -0.1 };
        let close = OKLABColor { l: 0.5 + 1e-7, a: 0.1, b: -0.1 };
        let far = OKLABColor { l: 0.6, a: 0.1, b: -0.1 };
        assert!(lab.approx_equal(&close));
        assert!(!lab.approx_equal(&far));
        assert!(lab != close);
    }
}
