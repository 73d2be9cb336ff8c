//! This module contains a struct, [`Coord`](coord::Coord), that models a point in 3D space and
//! supports the small amount of math every conversion in this crate needs: componentwise subtraction,
//! multiplication by a 3x3 matrix, and applying a function to each component. It takes the place of
//! a SIMD vector type while staying a plain, stack-allocated value.

use std::ops::Sub;

use consts::Matrix3;

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`. Any color that converts to
/// and from a `Coord` matches its components with these axes in the order of the letters in its
/// name: `OKLABColor` puts `l` on the x-axis, `a` on the y-axis, and `b` on the z-axis.
///
/// # Example
/// ```
/// # use oklch::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // subtraction is componentwise
/// assert_eq!(point_1 - point_2, Coord{x: -6., y: 6., z: 4.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f32,
    /// The second axis.
    pub y: f32,
    /// The third axis.
    pub z: f32,
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Coord {
    /// Applies `f` to each component independently, returning a new Coord.
    /// # Example
    /// ```
    /// # use oklch::coord::Coord;
    /// let cubes = Coord{x: -8., y: 27., z: 0.}.map(f32::cbrt);
    /// assert_eq!(cubes, Coord{x: -2., y: 3., z: 0.});
    /// ```
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }

    /// Multiplies a matrix by this point as a column vector, returning `m * self`.
    pub fn transform(self, m: &Matrix3) -> Coord {
        let row = |r: &[f32; 3]| r[0] * self.x + r[1] * self.y + r[2] * self.z;
        Coord {
            x: row(&m[0]),
            y: row(&m[1]),
            z: row(&m[2]),
        }
    }

    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. This is only a perceptual distance when the points come
    /// from a space built for it, such as OKLab: in OKLCH or sRGB it means very little.
    /// # Example
    /// ```
    /// # use oklch::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-6);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f32 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }
}
