//! This file provides the matrices used to move between linear sRGB, LMS cone responses, and OKLab,
//! along with a function for computing inverses. Only the forward matrices are written out: the
//! inverses are computed from them once, so that going forward and back again can't drift because
//! two separately-rounded tables disagree in their last digits.

/// A 3x3 matrix of single-precision floats, stored row by row.
pub type Matrix3 = [[f32; 3]; 3];

/// The precision used for testing: values within this distance are considered the same.
pub const TEST_PRECISION: f32 = 1e-5;

/// Linear sRGB to LMS cone response.
pub const LINEAR_RGB_TO_LMS: Matrix3 = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS to OKLab.
pub const LMS_TO_OKLAB: Matrix3 = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

lazy_static! {
    /// LMS cone response to linear sRGB.
    pub static ref LMS_TO_LINEAR_RGB: Matrix3 = inv(&LINEAR_RGB_TO_LMS);
    /// OKLab to cube-rooted LMS.
    pub static ref OKLAB_TO_LMS: Matrix3 = inv(&LMS_TO_OKLAB);
}

/// The determinant of a 3x3 matrix, by cofactor expansion along the first row.
pub fn det(m: &Matrix3) -> f32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        + m[0][1] * (m[1][2] * m[2][0] - m[1][0] * m[2][2])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Not safe for general use. The only reason this is here is to calculate the inverse of constant
/// matrices, using the adjugate over the determinant. This panics on singular matrices!
pub fn inv(m: &Matrix3) -> Matrix3 {
    let d = det(m);
    if d == 0.0 || !d.is_finite() {
        panic!("Constant matrix not invertible!")
    }
    let inv_d = 1.0 / d;
    // the adjugate is the transpose of the cofactor matrix, written out directly
    let adj = [
        [
            m[1][1] * m[2][2] - m[1][2] * m[2][1],
            m[0][2] * m[2][1] - m[0][1] * m[2][2],
            m[0][1] * m[1][2] - m[0][2] * m[1][1],
        ],
        [
            m[1][2] * m[2][0] - m[1][0] * m[2][2],
            m[0][0] * m[2][2] - m[0][2] * m[2][0],
            m[0][2] * m[1][0] - m[0][0] * m[1][2],
        ],
        [
            m[1][0] * m[2][1] - m[1][1] * m[2][0],
            m[0][1] * m[2][0] - m[0][0] * m[2][1],
            m[0][0] * m[1][1] - m[0][1] * m[1][0],
        ],
    ];
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = adj[i][j] * inv_d;
        }
    }
    out
}

/// Matrix product of two 3x3 matrices.
pub fn mat_mul(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            out[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}
