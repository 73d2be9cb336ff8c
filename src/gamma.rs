//! The sRGB transfer function from IEC 61966-2-1, in both directions. Like most RGB gamuts, there's
//! a linear part near black and an exponential part everywhere else. The curves themselves don't
//! clamp: values outside of 0-1 go through the same formulae. [`clamp_unit`] is kept separate so the
//! pipeline only applies it to the final encoded output.

use coord::Coord;
use num::Float;

/// Decodes a single gamma-encoded sRGB channel into linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes a single channel of linear light with the sRGB gamma curve.
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Pins an encoded channel to 0-1. NaN becomes 0, because `max` prefers the number over NaN.
pub fn clamp_unit<T: Float>(c: T) -> T {
    c.max(T::zero()).min(T::one())
}

/// Applies [`srgb_to_linear`] to each component.
pub fn decode(rgb: Coord) -> Coord {
    rgb.map(srgb_to_linear)
}

/// Applies [`linear_to_srgb`] to each component.
pub fn encode(linear: Coord) -> Coord {
    linear.map(linear_to_srgb)
}
