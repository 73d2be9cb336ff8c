//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports: the [`Color`] trait and both color types.

pub use color::Color;
pub use colors::{OKLABColor, OKLCHColor};
