//! This module contains the color types that implement [`Color`]. For convenience, each main type is
//! imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod oklabcolor;
pub mod oklchcolor;

// for convenience, use this namespace for the color objects
pub use self::oklabcolor::OKLABColor;
pub use self::oklchcolor::OKLCHColor;
