//! Paint types.
//!
//! Colors are stored premultiplied, matching how the draw stream composes
//! overlapping backgrounds. Terminal output converts back to straight sRGB
//! bytes at the very end.

mod color;

pub use color::Color;
