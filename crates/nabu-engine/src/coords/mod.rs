//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical space:
//! - Logical pixels, one pixel per terminal cell
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
