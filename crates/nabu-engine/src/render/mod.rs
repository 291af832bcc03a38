//! Rasterization of the draw stream.
//!
//! The only backend is a character grid suitable for terminals and snapshot
//! tests. It consumes a [`DrawList`](crate::scene::DrawList) in paint order.

mod canvas;

pub use canvas::{Cell, TextCanvas};
