//! Nabu engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers: geometry,
//! colors, the draw stream, cell-based text metrics, clocks, logging, and a
//! character-grid rasterizer for terminals.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
