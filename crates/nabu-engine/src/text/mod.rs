//! Text measurement for cell-based output.
//!
//! Every glyph occupies one cell, so measurement and wrapping are pure string
//! operations and layout stays identical between `measure` and the rasterizer.

mod metrics;

pub use metrics::CellMetrics;
