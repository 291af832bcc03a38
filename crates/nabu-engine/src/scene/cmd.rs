use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Layer of a draw item. Higher layers paint over lower ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// What a draw item puts on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Cell backgrounds.
    Rect(RectCmd),
    /// Glyphs and their foreground color.
    Text(TextCmd),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub color: Color,
    /// Top-left cell of the first line.
    pub origin: Vec2,
    /// Wrap width in cells, or `None` to keep each line whole.
    pub max_width: Option<f32>,
}
