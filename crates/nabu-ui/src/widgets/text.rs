use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A single-run text widget.
///
/// Wrapping is controlled by the width constraint from the parent.
///
/// # Example
/// ```rust,ignore
/// Text::new("Loading started...", Color::white())
/// ```
pub struct Text {
    pub text: String,
    pub color: Color,
}

impl Text {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self { text: text.into(), color }
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(ctx.measure_text(&self.text, constraints.max.x))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let max_w = if rect.size.x > 0.0 { Some(rect.size.x) } else { None };
        painter.text(&self.text, self.color, rect.origin, max_w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render_plain;

    #[test]
    fn wraps_to_parent_width() {
        let out = render_plain(Text::new("one two three", Color::white()).into(), 8, 3);
        assert_eq!(out, "one two\nthree\n");
    }
}
