use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::Color;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Pads a single child and optionally fills the padded box with a color.
///
/// ```rust,ignore
/// Container::new()
///     .padding(Edges::symmetric(1.0, 2.0))
///     .background(Color::from_srgb_u8(52, 58, 64, 255))
///     .child(Text::new("hello", white))
/// ```
#[derive(Default)]
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Color>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = match &self.child {
            Some(child) => child.measure(constraints.shrink(self.padding), ctx),
            None => Vec2::zero(),
        };
        constraints.constrain(Vec2::new(inner.x + self.padding.h(), inner.y + self.padding.v()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(bg) = self.background {
            painter.fill_rect(rect, bg);
        }
        if let Some(child) = &self.child {
            child.paint(painter, inset_rect(rect, self.padding));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render_plain;
    use crate::widgets::text::Text;
    use nabu_engine::text::CellMetrics;

    #[test]
    fn size_is_child_plus_padding() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        let c = Container::new()
            .padding(Edges::symmetric(1.0, 2.0))
            .child(Text::new("abc", Color::white()));

        let size = c.measure(Constraints::loose(Vec2::new(80.0, 24.0)), &ctx);
        assert_eq!(size, Vec2::new(7.0, 3.0));
    }

    #[test]
    fn empty_container_is_just_padding() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        let size = Container::new()
            .padding(Edges::symmetric(1.0, 1.0))
            .measure(Constraints::loose(Vec2::new(80.0, 24.0)), &ctx);
        assert_eq!(size, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn child_is_painted_inside_padding() {
        let c = Container::new().padding(Edges::symmetric(1.0, 2.0)).child(Text::new("x", Color::white()));
        assert_eq!(render_plain(c.into(), 5, 3), "\n  x\n");
    }
}
