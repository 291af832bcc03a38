use nabu_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Stacks children top to bottom, each as wide as the column.
///
/// ```rust,ignore
/// Column::new()
///     .spacing(1.0)
///     .child(Text::new("Title", white))
///     .children(rows)
/// ```
#[derive(Default)]
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank rows between neighbouring children.
    pub fn spacing(mut self, rows: f32) -> Self {
        self.spacing = rows;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Children get the full width when it is bounded, any height.
    fn child_constraints(width: f32) -> Constraints {
        let min_w = if width.is_finite() { width } else { 0.0 };
        Constraints { min: Vec2::new(min_w, 0.0), max: Vec2::new(width, f32::INFINITY) }
    }

    fn gaps(&self) -> f32 {
        self.children.len().saturating_sub(1) as f32 * self.spacing
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_c = Self::child_constraints(constraints.max.x);
        let (w, h) = self
            .children
            .iter()
            .map(|child| child.measure(child_c, ctx))
            .fold((0.0_f32, self.gaps()), |(w, h), s| (w.max(s.x), h + s.y));

        let w = if constraints.max.x.is_finite() { constraints.max.x } else { w };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let child_c = Self::child_constraints(rect.size.x);

        let mut y = rect.origin.y;
        for child in &self.children {
            let size = child.measure(child_c, &ctx);
            child.paint(painter, Rect::new(rect.origin.x, y, size.x, size.y));
            y += size.y + self.spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::render_plain;
    use crate::widgets::text::Text;
    use nabu_engine::paint::Color;
    use nabu_engine::text::CellMetrics;

    fn t(s: &str) -> Text {
        Text::new(s, Color::white())
    }

    #[test]
    fn height_is_children_plus_gaps() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        let col = Column::new().spacing(1.0).child(t("a")).child(t("b")).child(t("c"));

        let size = col.measure(Constraints::loose(Vec2::new(20.0, 24.0)), &ctx);
        assert_eq!(size, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn unbounded_width_reports_widest_child() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        let col = Column::new().child(t("abcd")).child(t("ab"));

        let size = col.measure(Constraints::loose(Vec2::new(f32::INFINITY, 24.0)), &ctx);
        assert_eq!(size, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn empty_column_has_no_height() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        let size = Column::new().spacing(3.0).measure(Constraints::loose(Vec2::new(10.0, 10.0)), &ctx);
        assert_eq!(size.y, 0.0);
    }

    #[test]
    fn paints_children_top_to_bottom() {
        let col = Column::new().spacing(1.0).child(t("first")).child(t("second"));
        assert_eq!(render_plain(col.into(), 10, 4), "first\n\nsecond\n");
    }

    #[test]
    fn long_child_wraps_to_column_width() {
        let col = Column::new().child(t("aa bb")).child(t("cc"));
        assert_eq!(render_plain(col.into(), 3, 3), "aa\nbb\ncc");
    }
}
