use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::text::CellMetrics;

/// Padding on each side, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

/// Size range a parent allows a child during measure. `max` may be infinite
/// on either axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamps `size` into `[min, max]`. `max` wins if the two cross.
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        self.min.max(size).min(self.max)
    }

    /// Loose constraints for the content box left after `edges`.
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        let inset = Vec2::new(edges.h(), edges.v());
        Self::loose((self.max - inset).max(Vec2::zero()))
    }
}

/// What `Widget::measure` may consult besides its constraints.
pub struct LayoutCtx<'a> {
    pub metrics: &'a CellMetrics,
}

impl LayoutCtx<'_> {
    /// Text size, wrapped at `max_width` unless it is infinite.
    pub fn measure_text(&self, text: &str, max_width: f32) -> Vec2 {
        self.metrics.measure_text(text, max_width.is_finite().then_some(max_width))
    }
}

/// The part of `rect` inside `edges`. Never negative.
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    let origin = Vec2::new(rect.origin.x + edges.left, rect.origin.y + edges.top);
    let size = (rect.size - Vec2::new(edges.h(), edges.v())).max(Vec2::zero());
    Rect::from_origin_size(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_raises_to_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_caps_at_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 20.0)), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn constrain_keeps_infinite_max_open() {
        let c = Constraints::loose(Vec2::new(f32::INFINITY, 4.0));
        assert_eq!(c.constrain(Vec2::new(300.0, 9.0)), Vec2::new(300.0, 4.0));
    }

    #[test]
    fn shrink_drops_min_and_floors_at_zero() {
        let c = Constraints { min: Vec2::new(5.0, 5.0), max: Vec2::new(40.0, 3.0) };
        let s = c.shrink(Edges::symmetric(2.0, 4.0));
        assert_eq!(s, Constraints::loose(Vec2::new(32.0, 0.0)));
    }

    #[test]
    fn inset_rect_moves_origin_and_shrinks() {
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        let inner = inset_rect(Rect::new(5.0, 5.0, 100.0, 60.0), edges);
        assert_eq!(inner, Rect::new(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn inset_rect_never_goes_negative() {
        let inner = inset_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Edges::symmetric(20.0, 20.0));
        assert_eq!(inner.size, Vec2::zero());
    }

    #[test]
    fn measure_text_wraps_only_for_finite_width() {
        let metrics = CellMetrics::new();
        let ctx = LayoutCtx { metrics: &metrics };
        assert_eq!(ctx.measure_text("a b", f32::INFINITY), Vec2::new(3.0, 1.0));
        assert_eq!(ctx.measure_text("a b", 1.0), Vec2::new(1.0, 2.0));
    }
}
