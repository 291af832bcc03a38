use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::paint::Color;
use nabu_engine::scene::{DrawList, ZIndex};
use nabu_engine::text::CellMetrics;

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API. Every call gets the
/// next z-index, so later paints land on top of earlier ones.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    metrics: &'a CellMetrics,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, metrics: &'a CellMetrics) -> Self {
        Self { draw_list, metrics, z: 0 }
    }

    /// Returns a [`LayoutCtx`] so containers can re-measure children while painting.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { metrics: self.metrics }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid rectangle (cell backgrounds).
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    /// Text at `origin` (top-left of the first line), wrapped at `max_width`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        color: Color,
        origin: Vec2,
        max_width: Option<f32>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, color, origin, max_width);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
