use nabu_engine::coords::{Rect, Vec2};
use nabu_engine::scene::DrawList;
use nabu_engine::text::CellMetrics;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Element;

/// Top-level coordinator that owns per-frame resources.
///
/// Owns the text metrics and the `DrawList` populated each frame by
/// [`frame`](Self::frame). The rasterizer lives in the application and
/// receives the returned `&mut DrawList`.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let draw_list = ui.frame(root, Vec2::new(80.0, 24.0));
/// canvas.rasterize(draw_list);
/// ```
pub struct UiScene {
    pub metrics: CellMetrics,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { metrics: CellMetrics::new(), draw_list: DrawList::new() }
    }

    /// Measure and paint a widget tree for this frame.
    ///
    /// The root is consumed (it is freshly built each frame) and always
    /// occupies the full viewport. The returned list is valid until the next
    /// call.
    pub fn frame(&mut self, root: Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { metrics: &self.metrics };
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        let mut painter = Painter::new(&mut self.draw_list, &self.metrics);
        painter.push_clip(rect);
        root.paint(&mut painter, rect);
        painter.pop_clip();

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `root` into a `cols × rows` grid and returns it as plain text.
///
/// Handy for snapshot-style assertions and for logging a frame.
pub fn render_plain(root: Element, cols: usize, rows: usize) -> String {
    let mut scene = UiScene::new();
    let mut canvas = nabu_engine::render::TextCanvas::new(cols, rows);
    canvas.rasterize(scene.frame(root, Vec2::new(cols as f32, rows as f32)));
    canvas.to_plain_string()
}
