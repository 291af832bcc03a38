use std::fmt::Write as _;

use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, RectCmd, TextCmd};
use crate::text::CellMetrics;

/// One character cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Cell {
    const BLANK: Cell = Cell { ch: ' ', fg: None, bg: None };
}

/// A `cols × rows` character grid the draw list is rasterized into.
///
/// Rects paint cell backgrounds; text paints glyphs and foreground colors.
/// Everything is clipped to the canvas bounds and to each item's clip rect.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
    metrics: CellMetrics,
}

impl TextCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows, cells: vec![Cell::BLANK; cols * rows], metrics: CellMetrics::new() }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Resets every cell to a blank space with no colors.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Returns the cell at `(col, row)`, or `None` outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        (col < self.cols && row < self.rows).then(|| &self.cells[row * self.cols + col])
    }

    /// Clears the grid, then draws `list` back-to-front.
    pub fn rasterize(&mut self, list: &mut DrawList) {
        self.clear();
        for item in list.iter_in_paint_order() {
            let clip = self.clip_span(item.clip_rect);
            match &item.cmd {
                DrawCmd::Rect(cmd) => self.fill_rect(cmd, clip),
                DrawCmd::Text(cmd) => self.draw_text(cmd, clip),
            }
        }
    }

    /// Rows as plain text, trailing spaces trimmed, joined by `\n`.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.rows);
        for (i, row) in self.cells.chunks(self.cols.max(1)).take(self.rows).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let line: String = row.iter().map(|c| c.ch).collect();
            out.push_str(line.trim_end());
        }
        out
    }

    /// Rows with 24-bit ANSI color escapes, each row reset at its end.
    pub fn to_ansi_string(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.cells.chunks(self.cols.max(1)).take(self.rows).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let mut style: (Option<Color>, Option<Color>) = (None, None);
            for cell in row {
                if (cell.fg, cell.bg) != style {
                    out.push_str("\x1b[0m");
                    if let Some(fg) = cell.fg {
                        let [r, g, b] = fg.to_rgb_u8();
                        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
                    }
                    if let Some(bg) = cell.bg {
                        let [r, g, b] = bg.to_rgb_u8();
                        let _ = write!(out, "\x1b[48;2;{r};{g};{b}m");
                    }
                    style = (cell.fg, cell.bg);
                }
                out.push(cell.ch);
            }
            out.push_str("\x1b[0m");
        }
        out
    }

    // ── internal ──────────────────────────────────────────────────────────

    /// Effective drawable cell span: canvas bounds intersected with `clip`.
    fn clip_span(&self, clip: Option<Rect>) -> (i64, i64, i64, i64) {
        let bounds = (0, 0, self.cols as i64, self.rows as i64);
        match clip {
            None => bounds,
            Some(rect) => {
                let (x0, y0, x1, y1) = rect.cell_span();
                (x0.max(bounds.0), y0.max(bounds.1), x1.min(bounds.2), y1.min(bounds.3))
            }
        }
    }

    fn fill_rect(&mut self, cmd: &RectCmd, clip: (i64, i64, i64, i64)) {
        if cmd.color.is_transparent() {
            return;
        }
        let (rx0, ry0, rx1, ry1) = cmd.rect.cell_span();
        let (x0, y0, x1, y1) = (rx0.max(clip.0), ry0.max(clip.1), rx1.min(clip.2), ry1.min(clip.3));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row as usize * self.cols;
            for cell in &mut self.cells[start + x0 as usize..start + x1 as usize] {
                cell.bg = Some(cmd.color);
            }
        }
    }

    fn draw_text(&mut self, cmd: &TextCmd, clip: (i64, i64, i64, i64)) {
        let col0 = cmd.origin.x.round() as i64;
        let row0 = cmd.origin.y.round() as i64;
        for (dy, line) in self.metrics.wrap(&cmd.text, cmd.max_width).iter().enumerate() {
            let row = row0 + dy as i64;
            if row < clip.1 {
                continue;
            }
            if row >= clip.3 {
                break;
            }
            for (dx, ch) in line.chars().enumerate() {
                let col = col0 + dx as i64;
                if col < clip.0 {
                    continue;
                }
                if col >= clip.2 {
                    break;
                }
                let cell = &mut self.cells[row as usize * self.cols + col as usize];
                cell.ch = ch;
                cell.fg = Some(cmd.color);
            }
        }
    }
}
