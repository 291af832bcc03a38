use crate::coords::Vec2;

/// Monospace text metrics: one character per cell, one line per row.
///
/// Shared by the UI layer (for layout) and [`TextCanvas`](crate::render::TextCanvas)
/// (for drawing), so measured blocks and painted blocks always agree.
#[derive(Debug, Copy, Clone, Default)]
pub struct CellMetrics;

impl CellMetrics {
    pub fn new() -> Self {
        Self
    }

    /// Computes the size of a laid-out text block in cells.
    ///
    /// An empty string still occupies one row.
    #[must_use]
    pub fn measure_text(&self, text: &str, max_width: Option<f32>) -> Vec2 {
        let lines = self.wrap(text, max_width);
        let w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Vec2::new(w as f32, lines.len().max(1) as f32)
    }

    /// Greedy word wrap.
    ///
    /// Explicit `\n` always breaks. Runs of whitespace between words collapse
    /// to a single space. A word wider than `max_width` is split across rows.
    #[must_use]
    pub fn wrap(&self, text: &str, max_width: Option<f32>) -> Vec<String> {
        let limit = max_width.filter(|w| w.is_finite()).map(|w| (w.floor() as usize).max(1));

        let mut out = Vec::new();
        for paragraph in text.split('\n') {
            match limit {
                None => out.push(paragraph.to_string()),
                Some(limit) => wrap_paragraph(paragraph, limit, &mut out),
            }
        }
        out
    }
}

fn wrap_paragraph(paragraph: &str, limit: usize, out: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > limit {
            if line_len > 0 {
                out.push(std::mem::take(&mut line));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(limit).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    out.push(chunk.iter().collect());
                } else {
                    line = chunk.iter().collect();
                    line_len = chunk.len();
                }
            }
            continue;
        }

        if line_len == 0 {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= limit {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            out.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        }
    }

    out.push(line);
}
