//! Indented text output for [`Prioritizer::render_summary`](super::Prioritizer::render_summary).

/// Accumulates lines at a nesting depth, one `indent` unit per level.
#[derive(Debug, Clone)]
pub struct SummaryWriter<'a> {
    indent: &'a str,
    depth: usize,
    out: String,
}

impl<'a> SummaryWriter<'a> {
    /// Creates a writer at depth 0.
    pub fn new(indent: &'a str) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.indent);
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
        self
    }

    /// Runs `f` one level deeper.
    pub fn nested(&mut self, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        f(self);
        self.depth -= 1;
        self
    }

    pub fn finish(self) -> String {
        self.out
    }
}
