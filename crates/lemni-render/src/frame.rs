//! Plain data for one emitted snapshot.

/// The grid as it stood when a render cycle was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Render cycle id, starting at 1.
    pub cycle:         u64,
    /// Elapsed whole seconds at emission time.
    pub elapsed_secs:  u64,
    /// Cars that contributed a marker to this cycle.
    pub contributions: usize,
    /// [`GRID_ROWS`](crate::GRID_ROWS) lines, each
    /// [`GRID_COLS`](crate::GRID_COLS) wide.
    pub lines:         Vec<String>,
}

impl Frame {
    /// All lines joined with `\n`, with a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Number of `byte` characters across all lines.
    pub fn count(&self, byte: u8) -> usize {
        self.lines.iter().map(|l| l.bytes().filter(|&b| b == byte).count()).sum()
    }
}
