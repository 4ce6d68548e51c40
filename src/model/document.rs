//! Document-level types.

use serde::{Deserialize, Serialize};

/// A titled, line-oriented document rendered onto a single page.
///
/// Transient input to [`crate::render::to_pdf`]: built per call from order
/// data (or ad-hoc text), consumed, then discarded. Lines keep their order;
/// sanitization happens at render time, so the model holds the original
/// text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDocument {
    /// Document title, drawn as the first line.
    pub title: String,

    /// Body lines, drawn in order below the title.
    pub lines: Vec<String>,
}

impl TextDocument {
    /// Create a document with a title and no body lines.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a body line.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append an empty spacer line.
    pub fn add_blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Number of body lines (the title is not counted).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
