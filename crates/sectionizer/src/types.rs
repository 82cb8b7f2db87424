use serde::{Deserialize, Serialize};

use crate::lines::{classify_line, StepLine};

/// A single roadmap step with its source position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoadmapStep {
    /// Step label exactly as written in the marker (e.g. "1", "12")
    pub number: String,

    /// Single-line heading following the marker
    pub title: String,

    /// Content up to the next marker, with uniform indentation removed
    pub body: String,

    /// Byte offset of the marker in the source text
    pub start: usize,

    /// Byte offset one past the raw body in the source text
    pub end: usize,
}

impl RoadmapStep {
    /// Create a new roadmap step
    #[must_use]
    pub const fn new(number: String, title: String, body: String, start: usize, end: usize) -> Self {
        Self {
            number,
            title,
            body,
            start,
            end,
        }
    }

    /// Get the byte length of this step's slice of the source text
    #[must_use]
    pub const fn span_len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the body carries any visible content
    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }

    /// Classify the body lines, in order
    pub fn lines(&self) -> impl Iterator<Item = StepLine> + '_ {
        self.body.split('\n').map(classify_line)
    }
}
