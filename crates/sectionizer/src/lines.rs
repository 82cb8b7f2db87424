//! Body line classification.
//!
//! Generated step bodies use a loose house style: `Objective:`, `Actions:`
//! and `Key Deliverables:` headings, optionally bolded or bulleted, above
//! free-form text. Classifying lines up front lets renderers badge the
//! headings without re-deriving the patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static OBJECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\*\-]?\s*(\*\*)?Objective:?(\*\*)?").expect("objective pattern"));

static ACTIONS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\*\-]?\s*(\*\*)?Actions:?(\*\*)?").expect("actions pattern"));

static DELIVERABLES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\*\-]?\s*(\*\*)?Key Deliverables:?(\*\*)?").expect("deliverables pattern")
});

/// Kind of a step body line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// An `Objective:` heading line
    Objective,
    /// An `Actions:` heading line
    Actions,
    /// A `Key Deliverables:` heading line
    Deliverables,
    /// Any other line
    Text,
}

impl LineKind {
    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Objective => "objective",
            Self::Actions => "actions",
            Self::Deliverables => "deliverables",
            Self::Text => "text",
        }
    }

    /// Check if this is a recognized heading (vs plain text)
    #[must_use]
    pub const fn is_heading(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// A classified body line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepLine {
    /// What the line was recognized as
    pub kind: LineKind,

    /// Line content with surrounding whitespace trimmed and, for heading
    /// lines, the recognized marker removed
    pub text: String,
}

/// Classify a single body line.
///
/// Matching happens on the trimmed line. Heading markers tolerate a leading
/// `*` or `-` bullet, bold `**` wrappers, and an optional colon; the first
/// matching pattern wins, in the order objective, actions, deliverables.
#[must_use]
pub fn classify_line(line: &str) -> StepLine {
    let trimmed = line.trim();
    for (pattern, kind) in [
        (&OBJECTIVE_RE, LineKind::Objective),
        (&ACTIONS_RE, LineKind::Actions),
        (&DELIVERABLES_RE, LineKind::Deliverables),
    ] {
        if pattern.is_match(trimmed) {
            let text = pattern.replace(trimmed, "").trim().to_owned();
            return StepLine { kind, text };
        }
    }
    StepLine {
        kind: LineKind::Text,
        text: trimmed.to_owned(),
    }
}
