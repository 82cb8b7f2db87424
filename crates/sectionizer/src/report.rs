//! Analysis report envelope.
//!
//! The analyzer backend answers one study-material upload with a JSON
//! document of four text fields. Only `roadmap` is structured further here;
//! the other fields stay opaque markdown for the presentation layer.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sectionizer::extract_steps;
use crate::types::RoadmapStep;

/// One complete analysis of uploaded study material
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Free-form analysis of the material
    pub analysis: String,

    /// Suggested study timetable, opaque markdown
    pub timetable: String,

    /// Step-by-step roadmap, the input to [`Roadmap::parse`]
    pub roadmap: String,

    /// Generation time, carried as ISO-8601 text and displayed verbatim
    pub timestamp: String,
}

impl AnalysisReport {
    /// Parse a report from its JSON representation
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a report file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Sectionize this report's roadmap field
    #[must_use]
    pub fn roadmap_view(&self) -> Roadmap {
        Roadmap::parse(&self.roadmap)
    }
}

/// A roadmap document ready for rendering: either an ordered step timeline
/// or, when no marker was detected, the original text as one opaque block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Roadmap {
    /// At least one `Step N:` marker was found
    Timeline(Vec<RoadmapStep>),
    /// No markers; render the document verbatim
    Document(String),
}

impl Roadmap {
    /// Split a document into steps, keeping it whole when none are found.
    ///
    /// Never fails: a document without markers is a valid roadmap that
    /// renders as plain markdown.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let steps: Vec<RoadmapStep> = extract_steps(text).collect();
        if steps.is_empty() {
            debug!("no step markers found, keeping document verbatim");
            Self::Document(text.to_owned())
        } else {
            debug!("extracted {} roadmap steps", steps.len());
            Self::Timeline(steps)
        }
    }

    /// Check if the verbatim fallback applies
    #[must_use]
    pub const fn is_document(&self) -> bool {
        matches!(self, Self::Document(_))
    }

    /// Get the extracted steps, empty for the fallback form
    #[must_use]
    pub fn steps(&self) -> &[RoadmapStep] {
        match self {
            Self::Timeline(steps) => steps,
            Self::Document(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample_report_json() -> String {
        serde_json::json!({
            "analysis": "Strong verbal skills, weak geometry.",
            "timetable": "Mon-Fri: 2h study blocks",
            "roadmap": "Step 1: Review\n  Redo unit 3\nStep 2: Drill\n  Past papers\n",
            "timestamp": "2025-05-01T10:00:00"
        })
        .to_string()
    }

    #[test]
    fn test_report_from_json_str() {
        let report = AnalysisReport::from_json_str(&sample_report_json())
            .expect("sample report parses");
        assert_eq!(report.timestamp, "2025-05-01T10:00:00");
        assert_eq!(report.timetable, "Mon-Fri: 2h study blocks");
    }

    #[test]
    fn test_report_rejects_missing_fields() {
        let err = AnalysisReport::from_json_str(r#"{"analysis": "only one field"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_report_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(sample_report_json().as_bytes())
            .expect("write report");

        let report = AnalysisReport::from_path(file.path()).expect("report loads");
        let view = report.roadmap_view();
        assert_eq!(view.steps().len(), 2);
        assert_eq!(view.steps()[0].title, "Review");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = AnalysisReport::from_path("/nonexistent/report.json");
        assert!(matches!(err, Err(crate::ReportError::Io(_))));
    }

    #[test]
    fn test_roadmap_with_markers_is_timeline() {
        let roadmap = Roadmap::parse("Step 1: Go\ndo it\n");
        assert!(!roadmap.is_document());
        assert_eq!(roadmap.steps().len(), 1);
    }

    #[test]
    fn test_roadmap_without_markers_is_document() {
        let text = "## Plan\nJust study every day.\n";
        let roadmap = Roadmap::parse(text);
        assert!(roadmap.is_document());
        assert!(roadmap.steps().is_empty());
        assert_eq!(roadmap, Roadmap::Document(text.to_string()));
    }

    #[test]
    fn test_roadmap_serializes_with_variant_tag() {
        let json = serde_json::to_value(Roadmap::parse("nothing here")).expect("serializes");
        assert!(json.get("document").is_some());

        let json = serde_json::to_value(Roadmap::parse("Step 1: A\n")).expect("serializes");
        assert!(json.get("timeline").is_some());
    }
}
