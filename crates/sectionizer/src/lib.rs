//! # Roadmap Sectionizer
//!
//! Splits AI-generated roadmap markdown into ordered `Step N` records for
//! timeline-style rendering.
//!
//! ## Philosophy
//!
//! Generated roadmaps are prose, not a format: labels are not validated
//! and markers count wherever they appear. The sectionizer never rejects
//! input. It slices what it recognizes, and a document yielding zero steps
//! is a rendering decision (show it verbatim), not an error.
//!
//! ## Architecture
//!
//! ```text
//! Roadmap markdown
//!     │
//!     ├──> Marker scan ("Step <digits>:" + title line)
//!     │    ├─> body runs to the next marker or end of input
//!     │    └─> uniform body indentation stripped
//!     │
//!     ├──> Body line classification
//!     │    └─> Objective / Actions / Key Deliverables / Text
//!     │
//!     └──> Emit RoadmapStep[] (zero steps → render verbatim)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use roadmap_sectionizer::extract_steps;
//!
//! let roadmap = "Step 1: Intro\n  Learn basics\nStep 2: Practice\n  Do exercises\n";
//! for step in extract_steps(roadmap) {
//!     println!("{}. {} ({} bytes)", step.number, step.title, step.span_len());
//! }
//! ```

mod error;
mod indent;
mod lines;
mod report;
mod sectionizer;
mod types;

pub use error::{ReportError, Result};
pub use indent::strip_common_indentation;
pub use lines::{classify_line, LineKind, StepLine};
pub use report::{AnalysisReport, Roadmap};
pub use sectionizer::{extract_steps, Steps};
pub use types::RoadmapStep;
