//! Step extraction from roadmap markdown.
//!
//! A step opens at a `Step <digits>:` marker followed by a one-line title.
//! Its body runs to the next marker occurrence or the end of input. The
//! scan is purely lexical: markers are recognized wherever they appear,
//! including inside body prose, and step numbers are carried verbatim with
//! no ordering or uniqueness checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::indent::strip_common_indentation;
use crate::types::RoadmapStep;

/// Full step marker: label digits plus the title line.
///
/// The whitespace after the colon is greedy and may cross newlines, so a
/// marker whose own line holds no title adopts the next non-empty line.
static STEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Step\s+([0-9]+):\s*([^\n]+)").expect("step pattern"));

/// Bare marker, title not required. Terminates the previous step's body.
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Step\s+[0-9]+:").expect("marker pattern"));

/// Scan `text` for `Step N:` markers and iterate the steps between them.
///
/// The iterator is lazy and borrows `text`; collect it for the eager form.
/// Inputs without any marker simply yield nothing, which callers treat as
/// the signal to fall back to rendering the document verbatim. Scanning is
/// pure: no input is an error, and iterating twice over the same text gives
/// the same steps.
///
/// # Examples
///
/// ```
/// use roadmap_sectionizer::extract_steps;
///
/// let steps: Vec<_> = extract_steps("Step 1: Intro\n  Learn basics\n").collect();
/// assert_eq!(steps[0].number, "1");
/// assert_eq!(steps[0].title, "Intro");
/// assert_eq!(steps[0].body, "Learn basics\n");
/// ```
#[must_use]
pub fn extract_steps(text: &str) -> Steps<'_> {
    Steps { text, pos: 0 }
}

/// Lazy iterator over the steps of a roadmap document.
///
/// Created by [`extract_steps`]. Cloning preserves the current scan
/// position; call [`extract_steps`] again to restart from the top.
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for Steps<'_> {
    type Item = RoadmapStep;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = STEP_RE.captures_at(self.text, self.pos)?;
        let marker = caps.get(0).expect("group 0 is the whole match");

        // The newline closing the title line separates heading from body.
        let mut body_start = marker.end();
        if self.text[body_start..].starts_with('\n') {
            body_start += 1;
        }

        // A bare marker ends the body even when it never forms a full step.
        let body_end = MARKER_RE
            .find_at(self.text, body_start)
            .map_or(self.text.len(), |next| next.start());

        self.pos = body_end;

        Some(RoadmapStep {
            number: caps[1].to_owned(),
            title: caps[2].to_owned(),
            body: strip_common_indentation(&self.text[body_start..body_end]),
            start: marker.start(),
            end: body_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(text: &str) -> Vec<RoadmapStep> {
        extract_steps(text).collect()
    }

    #[test]
    fn test_no_marker_yields_nothing() {
        assert!(collect("Just a plain paragraph with no steps.").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn test_marker_requires_space_and_digits() {
        assert!(collect("Step1: missing space").is_empty());
        assert!(collect("step 1: lowercase").is_empty());
        assert!(collect("Step 2a: trailing letter").is_empty());
    }

    #[test]
    fn test_label_kept_verbatim() {
        let steps = collect("Step 12: Twelve\nStep 3: Three\n");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].number, "12");
        assert_eq!(steps[1].number, "3");
    }

    #[test]
    fn test_marker_inside_body_opens_a_new_step() {
        let steps = collect("Step 1: Setup\nAs the guide says \"Step 9: done\" we stop.\n");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].body, "As the guide says \"");
        assert_eq!(steps[1].number, "9");
        assert_eq!(steps[1].title, "done\" we stop.");
    }

    #[test]
    fn test_titleless_trailing_marker_ends_previous_body() {
        let steps = collect("Step 1: A\nline\nStep 2:");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].body, "line\n");
        assert_eq!(&"Step 1: A\nline\nStep 2:"[..steps[0].end], "Step 1: A\nline\n");
    }

    #[test]
    fn test_title_whitespace_bridges_to_next_line() {
        // "Step 2:" has no title on its own line, so the greedy whitespace
        // scan adopts the following line, swallowing the "Step 3:" marker.
        let steps = collect("Step 1: A\nStep 2:\nStep 3: C");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title, "A");
        assert_eq!(steps[0].body, "");
        assert_eq!(steps[1].number, "2");
        assert_eq!(steps[1].title, "Step 3: C");
        assert_eq!(steps[1].body, "");
    }

    #[test]
    fn test_whitespace_only_title_stays_whitespace() {
        let steps = collect("Step 1:   \n\n");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].title, " ");
        assert_eq!(steps[0].body, "\n");
    }

    #[test]
    fn test_preamble_before_first_marker_is_skipped() {
        let text = "intro prose\nStep 1: A\nbody one\nStep 2: B\nbody two";
        let steps = collect(text);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].start, text.find("Step 1").unwrap());
        assert_eq!(steps[0].end, steps[1].start);
        assert_eq!(steps[1].end, text.len());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let text = "Step 1: A\nx\nStep 2: B\ny\n";
        let first: Vec<_> = extract_steps(text).collect();
        let second: Vec<_> = extract_steps(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clone_preserves_scan_position() {
        let mut steps = extract_steps("Step 1: A\nx\nStep 2: B\ny\n");
        let first = steps.next();
        assert_eq!(first.as_ref().map(|s| s.number.as_str()), Some("1"));

        let mut resumed = steps.clone();
        assert_eq!(resumed.next().map(|s| s.number), Some("2".to_string()));
        assert_eq!(steps.next().map(|s| s.number), Some("2".to_string()));
    }

    #[test]
    fn test_crlf_titles_keep_carriage_return() {
        let steps = collect("Step 1: A\r\nbody\r\n");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].title, "A\r");
        assert_eq!(steps[0].body, "body\r\n");
    }
}
