//! Plain-text rendering of parsed roadmaps.

use roadmap_sectionizer::{LineKind, Roadmap, RoadmapStep, StepLine};

/// Render a parsed roadmap for terminal display.
///
/// Timelines become one card per step. The fallback document is returned
/// verbatim so its markdown survives untouched.
pub fn render_roadmap(roadmap: &Roadmap) -> String {
    match roadmap {
        Roadmap::Timeline(steps) => render_timeline(steps),
        Roadmap::Document(text) => text.clone(),
    }
}

fn render_timeline(steps: &[RoadmapStep]) -> String {
    let cards: Vec<String> = steps.iter().map(render_step).collect();
    cards.join("\n\n")
}

fn render_step(step: &RoadmapStep) -> String {
    let mut lines = vec![format!("[Step {}] {}", step.number, step.title)];
    lines.extend(step.lines().map(|line| render_line(&line)));

    // A body's trailing newline splits into one empty segment; the card
    // separator already provides that gap.
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn render_line(line: &StepLine) -> String {
    match line.kind {
        LineKind::Objective => heading_line("Objective:", &line.text),
        // The remainder after "Actions:" is list markup in the house
        // style; only the label survives.
        LineKind::Actions => "  Actions:".to_string(),
        LineKind::Deliverables => heading_line("Deliverables:", &line.text),
        LineKind::Text if line.text.is_empty() => String::new(),
        LineKind::Text => format!("  {}", line.text),
    }
}

fn heading_line(label: &str, text: &str) -> String {
    if text.is_empty() {
        format!("  {label}")
    } else {
        format!("  {label} {text}")
    }
}
