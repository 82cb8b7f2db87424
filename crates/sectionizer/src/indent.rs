//! Uniform indentation removal for step bodies.
//!
//! Generated roadmaps often indent the content under each step marker by a
//! fixed amount. Stripping the shared prefix keeps the body readable when it
//! is rendered outside its original context.

/// Remove the minimum shared leading indentation from every non-blank line.
///
/// Lines are split on `'\n'` so carriage returns and a trailing empty
/// segment survive untouched. Blank lines (empty or whitespace-only) impose
/// no constraint and pass through verbatim. When every line is blank the
/// input is returned unchanged. Indentation is counted in characters, so
/// tabs and other whitespace each weigh one.
///
/// The operation is idempotent: after one pass the minimum indentation is
/// zero, and a second pass has nothing left to remove.
#[must_use]
pub fn strip_common_indentation(text: &str) -> String {
    let min_indent = text
        .split('\n')
        .filter(|line| !is_blank(line))
        .map(leading_whitespace)
        .min();

    let Some(min_indent) = min_indent else {
        // No non-blank line exists to measure against.
        return text.to_owned();
    };
    if min_indent == 0 {
        return text.to_owned();
    }

    text.split('\n')
        .map(|line| {
            if is_blank(line) {
                line
            } else {
                skip_chars(line, min_indent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Count leading whitespace characters of a line
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Check whether a line is empty or whitespace-only
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Drop the first `count` characters of a line
fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
