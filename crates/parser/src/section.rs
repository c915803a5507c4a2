use once_cell::sync::Lazy;
use regex::Regex;
use sdoc_model::{Heading, Snippet, SnippetBody};

// Leading indent, an uppercase-started line ending in a literal
// period, then the body (its own leading whitespace captured apart)
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([A-Z][^\n]*)\.\n(\s*)((?s).*)$").unwrap());

/// Heading-length guard: the heading line plus this margin must be
/// strictly shorter than the first body line, otherwise the paragraph
/// is taken for a wrapped long line rather than a section head.
const HEADING_MARGIN: usize = 10;

/// Indentation step per section level, in whitespace characters.
const INDENT_PER_LEVEL: usize = 2;

/// Reclassify a comment paragraph as a section head when it satisfies
/// the heading heuristic
///
/// On a match the heading line (minus its period) becomes the section
/// title, the level derives from the leading indentation, and the text
/// shrinks to the remaining body with that body's own leading
/// whitespace preserved for later outdenting. Comments that fail the
/// heuristic, and all non-comment snippets, pass through unchanged.
#[must_use]
pub fn detect_section(snippet: Snippet) -> Snippet {
    if snippet.body != SnippetBody::Comment {
        return snippet;
    }
    let Some(caps) = HEADING.captures(&snippet.text) else {
        return snippet;
    };

    let heading_len = caps[2].chars().count();
    let first_body_line = caps[4].lines().next().unwrap_or("");
    // Strict inequality: an equal or smaller difference is a line wrap
    if heading_len + HEADING_MARGIN >= first_body_line.chars().count() {
        return snippet;
    }

    let title = caps[2].trim().to_string();
    let level = 1 + caps[1].chars().count() / INDENT_PER_LEVEL;
    let text = format!("{}{}", &caps[3], &caps[4]);
    log::debug!("section {title:?} at level {level}");

    Snippet {
        text,
        heading: Some(Heading::new(title, level)),
        ..snippet
    }
}
