use once_cell::sync::Lazy;
use regex::Regex;
use sdoc_model::{Snippet, SnippetBody};

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static COMMENT_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[A-Z]").unwrap());
static PIPE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|").unwrap());

/// Split raw text into paragraphs on runs of two-or-more newlines
///
/// Leading whitespace of each paragraph is preserved; the section
/// detector needs it to measure indentation. Empty chunks survive so
/// that no input is ever dropped.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK.split(text).collect()
}

/// Assign the initial role of one paragraph from its first non-blank
/// character: uppercase letter → comment, `|` → pipe, anything else →
/// source
#[must_use]
pub fn classify(paragraph: &str) -> SnippetBody {
    if COMMENT_START.is_match(paragraph) {
        SnippetBody::Comment
    } else if PIPE_START.is_match(paragraph) {
        SnippetBody::Pipe
    } else {
        SnippetBody::Source
    }
}

/// Split and classify: raw text to the flat snippet sequence
#[must_use]
pub fn parse_paragraphs(text: &str) -> Vec<Snippet> {
    let snippets: Vec<Snippet> = split_paragraphs(text)
        .into_iter()
        .map(|chunk| Snippet::new(chunk, classify(chunk)))
        .collect();
    log::debug!("split input into {} paragraphs", snippets.len());
    snippets
}
