use once_cell::sync::Lazy;
use regex::Regex;
use sdoc_model::{Snippet, SnippetBody};

// `<name> | <author>` on the first line, optional body below it
static PRELUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^|]+)\|([^\n]*)\n?((?s).*)$").unwrap());

/// Recognize the `<name> | <author>` prelude paragraph
///
/// Applies to the first snippet of a file only, whatever its
/// provisional role. On a match the snippet becomes a prelude carrying
/// the name and author, and its text shrinks to the remaining body
/// (empty when the paragraph was a single line). A snippet that does
/// not match is returned unchanged.
#[must_use]
pub fn extract_prelude(snippet: Snippet) -> Snippet {
    let Some(caps) = PRELUDE.captures(&snippet.text) else {
        return snippet;
    };

    let name = caps[1].trim().to_string();
    let author = caps[2].trim().to_string();
    let body = caps[3].to_string();
    log::debug!("prelude: name={name:?} author={author:?}");

    Snippet {
        text: body,
        body: SnippetBody::Prelude { name, author },
        ..snippet
    }
}
