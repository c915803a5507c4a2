use once_cell::sync::Lazy;
use regex::Regex;
use sdoc_model::{Snippet, SnippetBody};

// One or two digits, a dot, one or two spaces, then a letter
static LIST_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|?\s*(\d{1,2})\.\s{1,2}[A-Za-z]").unwrap());

// Item text runs to the next line that opens with a list number. The
// scan can mis-segment items containing a period followed by spaces
// and a capital at a line break; that quirk is part of the format.
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\s{1,2}([A-Za-z](?:[^\n]|\n\s*[^\s0-9])*)").unwrap());

static LEADING_PIPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)\|").unwrap());

/// Resolve a provisional pipe paragraph into a numbered list or a
/// verbatim block
///
/// A paragraph that opens like `| 1. Foo` becomes an enumerate snippet
/// with the parsed starting number and one item per `<n>. <text>`
/// segment, each captured verbatim including embedded newlines.
/// Anything else (ASCII art, code examples) becomes `pre`, with the
/// leading pipe replaced by a space so column alignment survives.
/// Non-pipe snippets pass through unchanged.
#[must_use]
pub fn disambiguate_pipe(snippet: Snippet) -> Snippet {
    if snippet.body != SnippetBody::Pipe {
        return snippet;
    }

    if let Some(caps) = LIST_START.captures(&snippet.text) {
        let start = caps[1].parse().unwrap_or(1);
        let items: Vec<String> = LIST_ITEM
            .captures_iter(&snippet.text)
            .map(|item| item[1].to_string())
            .collect();
        log::debug!("enumerate starting at {start} with {} items", items.len());
        return Snippet {
            body: SnippetBody::Enumerate { start, items },
            ..snippet
        };
    }

    let text = LEADING_PIPE.replace(&snippet.text, "$1 ").into_owned();
    Snippet {
        text,
        body: SnippetBody::Pre,
        ..snippet
    }
}
