use crate::config::IndexConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use sdoc_model::{Snippet, TermIndex};

// Tokens are runs of word characters plus hyphen; everything else is
// a separator
static TOKEN_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^-\w]+").unwrap());

/// Split `text` into index tokens
///
/// Splits on runs of characters outside `[0-9A-Za-z_-]` and drops the
/// empty fragments at separator boundaries. Query strings must be
/// tokenized with this same function for keys to line up.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_BREAK.split(text).filter(|t| !t.is_empty()).collect()
}

/// Build the proximity-weighted term index for one snippet's text
///
/// Every token contributes 1 to its own key. Every ordered pair of
/// tokens closer than `pair_window` positions contributes `1/gap` to
/// the compound key `a:b`, so `"foo bar bif baz"` holds `foo:bif` at
/// 0.5. Relevance is additive over occurrences and never normalized
/// by length.
#[must_use]
pub fn build_index(title: Option<&str>, text: &str, config: &IndexConfig) -> TermIndex {
    let combined: String = match title {
        Some(title) if config.index_headings => format!("{title}{text}"),
        _ => text.to_string(),
    };
    let tokens = tokenize(&combined);

    let mut index = TermIndex::new();
    for (i, token) in tokens.iter().enumerate() {
        index.add(*token, 1.0);
        let lookahead = config.pair_window.saturating_sub(1);
        for (gap, later) in tokens[i + 1..].iter().take(lookahead).enumerate() {
            #[allow(clippy::cast_precision_loss)]
            index.add(TermIndex::pair_key(token, later), 1.0 / (gap + 1) as f64);
        }
    }
    index
}

/// Pipeline stage: attach a freshly built index to `snippet`
#[must_use]
pub fn index_snippet(mut snippet: Snippet, config: &IndexConfig) -> Snippet {
    let title = snippet.heading.as_ref().map(|h| h.title.as_str());
    snippet.index = build_index(title, &snippet.text, config);
    snippet
}
