use sdoc_indexer::tokenize;
use sdoc_model::{Snippet, TermIndex};

/// A tokenized search query
///
/// Matching mirrors how indexes are populated: one token looks up its
/// plain key, several tokens look up the single ordered compound key
/// joining them (`"a:b:c"`, not every pairwise combination), and an
/// empty query matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Tokenize `raw` with the document tokenizer
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let tokens = tokenize(raw).into_iter().map(str::to_string).collect();
        Self { tokens }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The single index key this query consults, `None` when empty
    #[must_use]
    pub fn key(&self) -> Option<String> {
        match self.tokens.as_slice() {
            [] => None,
            [single] => Some(single.clone()),
            many => Some(TermIndex::compound_key(many)),
        }
    }

    /// True if `index` holds this query's key (or the query is empty)
    #[must_use]
    pub fn matches(&self, index: &TermIndex) -> bool {
        self.key().map_or(true, |key| index.contains(&key))
    }

    /// Relevance of this query's key in `index`, zero if unmatched
    #[must_use]
    pub fn relevance(&self, index: &TermIndex) -> f64 {
        self.key().map_or(0.0, |key| index.get(&key))
    }
}

/// Collect every snippet of `root`'s tree whose index matches `query`,
/// in document order
///
/// Sections carry aggregated indexes, so a section appears here
/// whenever anything beneath it matches; show/hide and highlighting
/// decisions stay with the caller.
#[must_use]
pub fn matching_snippets<'a>(root: &'a Snippet, query: &Query) -> Vec<&'a Snippet> {
    let matches: Vec<&Snippet> = root
        .walk()
        .filter(|snippet| query.matches(&snippet.index))
        .collect();
    log::debug!(
        "query {:?} matched {} of {} snippets",
        query.key(),
        matches.len(),
        root.walk().count()
    );
    matches
}
