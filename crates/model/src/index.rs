use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between the terms of a compound (ordered-pair) key
pub const PAIR_SEPARATOR: char = ':';

/// Additive term / term-pair relevance map
///
/// Keys are either plain terms (`"foo"`) or compound keys joining
/// ordered terms with [`PAIR_SEPARATOR`] (`"foo:bif"`). Relevance is
/// summed over occurrences and never normalized by document length, so
/// merging two indexes is a plain additive union.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermIndex {
    terms: HashMap<String, f64>,
}

impl TermIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to `key`, inserting it at zero if absent
    pub fn add(&mut self, key: impl Into<String>, weight: f64) {
        *self.terms.entry(key.into()).or_insert(0.0) += weight;
    }

    /// Additively merge every key of `other` into this index
    pub fn merge(&mut self, other: &Self) {
        for (key, weight) in &other.terms {
            *self.terms.entry(key.clone()).or_insert(0.0) += weight;
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.terms.contains_key(key)
    }

    /// Relevance of `key`, zero if absent
    #[must_use]
    pub fn get(&self, key: &str) -> f64 {
        self.terms.get(key).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms.iter().map(|(k, w)| (k.as_str(), *w))
    }

    /// Plain (non-compound) keys, in arbitrary order
    pub fn plain_terms(&self) -> impl Iterator<Item = &str> {
        self.terms
            .keys()
            .map(String::as_str)
            .filter(|k| !Self::is_compound(k))
    }

    /// Compound key for the ordered pair `(a, b)`
    #[must_use]
    pub fn pair_key(a: &str, b: &str) -> String {
        format!("{a}{PAIR_SEPARATOR}{b}")
    }

    /// Compound key joining every token in order (`"a:b:c"`)
    #[must_use]
    pub fn compound_key<S: AsRef<str>>(tokens: &[S]) -> String {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&PAIR_SEPARATOR.to_string())
    }

    /// True if `key` is a compound (pair or phrase) key
    #[must_use]
    pub fn is_compound(key: &str) -> bool {
        key.contains(PAIR_SEPARATOR)
    }
}

impl FromIterator<(String, f64)> for TermIndex {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
