use serde::{Deserialize, Serialize};

/// Default look-ahead window for term pairs, in token positions.
///
/// A pair `a:b` is recorded when `b` follows `a` by fewer than this
/// many positions, weighted `1/gap`. Historical drivers of the format
/// disagreed between 4 and 10; this engine standardizes on 10 and
/// keeps it configurable, since narrowing it materially reduces
/// phrase-search recall.
pub const DEFAULT_PAIR_WINDOW: usize = 10;

/// Tuning knobs for the term index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Term-pair look-ahead window ([`DEFAULT_PAIR_WINDOW`])
    pub pair_window: usize,

    /// Prepend a section's title to its indexed text, so searching a
    /// heading word finds the section itself
    pub index_headings: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            pair_window: DEFAULT_PAIR_WINDOW,
            index_headings: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IndexConfig::default();
        assert_eq!(config.pair_window, 10);
        assert!(config.index_headings);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: IndexConfig = serde_json::from_str(r#"{"pair_window": 4}"#).unwrap();
        assert_eq!(config.pair_window, 4);
        assert!(config.index_headings, "unset fields keep their defaults");
    }
}
