use sdoc_model::{Role, Snippet};
use serde::{Deserialize, Serialize};

/// Summary counters for one processed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Paragraph snippets, the file root excluded
    pub snippets: usize,
    /// Snippets heading a section
    pub sections: usize,
    /// Source-role snippets
    pub source: usize,
    /// Distinct keys in the root's aggregated index
    pub index_keys: usize,
}

impl DocumentStats {
    /// Count a processed (aggregated) tree
    #[must_use]
    pub fn collect(root: &Snippet) -> Self {
        let mut stats = Self {
            index_keys: root.index.len(),
            ..Self::default()
        };
        for snippet in root.walk().skip(1) {
            stats.snippets += 1;
            if snippet.is_section() {
                stats.sections += 1;
            }
            if snippet.role() == Role::Source {
                stats.source += 1;
            }
        }
        stats
    }
}
