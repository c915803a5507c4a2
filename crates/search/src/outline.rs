use sdoc_model::Snippet;
use serde::Serialize;

/// One section heading in a document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub title: String,
    pub level: usize,
}

/// Table-of-contents data: every section heading below `root`, in
/// document order
///
/// The file root itself is excluded; levels come straight from the
/// headings, so a renderer can indent without re-deriving nesting.
#[must_use]
pub fn outline(root: &Snippet) -> Vec<OutlineEntry> {
    root.walk()
        .skip(1)
        .filter_map(|snippet| snippet.heading.as_ref())
        .map(|heading| OutlineEntry {
            title: heading.title.clone(),
            level: heading.level,
        })
        .collect()
}
