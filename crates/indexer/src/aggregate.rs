use sdoc_model::Snippet;

/// Merge every descendant's index into its ancestors, bottom-up
///
/// Post-order: children aggregate first, then each child's (now
/// complete) index folds additively into the parent's own. After this
/// a section's index covers everything reachable beneath it, which is
/// what lets a search on a top-level section match content anywhere
/// inside. Indexes are rebuilt from scratch on every `process` call,
/// so repeated builds never double-count.
pub fn aggregate_indexes(snippet: &mut Snippet) {
    for child in &mut snippet.children {
        aggregate_indexes(child);
    }
    let Snippet {
        index, children, ..
    } = snippet;
    for child in children.iter() {
        index.merge(&child.index);
    }
}
