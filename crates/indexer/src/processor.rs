use crate::aggregate::aggregate_indexes;
use crate::builder::index_snippet;
use crate::config::IndexConfig;
use sdoc_model::Snippet;
use sdoc_parser::{
    detect_section, disambiguate_pipe, extract_prelude, fold_tree, parse_paragraphs,
};

/// Process one file's raw text into its aggregated snippet tree
///
/// The caller supplies already-loaded text; no I/O happens here and
/// nothing is retained after the tree is returned. Any text is valid
/// input: heuristic misses degrade to less-specific roles rather than
/// erroring. Empty input produces a childless file root, a defined
/// non-error state.
#[must_use]
pub fn process(filename: &str, text: &str, config: &IndexConfig) -> Snippet {
    let root = Snippet::file_root(filename);
    if text.is_empty() {
        return root;
    }

    let mut paragraphs = parse_paragraphs(text).into_iter();
    let first = paragraphs.next().map(extract_prelude);
    let staged: Vec<Snippet> = first
        .into_iter()
        .chain(paragraphs)
        .map(detect_section)
        .map(disambiguate_pipe)
        .map(|snippet| index_snippet(snippet, config))
        .collect();

    let mut root = fold_tree(root, staged);
    aggregate_indexes(&mut root);
    log::debug!(
        "processed {filename}: {} top-level snippets, {} index keys",
        root.children.len(),
        root.index.len()
    );
    root
}
