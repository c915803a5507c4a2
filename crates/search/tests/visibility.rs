//! Search visibility over a processed document: what a navigation
//! collaborator would show or hide for a given query.

use pretty_assertions::assert_eq;
use sdoc_indexer::{process, IndexConfig};
use sdoc_model::{Role, Snippet};
use sdoc_search::{matching_snippets, outline, source_word_list, Query};

const DOC: &str = "\
Widget | A. Hacker
MIT license

Rendering.
Widgets render themselves into a caller-supplied draw buffer.

  Buffer layout.
  Rows are stored contiguously, one byte per cell, no padding.

fn render(buffer: &mut Buffer) { buffer.clear(); }

Input handling.
Key events arrive through a channel owned by the main event loop.

fn handle(event: KeyEvent) -> Action { Action::Redraw }";

fn processed() -> Snippet {
    process("widget.sdoc", DOC, &IndexConfig::default())
}

#[test]
fn empty_query_shows_everything() {
    let root = processed();
    let query = Query::parse("");
    let all = matching_snippets(&root, &query);
    assert_eq!(all.len(), root.walk().count());
}

#[test]
fn deep_term_lights_up_its_ancestors() {
    let root = processed();
    let hits = matching_snippets(&root, &Query::parse("contiguously"));

    let titles: Vec<Option<&str>> = hits
        .iter()
        .map(|s| s.heading.as_ref().map(|h| h.title.as_str()))
        .collect();
    // The term lives in the "Buffer layout" section's own prose, and
    // aggregation lights up every ancestor above it
    assert_eq!(
        titles,
        vec![
            Some("widget.sdoc"),
            Some("Rendering"),
            Some("Buffer layout")
        ]
    );
}

#[test]
fn phrase_query_requires_adjacent_order() {
    let root = processed();
    assert!(!matching_snippets(&root, &Query::parse("draw buffer")).is_empty());
    assert!(matching_snippets(&root, &Query::parse("buffer draw")).is_empty());
}

#[test]
fn unmatched_query_hides_everything() {
    let root = processed();
    assert!(matching_snippets(&root, &Query::parse("nonexistent")).is_empty());
}

#[test]
fn source_snippets_feed_the_word_list() {
    let root = processed();
    let words = source_word_list(&root);

    assert!(words.contains(&"render".to_string()));
    assert!(words.contains(&"KeyEvent".to_string()));
    // Prose-only words stay out
    assert!(!words.contains(&"contiguously".to_string()));
    // Sorted and deduplicated
    let mut sorted = words.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(words, sorted);
}

#[test]
fn outline_reflects_section_nesting() {
    let root = processed();
    let entries = outline(&root);
    let view: Vec<(&str, usize)> = entries
        .iter()
        .map(|e| (e.title.as_str(), e.level))
        .collect();
    assert_eq!(
        view,
        vec![
            ("Rendering", 1),
            ("Buffer layout", 2),
            ("Input handling", 1)
        ]
    );
}

#[test]
fn prelude_survives_into_the_tree() {
    let root = processed();
    assert_eq!(root.children[0].role(), Role::Prelude);
}
