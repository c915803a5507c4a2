//! # SDoc Search
//!
//! Query matching over processed snippet trees, plus the derived
//! listings (word index, table of contents) that navigation
//! collaborators build their views from.
//!
//! Matching consults the indexes built by [`sdoc_indexer`]: a section's
//! aggregated index covers its whole subtree, so a hit on a top-level
//! section means the match is somewhere inside it. Queries are
//! tokenized exactly like document text, so a multi-word query matches
//! only through its ordered full-phrase compound key.

mod outline;
mod query;
mod words;

pub use outline::{outline, OutlineEntry};
pub use query::{matching_snippets, Query};
pub use words::source_word_list;
