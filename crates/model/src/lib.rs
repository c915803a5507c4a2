//! # SDoc Model
//!
//! Shared data types for the sdoc document engine.
//!
//! ## Shape
//!
//! ```text
//! Snippet (file root: heading = filename @ level 0)
//!     │
//!     ├─ text: String          (rewritten by pipeline stages)
//!     ├─ body: SnippetBody     (role + role-specific payload)
//!     ├─ heading: Option<Heading>
//!     ├─ index: TermIndex      (term / term-pair relevance)
//!     └─ children: Vec<Snippet>
//! ```
//!
//! A snippet is one paragraph of annotated source. Section-heading
//! snippets own the paragraphs nested beneath them; everything else is
//! a leaf. The types here carry no behavior beyond construction and
//! traversal; the pipeline stages live in `sdoc-parser` and
//! `sdoc-indexer`.

mod index;
mod snippet;

pub use index::{TermIndex, PAIR_SEPARATOR};
pub use snippet::{Heading, Role, Snippet, SnippetBody, Walk};
