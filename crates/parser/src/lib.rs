//! # SDoc Parser
//!
//! Paragraph classification and section structure for annotated source.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text
//!     │
//!     ├──> Splitter / Classifier (blank-line paragraphs)
//!     │      └─> Snippet[] (comment | pipe | source)
//!     │
//!     ├──> Prelude Extractor (first paragraph only)
//!     ├──> Section Detector  (heading heuristic, level from indent)
//!     ├──> Pipe Disambiguator (enumerate | pre)
//!     │
//!     └──> Tree Folder
//!            └─> Snippet tree under a synthetic file root
//! ```
//!
//! Every stage is total: text that fails a heuristic keeps its
//! less-specific role, and no paragraph is ever dropped. Stages consume
//! snippets by value and return the rewritten ones, so there is no
//! shared mutation between stages.

mod fold;
mod outdent;
mod pipe;
mod prelude;
mod section;
mod split;

pub use fold::fold_tree;
pub use outdent::outdent;
pub use pipe::disambiguate_pipe;
pub use prelude::extract_prelude;
pub use section::detect_section;
pub use split::{classify, parse_paragraphs, split_paragraphs};
