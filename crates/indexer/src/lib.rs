//! # SDoc Indexer
//!
//! Term indexing and the end-to-end processing pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! (filename, raw text)
//!     │
//!     ├──> sdoc-parser stages (classify, prelude, sections, pipes)
//!     │      └─> flat leveled snippets, each carrying its own index
//!     │
//!     ├──> Tree Folder (file root at level 0)
//!     │
//!     └──> Index Aggregator (post-order additive merge)
//!            └─> Snippet tree; every section's index covers its
//!                entire subtree
//! ```
//!
//! ## Example
//!
//! ```
//! use sdoc_indexer::{process, IndexConfig};
//!
//! let root = process("Foo.java.sdoc", "Foo class.\n  Does things.\n\npublic class Foo {}\n", &IndexConfig::default());
//! assert!(root.index.contains("Foo"));
//! ```

mod aggregate;
mod builder;
mod config;
mod processor;
mod stats;

pub use aggregate::aggregate_indexes;
pub use builder::{build_index, index_snippet, tokenize};
pub use config::{IndexConfig, DEFAULT_PAIR_WINDOW};
pub use processor::process;
pub use stats::DocumentStats;
