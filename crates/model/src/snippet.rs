use crate::index::TermIndex;
use serde::{Deserialize, Serialize};

/// Classification tag for a paragraph snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Comment,
    Pipe,
    Source,
    Pre,
    Prelude,
    Enumerate,
}

impl Role {
    /// Role name as it appears in serialized documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Pipe => "pipe",
            Self::Source => "source",
            Self::Pre => "pre",
            Self::Prelude => "prelude",
            Self::Enumerate => "enumerate",
        }
    }
}

/// Role-specific payload of a snippet
///
/// Each variant carries exactly the fields that role needs, so
/// downstream consumers never probe for optionally-present fields.
/// `Pipe` is provisional: the pipe disambiguator always resolves it to
/// `Enumerate` or `Pre` before a tree leaves the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum SnippetBody {
    Comment,
    Pipe,
    Source,
    Pre,
    Prelude {
        name: String,
        author: String,
    },
    Enumerate {
        start: u32,
        items: Vec<String>,
    },
}

impl SnippetBody {
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Comment => Role::Comment,
            Self::Pipe => Role::Pipe,
            Self::Source => Role::Source,
            Self::Pre => Role::Pre,
            Self::Prelude { .. } => Role::Prelude,
            Self::Enumerate { .. } => Role::Enumerate,
        }
    }
}

/// Section heading attached to a snippet
///
/// `level` starts at 1 for an unindented heading; the synthetic file
/// root sits at level 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub title: String,
    pub level: usize,
}

impl Heading {
    #[must_use]
    pub fn new(title: impl Into<String>, level: usize) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}

/// One classified paragraph, possibly a container of nested snippets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,

    #[serde(flatten)]
    pub body: SnippetBody,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,

    #[serde(default, skip_serializing_if = "TermIndex::is_empty")]
    pub index: TermIndex,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snippet>,
}

impl Snippet {
    /// A leaf snippet with the given text and body
    #[must_use]
    pub fn new(text: impl Into<String>, body: SnippetBody) -> Self {
        Self {
            text: text.into(),
            body,
            heading: None,
            index: TermIndex::new(),
            children: Vec::new(),
        }
    }

    /// The synthetic per-file root: empty text, heading = filename at
    /// level 0
    #[must_use]
    pub fn file_root(filename: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            body: SnippetBody::Comment,
            heading: Some(Heading::new(filename, 0)),
            index: TermIndex::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.body.role()
    }

    /// True if this snippet heads a section (including the file root)
    #[must_use]
    pub const fn is_section(&self) -> bool {
        self.heading.is_some()
    }

    /// Nesting level of this snippet's heading, if it has one
    #[must_use]
    pub fn level(&self) -> Option<usize> {
        self.heading.as_ref().map(|h| h.level)
    }

    /// Depth-first traversal of this snippet and every descendant
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Depth-first snippet iterator, pre-order, document order
pub struct Walk<'a> {
    stack: Vec<&'a Snippet>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Snippet;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Reverse so the first child is visited first
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
