use sdoc_model::{Role, Snippet};

/// Alphabetic listing of every plain term indexed from source code
///
/// Walks the tree for `source`-role snippets and collects the
/// non-compound keys of their own indexes, sorted and deduplicated.
/// This is the data half of an alphabetic word-index view; rendering
/// it is the collaborator's problem.
#[must_use]
pub fn source_word_list(root: &Snippet) -> Vec<String> {
    let mut words: Vec<String> = root
        .walk()
        .filter(|snippet| snippet.role() == Role::Source)
        .flat_map(|snippet| snippet.index.plain_terms())
        .map(str::to_string)
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sdoc_indexer::{process, IndexConfig};

    #[test]
    fn test_word_list_covers_source_only() {
        let text = "Commentary words stay out of the code word list.\n\nalpha beta\n\ngamma alpha";
        let root = process("t.sdoc", text, &IndexConfig::default());
        let words = source_word_list(&root);

        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_word_list_excludes_compound_keys() {
        let root = process("t.sdoc", "foo bar", &IndexConfig::default());
        let words = source_word_list(&root);
        assert_eq!(words, vec!["bar", "foo"]);
    }

    #[test]
    fn test_empty_tree_has_no_words() {
        let root = process("t.sdoc", "", &IndexConfig::default());
        assert!(source_word_list(&root).is_empty());
    }
}
