use sdoc_model::Snippet;

/// Fold the flat, leveled snippet sequence into a containment tree
/// under `root`
///
/// A section owns, in original order, every subsequent snippet up to
/// (not including) the next heading whose level is less than or equal
/// to its own. Headingless snippets are always leaves of the deepest
/// open section and never close one. The builder keeps an explicit
/// stack of open sections instead of threading a cursor through
/// recursion, so ownership of every snippet moves exactly once.
#[must_use]
pub fn fold_tree(mut root: Snippet, flat: Vec<Snippet>) -> Snippet {
    let mut open: Vec<Snippet> = Vec::new();

    for snippet in flat {
        match snippet.level() {
            Some(level) => {
                while open
                    .last()
                    .and_then(Snippet::level)
                    .is_some_and(|top| top >= level)
                {
                    close_section(&mut open, &mut root);
                }
                open.push(snippet);
            }
            None => match open.last_mut() {
                Some(top) => top.children.push(snippet),
                None => root.children.push(snippet),
            },
        }
    }

    while !open.is_empty() {
        close_section(&mut open, &mut root);
    }
    root
}

/// Pop the deepest open section and attach it to its parent
fn close_section(open: &mut Vec<Snippet>, root: &mut Snippet) {
    if let Some(done) = open.pop() {
        match open.last_mut() {
            Some(top) => top.children.push(done),
            None => root.children.push(done),
        }
    }
}
