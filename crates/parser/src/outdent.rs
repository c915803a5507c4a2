/// Strip the common leading whitespace from every line of `text`
///
/// The margin is the shortest leading-whitespace run among the
/// non-blank lines; blank lines neither contribute to it nor break it.
/// Rendering collaborators call this on source and pre snippets to
/// reclaim screen space; the pipeline itself leaves text indented.
#[must_use]
pub fn outdent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| &line[..line.len() - line.trim_start().len()])
        .min_by_key(|ws| ws.len());

    match margin {
        None | Some("") => text.to_string(),
        Some(margin) => text
            .split('\n')
            .map(|line| line.strip_prefix(margin).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
