use anyhow::{Context, Result};
use sdoc_indexer::{process, DocumentStats, IndexConfig};
use sdoc_model::Snippet;
use sdoc_parser::outdent;
use sdoc_search::{matching_snippets, outline, source_word_list, Query};
use std::path::{Path, PathBuf};

/// Load and process one file; the filename becomes the root's title
fn process_file(path: &Path, config: &IndexConfig) -> Result<Snippet> {
    log::debug!("processing {}", path.display());
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(process(&filename, &text, config))
}

pub fn parse(files: &[PathBuf], config: &IndexConfig, pretty: bool) -> Result<()> {
    for path in files {
        let root = process_file(path, config)?;
        let json = if pretty {
            serde_json::to_string_pretty(&root)
        } else {
            serde_json::to_string(&root)
        }
        .context("failed to encode snippet tree")?;
        println!("{json}");
    }
    Ok(())
}

pub fn search(query: &str, files: &[PathBuf], config: &IndexConfig) -> Result<()> {
    let query = Query::parse(query);
    for path in files {
        let root = process_file(path, config)?;
        for snippet in matching_snippets(&root, &query) {
            let relevance = query.relevance(&snippet.index);
            let label = snippet.heading.as_ref().map_or_else(
                || {
                    let text = outdent(&snippet.text);
                    let first_line = text.lines().next().unwrap_or("").to_string();
                    format!("[{}] {first_line}", snippet.role().as_str())
                },
                |heading| format!("{} (level {})", heading.title, heading.level),
            );
            println!("{}: {label} ({relevance:.3})", path.display());
        }
    }
    Ok(())
}

pub fn words(files: &[PathBuf], config: &IndexConfig) -> Result<()> {
    let mut all_words = Vec::new();
    for path in files {
        let root = process_file(path, config)?;
        all_words.extend(source_word_list(&root));
    }
    all_words.sort_unstable();
    all_words.dedup();
    for word in all_words {
        println!("{word}");
    }
    Ok(())
}

pub fn toc(files: &[PathBuf], config: &IndexConfig) -> Result<()> {
    for path in files {
        let root = process_file(path, config)?;
        println!("{}", path.display());
        for entry in outline(&root) {
            println!("{}- {}", "  ".repeat(entry.level), entry.title);
        }
    }
    Ok(())
}

pub fn stats(files: &[PathBuf], config: &IndexConfig) -> Result<()> {
    for path in files {
        let root = process_file(path, config)?;
        let stats = DocumentStats::collect(&root);
        println!(
            "{}: {} snippets, {} sections, {} source, {} index keys",
            path.display(),
            stats.snippets,
            stats.sections,
            stats.source,
            stats.index_keys
        );
    }
    Ok(())
}
