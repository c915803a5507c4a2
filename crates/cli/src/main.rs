//! `sdoc`: process annotated source files into searchable document
//! trees.
//!
//! The engine itself does no I/O; this driver loads files, runs the
//! pipeline, and prints the resulting trees, outlines, word lists, or
//! search matches.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sdoc_indexer::{IndexConfig, DEFAULT_PAIR_WINDOW};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdoc", version, about = "Annotated-source document engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Term-pair look-ahead window
    #[arg(long, global = true, default_value_t = DEFAULT_PAIR_WINDOW)]
    pair_window: usize,

    /// Leave section titles out of the index
    #[arg(long, global = true)]
    skip_headings: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Parse files and print their snippet trees as JSON
    Parse {
        files: Vec<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Find the snippets matching a query
    Search {
        query: String,
        files: Vec<PathBuf>,
    },

    /// Print the alphabetic word list of all source code
    Words { files: Vec<PathBuf> },

    /// Print section outlines
    Toc { files: Vec<PathBuf> },

    /// Print per-file summary statistics
    Stats { files: Vec<PathBuf> },
}

impl Cli {
    fn index_config(&self) -> IndexConfig {
        IndexConfig {
            pair_window: self.pair_window,
            index_headings: !self.skip_headings,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.index_config();

    match cli.command {
        Command::Parse { files, pretty } => commands::parse(&files, &config, pretty),
        Command::Search { query, files } => commands::search(&query, &files, &config),
        Command::Words { files } => commands::words(&files, &config),
        Command::Toc { files } => commands::toc(&files, &config),
        Command::Stats { files } => commands::stats(&files, &config),
    }
}
