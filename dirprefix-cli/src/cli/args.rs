use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Prefix files with their directory's natural-order index among siblings
#[derive(Parser, Debug)]
#[command(name = "dirprefix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename every file in a tree by prepending its parent directory's
    /// 1-based sibling index
    Run {
        /// Root directory to process
        root: PathBuf,

        /// Also prefix files directly under the root, using the root's own
        /// sibling index
        #[arg(long)]
        include_root_files: bool,

        /// Suppress per-file progress output
        #[arg(short, long)]
        quiet: bool,

        /// Output format for the final result
        #[arg(long, value_enum)]
        output: Option<OutputFormatArg>,
    },

    /// Create a sample directory tree for trying out the renamer
    Fixture {
        /// Target path for the tree
        #[arg(default_value = "sample_tree")]
        target: PathBuf,

        /// Output format for the final result
        #[arg(long, value_enum)]
        output: Option<OutputFormatArg>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
