//! CLI argument definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::index::Coverage;
use crate::mapping::MappingKind;

#[derive(Parser)]
#[command(name = "ssi")]
#[command(about = "Fuzzy nearest-string lookup with a State Set Index")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Dictionary and index options shared by the lookup commands.
#[derive(Args, Debug, Clone)]
pub struct IndexArgs {
    /// Dictionary entry (repeat for each entry)
    #[arg(short = 't', long = "term", required = true)]
    pub terms: Vec<String>,

    /// Maximum edit distance
    #[arg(short = 'm', long)]
    pub threshold: Option<usize>,

    /// Number of characters indexed per entry
    #[arg(short = 'p', long)]
    pub prefix_length: Option<usize>,

    /// Alphabet mapping (identity, case-fold, phonetic)
    #[arg(long)]
    pub mapping: Option<MappingKind>,

    /// Candidate coverage (complete, indexed-prefix)
    #[arg(long)]
    pub coverage: Option<Coverage>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the closest dictionary entry to a query
    Find {
        /// Query string
        query: String,

        #[command(flatten)]
        index: IndexArgs,
    },

    /// List the entries that reach exact ranking for a query
    Candidates {
        /// Query string
        query: String,

        #[command(flatten)]
        index: IndexArgs,
    },

    /// Compute the edit distance between two strings
    Distance {
        /// First string
        source: String,

        /// Second string
        target: String,

        /// Give up once the distance exceeds this value
        #[arg(long)]
        max: Option<usize>,
    },

    /// Run the built-in example (query "Mustre" against five names)
    Demo,

    /// Show or update persistent defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration and its file location
    Show,

    /// Update one or more defaults
    Set {
        /// Default maximum edit distance
        #[arg(long)]
        threshold: Option<usize>,

        /// Default prefix length
        #[arg(long)]
        prefix_length: Option<usize>,

        /// Default alphabet mapping
        #[arg(long)]
        mapping: Option<MappingKind>,

        /// Default candidate coverage
        #[arg(long)]
        coverage: Option<Coverage>,
    },

    /// Reset configuration to defaults
    Reset,
}
