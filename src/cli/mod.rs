//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{DatasetArg, Season};

/// Season selection shared by dataset commands
#[derive(Debug, Args)]
pub struct YearArgs {
    /// Single season (e.g. 2023).
    #[clap(long, short, conflicts_with_all = ["start", "end"])]
    pub year: Option<Season>,

    /// First season of an inclusive range.
    #[clap(long, requires = "end")]
    pub start: Option<Season>,

    /// Last season of an inclusive range.
    #[clap(long, requires = "start")]
    pub end: Option<Season>,
}

/// Which seasons a command should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSelection {
    Single(Season),
    Range(Season, Season),
    Unspecified,
}

impl YearArgs {
    pub fn selection(&self) -> YearSelection {
        match (self.year, self.start, self.end) {
            (Some(year), _, _) => YearSelection::Single(year),
            (None, Some(start), Some(end)) => YearSelection::Range(start, end),
            _ => YearSelection::Unspecified,
        }
    }
}

/// Output options shared by commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Ignore cached files and fetch from the API, overwriting the cache.
    #[clap(long)]
    pub refresh: bool,

    /// Write CSV here instead of stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a dataset (cached if available) and print it as CSV.
    ///
    /// Yearly datasets take `--year` or `--start/--end`; team talent takes neither.
    Get {
        #[clap(value_enum)]
        dataset: DatasetArg,

        #[clap(flatten)]
        years: YearArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Load transfer portal entries and attach player IDs found by name search.
    ///
    /// Issues one `/player/search` request per entry.
    AttachIds {
        #[clap(flatten)]
        years: YearArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "cfb-data", about = "College football data loader", version)]
pub struct CfbData {
    #[clap(subcommand)]
    pub command: Commands,
}
