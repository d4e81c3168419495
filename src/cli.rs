use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sift",
    about = "A fast, keyboard-driven fuzzy path finder",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// File with one candidate per line (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Match letter case exactly
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    /// Maximum number of results to show
    #[arg(long, global = true)]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive finder
    #[command(about = "Launch the interactive finder")]
    Tui {
        /// File with one candidate per line (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Rank candidates against a query and print them
    #[command(about = "Rank candidates against a query")]
    Filter {
        /// The query to match
        query: String,

        /// File with one candidate per line (stdin when omitted)
        file: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the score breakdown of one text against one pattern
    #[command(about = "Score a single text against a pattern")]
    Score {
        text: String,
        pattern: String,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize the configuration
    #[command(about = "Show or initialize the configuration")]
    Config {
        /// Write the default configuration to disk
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
