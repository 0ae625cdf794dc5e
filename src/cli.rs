use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare count, or a short summary with --top / -v
    Terminal,
    /// Full report as JSON
    Json,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
            OutputFormat::Json => crate::io::OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "regroup")]
#[command(about = "Count how often members are grouped together again across rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a round-assignment file and print the excess co-occurrence count
    Eval {
        /// CSV file with a NAME column and one group-id column per round
        #[arg(required_unless_present = "file_flag")]
        file: Option<PathBuf>,

        /// Same as the positional FILE argument
        #[arg(long = "file", conflicts_with = "file")]
        file_flag: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .regroup.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// List the N most repeated pairs
        #[arg(long)]
        top: Option<usize>,

        /// Disable parallel aggregation
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads for parallel aggregation (0 = auto)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Parse a member roster (ID and NAME columns) and list it
    Members {
        /// CSV file with ID and NAME columns
        file: PathBuf,

        /// Configuration file (defaults to the nearest .regroup.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a regroup configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Eval { verbosity, .. } | Commands::Members { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
