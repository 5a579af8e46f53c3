use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for siraj
#[derive(Debug, Parser)]
#[command(
    name = "siraj",
    version,
    about = "Spoken restaurant guide: resolve a destination from a transcript and print its route"
)]
pub struct CliArgs {
    /// Path to the catalog CSV (or .csv.gz); overrides the settings file
    #[arg(short = 'i', long = "catalog", env = "CSV_PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(short = 'c', long = "config", env = "SIRAJ_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Minimum match score (0-100) for accepting a destination
    #[arg(long, env = "SIRAJ_THRESHOLD", global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Answer one transcribed utterance
    Ask {
        /// Utterance text, e.g. "خذني إلى مطعم الديوان"
        utterance: String,

        /// Print the structured result as JSON instead of the spoken reply
        #[arg(long)]
        json: bool,
    },

    /// Fuzzy-match a place name against the catalog
    Resolve {
        /// Candidate name
        name: String,

        /// Number of candidates to show
        #[arg(short = 'n', long, default_value_t = 1)]
        top: usize,
    },

    /// Print the stored route for an exact display name
    Route {
        /// Display name as stored in the catalog
        name: String,
    },

    /// Reply as the dialog-manager route tool would (exact, then fuzzy)
    Tool {
        /// Restaurant name supplied by the dialog manager
        restaurant: String,
    },

    /// Read transcripts from stdin, one per line, through the wake-word session
    Listen,
}
