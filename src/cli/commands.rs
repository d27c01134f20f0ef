//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "datetag")]
#[command(about = "Timestamped container image tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the fully-qualified image name for the current time
    Tag {
        /// Image name without a tag (e.g., gcr.io/project/app)
        image: String,

        #[command(flatten)]
        tagger: TaggerArgs,
    },

    /// Show the layout and timezone that tagging would use
    Config {
        #[command(flatten)]
        tagger: TaggerArgs,
    },
}

/// Options shared by commands that build a tagger
#[derive(Args, Debug)]
pub struct TaggerArgs {
    /// Build context directory (searched for .datetag.toml)
    #[arg(short, long, default_value = ".")]
    pub context: PathBuf,

    /// Timestamp layout (e.g., YYYY-MM-DD_hh-mm-ss or %Y%m%d)
    #[arg(short, long)]
    pub format: Option<String>,

    /// IANA timezone name (default: local timezone)
    #[arg(short, long)]
    pub timezone: Option<String>,
}
