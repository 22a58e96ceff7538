use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::dashboard::capabilities::CapabilityCategory;

#[derive(Parser, Debug)]
#[command(
    name = "swarmscope",
    version,
    about = "Swarm orchestration dashboard for chat transcripts"
)]
pub struct Cli {
    /// Path to config file (replaces ./swarmscope.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the swarm state derived from a transcript
    State {
        /// Transcript file (JSON array or JSON Lines)
        transcript: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the health score of the swarm in a transcript
    Health {
        /// Transcript file (JSON array or JSON Lines)
        transcript: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Assumed average agent response time in milliseconds
        #[arg(long)]
        response_time_ms: Option<u64>,
    },
    /// List notifications derived from orchestration events
    Notifications {
        /// Transcript file (JSON array or JSON Lines)
        transcript: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Show only the N most recent notifications
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Browse the built-in swarm templates
    Templates {
        /// Only list templates carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Print the launch prompt for the template with this id
        #[arg(long)]
        id: Option<String>,

        /// Custom instructions appended to the launch prompt (requires --id)
        #[arg(long, requires = "id")]
        prompt: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the kinds of work swarm agents can take on
    Capabilities {
        /// Only list capabilities in this category
        #[arg(long, value_enum)]
        category: Option<CapabilityCategory>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Check whether tool names belong to the orchestration domain
    Classify {
        /// Tool names to classify
        #[arg(required = true)]
        names: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Open the live dashboard, re-reading the transcript when it changes
    Watch {
        /// Transcript file (JSON array or JSON Lines)
        transcript: PathBuf,

        /// File polling interval in milliseconds
        #[arg(long)]
        refresh_ms: Option<u64>,
    },
}

impl Commands {
    /// The `--format` flag of the subcommand, if it has one.
    pub fn format(&self) -> Option<OutputFormat> {
        match self {
            Commands::State { format, .. }
            | Commands::Health { format, .. }
            | Commands::Notifications { format, .. }
            | Commands::Templates { format, .. }
            | Commands::Capabilities { format, .. }
            | Commands::Classify { format, .. } => *format,
            Commands::Watch { .. } => None,
        }
    }
}
