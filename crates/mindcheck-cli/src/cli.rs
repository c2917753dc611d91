//! Command-line definitions. Dispatch lives in [`crate::commands`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "mindcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Score standardized mental-health questionnaires, route to the right level of care, and track progress locally."
)]
pub struct Cli {
    /// Print machine-readable JSON instead of text.
    #[clap(long, global = true)]
    pub json: bool,
    /// Emit logs as JSON lines on stderr.
    #[clap(long, global = true)]
    pub log_json: bool,
    /// Config file (defaults to the platform config directory).
    #[clap(long = "config", global = true)]
    pub config_file: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a PHQ-9 depression screen (nine answers, 0-3, `-` for skipped)
    Phq9 {
        #[clap(num_args = 1..)]
        answers: Vec<String>,
    },
    /// Score a GAD-7 anxiety screen (seven answers, 0-3, `-` for skipped)
    Gad7 {
        #[clap(num_args = 1..)]
        answers: Vec<String>,
    },
    /// Score the ten-item suicide risk screen (y/n answers)
    SuicideRisk {
        #[clap(num_args = 1..)]
        answers: Vec<String>,
    },
    /// Score a comprehensive symptom evaluation from a JSON file
    Evaluate {
        file: PathBuf,
        /// PHQ-9 total to record alongside the evaluation
        #[clap(long)]
        phq9: Option<u32>,
        /// GAD-7 total to record alongside the evaluation
        #[clap(long)]
        gad7: Option<u32>,
        /// Ask the configured assistant for an additional analysis
        #[clap(long)]
        enrich: bool,
    },
    /// Show the current assessment
    Current,
    /// List past assessments, most recent first
    History,
    /// Log a weekly mood check-in
    Checkin {
        /// Overall mood, 1-10
        #[clap(long)]
        mood: u8,
        #[clap(long = "symptom")]
        symptoms: Vec<String>,
        #[clap(long = "coping")]
        coping_strategies: Vec<String>,
        #[clap(long, default_value = "")]
        notes: String,
    },
    /// Summarize check-ins
    Progress {
        /// Ask the configured assistant for insights
        #[clap(long)]
        insights: bool,
    },
    /// Send a message to the support chat
    Chat {
        #[clap(num_args = 1.., required = true)]
        message: Vec<String>,
    },
    /// List available questionnaires
    Questionnaires,
    /// Delete all locally stored data
    Reset {
        /// Confirm deletion
        #[clap(long)]
        yes: bool,
    },
    /// Inspect or create the config file
    Config {
        #[clap(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective config
    Show,
    /// Write a default config file if none exists
    Init {
        /// Enable the assistant in the new config
        #[clap(long)]
        assistant: bool,
    },
}
