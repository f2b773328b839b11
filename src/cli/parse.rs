//! CLI parse: clap types for socialq. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// socialq - relationship-ordered course queues
#[derive(Parser)]
#[command(name = "socialq")]
#[command(about = "Course enrollment through social queues: friends cut in, rivals block")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the hack pass and print the resulting course queues
    Enroll {
        #[command(flatten)]
        inputs: InputFiles,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Summarize the course queues as read, before any hacker moves
    Inspect {
        #[command(flatten)]
        inputs: InputFiles,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// The four record files of an enrollment run.
#[derive(Args, Debug, Clone)]
pub struct InputFiles {
    /// Students file
    #[arg(long)]
    pub students: PathBuf,

    /// Courses file
    #[arg(long)]
    pub courses: PathBuf,

    /// Hackers file
    #[arg(long)]
    pub hackers: PathBuf,

    /// Initial course queues file
    #[arg(long)]
    pub queues: PathBuf,
}
