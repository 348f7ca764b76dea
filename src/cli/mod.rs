use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "casegen",
    about = "Generates structured QA test cases from requirements with a local LLM",
    version,
    author,
    long_about = None
)]
pub struct CaseGenCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate test cases from a requirement or user story
    Generate {
        /// Requirement text
        #[arg(short, long)]
        requirement: Option<String>,

        /// Text file with the requirement; appended to --requirement when both are given
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Model name on the local Ollama server
        #[arg(short, long)]
        model: Option<String>,

        /// Extra instructions for the generator
        #[arg(short, long)]
        instructions: Option<String>,

        /// Directory for the exported files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also write a CSV export
        #[arg(long, default_value = "false")]
        csv: bool,
    },

    /// Send an edited test case JSON file back to the model to correct and expand it
    Refine {
        /// JSON file with the edited test cases
        #[arg(short, long)]
        input: PathBuf,

        /// Model name on the local Ollama server
        #[arg(short, long)]
        model: Option<String>,

        /// Directory for the exported files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Also write a CSV export
        #[arg(long, default_value = "false")]
        csv: bool,
    },

    /// Export a test case JSON file as JSON or CSV
    Export {
        /// JSON file (or raw model output) holding the test cases
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file; defaults to a timestamped file in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a test case JSON file as a table
    Show {
        /// JSON file (or raw model output) holding the test cases
        #[arg(short, long)]
        input: PathBuf,
    },
}
