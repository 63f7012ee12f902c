use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "codegrade",
    version,
    about = "Grades source files by combining static analysis with an LLM review"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both analyzers and print the combined grade
    Score(ScoreCommand),
    /// Deterministic half only: static-analysis penalty score
    Static(StaticCommand),
    /// Heuristic half only: LLM review score
    Narrative(NarrativeCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Source file to grade
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Exit non-zero when the final score is below this threshold
    #[arg(long)]
    pub fail_under: Option<f32>,

    /// Prompt template file ({source_code} placeholder); overrides config
    #[arg(long)]
    pub prompt: Option<PathBuf>,
}

#[derive(Args)]
pub struct StaticCommand {
    /// Source file or directory to analyze
    pub path: PathBuf,
}

#[derive(Args)]
pub struct NarrativeCommand {
    /// Source file to review
    pub path: PathBuf,

    /// Print the full review text along with the extracted score
    #[arg(long)]
    pub show_review: bool,

    /// Prompt template file ({source_code} placeholder); overrides config
    #[arg(long)]
    pub prompt: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
