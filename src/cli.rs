use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bandscore",
    version,
    about = "Speaking-assessment band score viewer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the full assessment report
    Show(RunArgs),
    /// Render just the skill chart
    Chart(RunArgs),
    /// Classify a single score, optionally with feedback for one category
    Classify(ClassifyArgs),
    /// Write a sample assessment record
    Sample(SampleArgs),
    /// Write a default bandscore.toml
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    #[arg(long)]
    pub score: f64,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    #[arg(long, default_value = "assessment.json")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
