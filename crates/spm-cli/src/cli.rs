use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spm",
    about = "Splice legacy endpoints into an API specification",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Copy legacy endpoints into the primary spec and rewrite its info block
    Merge(MergeArgs),
    /// Count the paths of a spec without changing it
    Summary(SummaryArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// TOML file with paths and merge options
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Spec receiving the endpoints
    #[arg(long)]
    pub primary: Option<PathBuf>,
    /// Spec the endpoints are copied from
    #[arg(long)]
    pub secondary: Option<PathBuf>,
    /// Write here instead of overwriting the primary
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Endpoint to copy; repeat to replace the configured list
    #[arg(short, long = "endpoint")]
    pub endpoints: Vec<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Merge and report without writing
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct SummaryArgs {
    pub file: PathBuf,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
