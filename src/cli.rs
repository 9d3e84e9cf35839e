use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_SOURCE_URL: &str = "https://www.webfx.com/tools/emoji-cheat-sheet/";

#[derive(Parser, Debug)]
#[command(
    name = "emojigen",
    version,
    about = "Extract emoji groups from the cheat sheet page and generate a Rust table"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Fetch(FetchArgs),
    Extract(ExtractArgs),
    Generate(GenerateArgs),
}

/// Where the cheat sheet markup comes from. Neither flag means the default URL.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub url: Option<String>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub url: String,

    #[arg(long, default_value = ".cache/emojigen")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub shape_path: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub enrich: bool,

    #[arg(long, requires = "enrich")]
    pub code_map: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub shape_path: Option<PathBuf>,

    #[arg(long)]
    pub code_map: Option<PathBuf>,

    #[arg(long, default_value = "emoji_table.rs")]
    pub output: PathBuf,

    #[arg(long, default_value = ".cache/emojigen")]
    pub cache_root: PathBuf,
}
