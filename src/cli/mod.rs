use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{compose, env};

#[derive(Parser)]
#[command(name = "compose-ghcr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub rewrite: RewriteArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the image reference computed for each published service
    Images,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct RewriteArgs {
    /// Compose manifest to rewrite
    #[arg(short = 'f', long = "file", default_value = compose::DEFAULT_FILE, global = true)]
    pub file: PathBuf,

    /// Where to write the rewritten manifest (defaults to overwriting --file)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Repository owner (e.g., MyOrg)
    #[arg(long, env = env::REPOSITORY_OWNER, global = true)]
    pub owner: Option<String>,

    /// Repository identity in owner/name form (e.g., MyOrg/MyRepo)
    #[arg(long, env = env::REPOSITORY, global = true)]
    pub repository: Option<String>,

    /// Registry host (e.g., ghcr.io)
    #[arg(long, global = true)]
    pub registry: Option<String>,

    /// Tag to apply to the images (e.g., latest, v1.0.0)
    #[arg(long, global = true)]
    pub tag: Option<String>,

    /// Print the rewritten manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
