//! CLI command definitions.

pub mod items;
pub mod lists;
pub mod session;
pub mod watch;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// CLI client for the memora API.
#[derive(Debug, Parser)]
#[command(name = "memora-client")]
#[command(about = "CLI client for the memora API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "MEMORA_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Act as this signed-in user.
    #[arg(long, conflicts_with = "anonymous")]
    pub user: Option<Uuid>,

    /// Act as the stored anonymous session, starting one on first use.
    #[arg(long)]
    pub anonymous: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Todo list management.
    Lists(lists::ListsCommand),
    /// Todo item management.
    Items(items::ItemsCommand),
    /// Watch a list live, printing the reconciled items on every change.
    Watch(watch::WatchCommand),
    /// Anonymous session file management.
    Session(session::SessionCommand),
}
