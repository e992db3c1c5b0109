//! Session CLI commands.

use clap::{Parser, Subcommand};

/// Anonymous session management commands.
#[derive(Debug, Parser)]
pub struct SessionCommand {
    #[command(subcommand)]
    pub action: SessionAction,
}

/// Available session actions.
#[derive(Debug, Subcommand)]
pub enum SessionAction {
    /// Start a fresh session, replacing any stored one.
    New,
    /// Show the stored session.
    Show,
    /// Remove the stored session.
    Clear,
}
