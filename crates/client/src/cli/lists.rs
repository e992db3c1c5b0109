//! List CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// List management commands.
#[derive(Debug, Parser)]
pub struct ListsCommand {
    #[command(subcommand)]
    pub action: ListsAction,
}

/// Available list actions.
#[derive(Debug, Subcommand)]
pub enum ListsAction {
    /// List every list visible to the caller.
    List,
    /// Create a new list.
    Create {
        /// List title.
        #[arg(long)]
        title: String,
        /// Keep the list private. New lists are public by default.
        #[arg(long)]
        private: bool,
    },
    /// Get list by ID.
    Get {
        /// List ID.
        id: Uuid,
    },
    /// Update a list.
    Update {
        /// List ID.
        id: Uuid,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New visibility.
        #[arg(long)]
        public: Option<bool>,
    },
    /// Delete list by ID.
    Delete {
        /// List ID.
        id: Uuid,
    },
}
