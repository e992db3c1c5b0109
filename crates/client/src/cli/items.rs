//! Item CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Item management commands.
#[derive(Debug, Parser)]
pub struct ItemsCommand {
    #[command(subcommand)]
    pub action: ItemsAction,
}

/// Available item actions.
#[derive(Debug, Subcommand)]
pub enum ItemsAction {
    /// List the items of one list.
    List {
        /// List ID.
        list_id: Uuid,
    },
    /// Create a new item.
    Create {
        /// List the item belongs to.
        #[arg(long)]
        list_id: Uuid,
        /// Item title.
        #[arg(long)]
        title: String,
    },
    /// Update an item.
    Update {
        /// Item ID.
        id: Uuid,
        /// New title.
        #[arg(long)]
        title: Option<String>,
        /// New completion state.
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Toggle an item's completion state.
    Toggle {
        /// Item ID.
        id: Uuid,
        /// List the item belongs to.
        #[arg(long)]
        list_id: Uuid,
    },
    /// Delete item by ID.
    Delete {
        /// Item ID.
        id: Uuid,
    },
}
