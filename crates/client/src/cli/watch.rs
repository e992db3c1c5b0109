//! Watch CLI command.

use clap::Parser;
use uuid::Uuid;

/// Watch one list live.
#[derive(Debug, Parser)]
pub struct WatchCommand {
    /// List ID.
    pub list_id: Uuid,
}
