//! memora_client - HTTP store client, live list view, and CLI for memora.
//!
//! [`MemoraClient`] implements the store contract from `memora_core`
//! against the hosted API; [`LiveList`] binds one open list to one change
//! subscription and one reconciler. Errors are the core's `StoreError`,
//! re-exported here.

pub mod cli;
pub mod client;
pub mod live;
pub mod output;
pub mod session;

pub use client::MemoraClient;
pub use live::LiveList;
pub use memora_core::store::{Result, StoreError};
