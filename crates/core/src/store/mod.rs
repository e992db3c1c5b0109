//! Store contract for todo lists and items.
//!
//! [`ListStore`] and [`ItemStore`] describe what any backend must provide;
//! [`MemoryStore`] is the in-memory implementation used by tests and local
//! tooling. The HTTP client crate implements the same traits against the
//! hosted backend.

mod error;
mod memory;
mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{ItemStore, ListStore};
