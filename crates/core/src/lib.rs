//! memora_core - domain types and contracts for the memora project.
//!
//! The crate is split along the functional-core boundary:
//!
//! - [`todo`]: the entity types, title validation, display ordering, and the
//!   live-update reconciler. Pure code, no I/O.
//! - [`identity`]: the caller identity passed into every store operation,
//!   plus the anonymous-session lifecycle.
//! - [`store`]: the store contract (async traits, typed error) and an
//!   in-memory implementation mirroring the hosted backend's row rules.

pub mod identity;
pub mod store;
pub mod todo;
