//! Outbound adapters implementing the record store ports.
//!
//! - **record_store**: reqwest client for a PostgREST-compatible store
//! - **memory**: in-process store used when no store URL is configured
//!
//! Adapters are thin translators between domain types and the store's
//! representation. They contain no business logic.

pub mod memory;
pub mod record_store;
