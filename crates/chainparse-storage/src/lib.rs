//! chainparse-storage — pluggable storage backends for ChainParse.
//!
//! Backends:
//! - [`memory`] — in-memory (dev/testing, no persistence)
//! - [`sqlite`] — SQLite via `sqlx` (embedded, single-file persistence)
//!
//! Each backend implements the [`chainparse_core::Database`] contract; the
//! SQLite backend also ships a [`chainparse_core::StorageBuilder`] suitable
//! for the builder's storage slot.

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::{InMemoryDatabase, InMemoryStorageBuilder};
