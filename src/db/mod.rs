//! # Local Key-Value Storage
//!
//! The demo persists exactly one thing: the identifier of the last registered
//! credential. Storage is modelled as a small async key-value abstraction so
//! the ceremonies can be handed a SQLite-backed store in production and an
//! in-memory one under test.
//!
//! ## Submodules
//! - `sqlite`: [`SqliteStore`], one `key_value` table
//! - `credentials`: reading/writing the credential identifier under its fixed key
//! - `memory`: [`MemoryStore`] (tests only)

use crate::error::StoreError;
use async_trait::async_trait;

pub mod credentials;
#[cfg(test)]
pub mod memory;
pub mod sqlite;

#[cfg(test)]
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// String-to-string storage with no expiry and no namespacing
///
/// Reads and writes are unguarded: the last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or overwrite the value under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
