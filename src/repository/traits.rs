//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::DomainResult;

/// String keys to opaque string values (JSON blobs, or a bare PIN)
///
/// Writes replace the whole value; there is no partial update.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Insert or overwrite the value under `key`
    async fn set(&self, key: &str, value: &str) -> DomainResult<()>;

    /// Delete `key`; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> DomainResult<()>;
}
