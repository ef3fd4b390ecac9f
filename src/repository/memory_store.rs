//! In-memory key-value store, for tests and throwaway sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::traits::KeyValueStore;
use crate::domain::DomainResult;

#[derive(Default)]
pub struct InMemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw values, e.g. records in an older layout
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}
