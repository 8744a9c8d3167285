use super::collection::Collection;
use super::traits::ContactStore;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Volatile contact store.
///
/// Cheap to clone; clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryContactStore {
    records: Arc<RwLock<Collection>>,
}

impl MemoryContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn insert(&self, record: NewContact) -> StoreResult<Contact> {
        let mut records = self.records.write().await;
        let contact = records.insert(record, Utc::now())?;
        tracing::debug!("Inserted contact {}", contact.id);
        Ok(contact)
    }

    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.records.read().await.newest_first())
    }

    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }
}
