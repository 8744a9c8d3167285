use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Storage contract for contacts.
///
/// Each method is atomic with respect to a single record; there are no
/// multi-record transactions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Validate and persist a new record, assigning its id and timestamps.
    ///
    /// Fails with `StoreError::Validation` when a required field is missing
    /// or the email is malformed; nothing is written in that case.
    async fn insert(&self, record: NewContact) -> StoreResult<Contact>;

    /// All records, newest `created_at` first. Ties keep the later insertion first.
    async fn list_all(&self) -> StoreResult<Vec<Contact>>;

    /// Remove the record with `id`. Returns `false` when there was none.
    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool>;

    /// Number of stored records.
    async fn count(&self) -> StoreResult<usize> {
        Ok(self.list_all().await?.len())
    }
}
