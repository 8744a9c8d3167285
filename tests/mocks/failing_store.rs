use async_trait::async_trait;
use connectify::domain::ContactId;
use connectify::error::{StoreError, StoreResult};
use connectify::models::{Contact, NewContact};
use connectify::store::ContactStore;

/// Store whose every operation fails with an I/O-style error.
///
/// Validation still runs first on insert, so a bad payload reports the
/// validation failure rather than the storage one.
#[allow(dead_code)]
pub struct FailingStore {
    message: String,
}

#[allow(dead_code)]
impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Other(self.message.clone())
    }
}

#[async_trait]
impl ContactStore for FailingStore {
    async fn insert(&self, record: NewContact) -> StoreResult<Contact> {
        record.validate()?;
        Err(self.error())
    }

    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Err(self.error())
    }

    async fn delete_by_id(&self, _id: &ContactId) -> StoreResult<bool> {
        Err(self.error())
    }
}
