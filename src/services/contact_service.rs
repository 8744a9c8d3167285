//! Contact service layer.
//!
//! List, create and delete over a [`ContactStore`].

use crate::domain::ContactId;
use crate::error::{ServiceError, ServiceResult, StoreError};
use crate::models::{Contact, DeletedContact, NewContact};
use crate::store::ContactStore;
use async_trait::async_trait;
use std::sync::Arc;

/// Message returned when a delete addresses an unknown id.
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Contact service trait for request-level operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, newest first.
    ///
    /// Store failures become `ServiceError::Internal`.
    async fn list_contacts(&self) -> ServiceResult<Vec<Contact>>;

    /// Create a contact from a client payload.
    ///
    /// Every failure, validation or otherwise, becomes
    /// `ServiceError::BadRequest` carrying the store's message.
    async fn create_contact(&self, payload: NewContact) -> ServiceResult<Contact>;

    /// Delete a contact by id.
    ///
    /// Unknown ids become `ServiceError::NotFound`; store failures become
    /// `ServiceError::Internal`.
    async fn delete_contact(&self, id: &str) -> ServiceResult<DeletedContact>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    store: Arc<dyn ContactStore>,
}

impl ContactServiceImpl {
    /// Create a new contact service over `store`.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> ServiceResult<Vec<Contact>> {
        self.store.list_all().await.map_err(|e| {
            tracing::error!("Listing contacts failed: {}", e);
            ServiceError::Internal(e.to_string())
        })
    }

    async fn create_contact(&self, payload: NewContact) -> ServiceResult<Contact> {
        match self.store.insert(payload).await {
            Ok(contact) => {
                tracing::info!("Created contact {}", contact.id);
                Ok(contact)
            }
            Err(StoreError::Validation(e)) => {
                tracing::debug!("Rejected contact: {}", e);
                Err(ServiceError::BadRequest(e.to_string()))
            }
            Err(e) => {
                tracing::warn!("Creating contact failed: {}", e);
                Err(ServiceError::BadRequest(e.to_string()))
            }
        }
    }

    async fn delete_contact(&self, id: &str) -> ServiceResult<DeletedContact> {
        let Ok(id) = ContactId::new(id) else {
            return Err(ServiceError::NotFound(CONTACT_NOT_FOUND.to_string()));
        };

        match self.store.delete_by_id(&id).await {
            Ok(true) => {
                tracing::info!("Deleted contact {}", id);
                Ok(DeletedContact { id })
            }
            Ok(false) => Err(ServiceError::NotFound(CONTACT_NOT_FOUND.to_string())),
            Err(e) => {
                tracing::error!("Deleting contact {} failed: {}", id, e);
                Err(ServiceError::Internal(e.to_string()))
            }
        }
    }
}
