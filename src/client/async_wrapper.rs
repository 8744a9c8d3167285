//! Async wrapper around the synchronous ContactsClient.
//!
//! Runs each HTTP call through `tokio::task::spawn_blocking` so the blocking
//! `ureq` agent never stalls the async runtime.

use crate::client::ContactsClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{Contact, DeletedContact, NewContact};
use async_trait::async_trait;
use std::sync::Arc;

/// Async contacts API used by the client controller.
#[async_trait]
pub trait ContactsApi: Send + Sync {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>>;
    async fn create_contact(&self, contact: &NewContact) -> ClientResult<Contact>;
    async fn delete_contact(&self, id: &str) -> ClientResult<DeletedContact>;
}

/// Async wrapper around a synchronous [`ContactsClient`].
#[derive(Clone)]
pub struct AsyncContactsClient {
    client: Arc<ContactsClient>,
}

impl AsyncContactsClient {
    pub fn new(client: ContactsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &ContactsClient {
        &self.client
    }
}

#[async_trait]
impl ContactsApi for AsyncContactsClient {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts())
            .await
            .map_err(|e| ClientError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_contact(&self, contact: &NewContact) -> ClientResult<Contact> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&contact))
            .await
            .map_err(|e| ClientError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<DeletedContact> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(|e| ClientError::HttpError(format!("Task join error: {}", e)))?
    }
}
