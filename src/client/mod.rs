//! HTTP client for the contacts API.
//!
//! A synchronous client built on `ureq`. Async callers go through
//! [`AsyncContactsClient`], which runs each call on tokio's blocking pool.

mod async_wrapper;
pub use async_wrapper::{AsyncContactsClient, ContactsApi};

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::metrics::Metrics;
use crate::models::{Contact, DeletedContact, NewContact};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// HTTP client for the contacts collection.
///
/// `base_url` is the collection URL itself, e.g.
/// `http://localhost:5000/api/contacts`.
#[derive(Clone)]
pub struct ContactsClient {
    /// Contacts collection URL
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactsClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a client with a custom collection URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::build(base_url, Duration::from_secs(10))
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Collection URL, or the URL of one member when `id` is given.
    fn build_url(&self, id: Option<&str>) -> String {
        let base = self.base_url.trim_end_matches('/');
        match id {
            Some(id) => format!("{}/{}", base, urlencoding::encode(id)),
            None => base.to_string(),
        }
    }

    /// Run a prepared request, timing it and mapping failures.
    fn execute(
        &self,
        request: ureq::Request,
        body: Option<&serde_json::Value>,
    ) -> ClientResult<String> {
        let timer = self.metrics.timer();
        tracing::debug!("{} {}", request.method(), request.url());

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                timer.complete();
                response
                    .into_string()
                    .map_err(|e| ClientError::HttpError(e.to_string()))
            }
            Err(e) => {
                timer.complete_with_error();
                let error = Self::map_error(e);
                tracing::debug!("Request failed: {}", error);
                Err(error)
            }
        }
    }

    /// Map a ureq error to a ClientError.
    fn map_error(error: ureq::Error) -> ClientError {
        match error {
            ureq::Error::Status(code, response) => {
                let raw = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                let message = serde_json::from_str::<MessageBody>(&raw)
                    .map(|b| b.message)
                    .unwrap_or(raw);

                match code {
                    400 => ClientError::BadRequest(message),
                    404 => ClientError::NotFound(message),
                    _ => ClientError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ClientError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ClientError::Timeout
                } else {
                    ClientError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch every contact, newest first.
    pub fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        let request = self.agent.get(&self.build_url(None));
        let body = self.execute(request, None)?;

        let contacts: Vec<Contact> = serde_json::from_str(&body)?;
        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }

    /// Create a contact and return the stored record.
    pub fn create_contact(&self, contact: &NewContact) -> ClientResult<Contact> {
        let payload = serde_json::to_value(contact)?;
        let request = self
            .agent
            .post(&self.build_url(None))
            .set("Content-Type", "application/json");
        let body = self.execute(request, Some(&payload))?;

        let created: Contact = serde_json::from_str(&body)?;
        self.metrics.record_contact_created();
        Ok(created)
    }

    /// Delete a contact by id.
    pub fn delete_contact(&self, id: &str) -> ClientResult<DeletedContact> {
        let request = self.agent.delete(&self.build_url(Some(id)));
        let body = self.execute(request, None)?;

        let deleted: DeletedContact = serde_json::from_str(&body)?;
        self.metrics.record_contact_deleted();
        Ok(deleted)
    }
}
