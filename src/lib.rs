//! Connectify - a small contact manager.
//!
//! A JSON API over a single `Contact` resource, a document-backed store, and
//! a client controller that drives the add-contact form and contact list.
//!
//! # Architecture
//!
//! - **domain**: contact ids, the email shape rule, and validation errors
//! - **models**: the `Contact` record and its request/response payloads
//! - **store**: the persistence contract plus memory and JSON-file stores
//! - **services**: list/create/delete with wire-level error categories
//! - **server**: axum router for `/api/contacts`
//! - **client**: blocking HTTP client and its async wrapper
//! - **frontend**: form/list state used by the terminal front end
//! - **config**, **error**, **metrics**: ambient plumbing

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod frontend;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod store;

pub use client::{AsyncContactsClient, ContactsApi, ContactsClient};
pub use config::Config;
pub use domain::{ContactField, ContactId, ValidationError};
pub use error::{ClientError, ConfigError, ServiceError, StoreError};
pub use frontend::{ContactBook, ContactForm, DeleteOutcome, SubmitOutcome};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, DeletedContact, NewContact};
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl};
pub use store::{ContactStore, JsonFileContactStore, MemoryContactStore};
