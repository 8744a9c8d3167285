//! Application service layer.
//!
//! Services sit between the HTTP handlers and the store: they run the
//! store operation and sort every failure into the categories the wire
//! contract knows about.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, CONTACT_NOT_FOUND};
