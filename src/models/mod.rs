//! Data models for the contact book.
//!
//! `Contact` is the persisted record; `NewContact` is the create payload
//! accepted from clients; `DeletedContact` is the body returned on delete.

pub mod contact;

pub use contact::{Contact, DeletedContact, NewContact};
