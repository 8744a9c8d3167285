//! Client-side state for the contact book front end.
//!
//! [`ContactBook`] owns everything the UI shows: the contact list, the
//! add-contact form, its per-field errors and the last failed call. It talks
//! to the API only through [`ContactsApi`](crate::client::ContactsApi), so
//! it can be driven by the terminal front end or by tests.

mod book;
mod form;
pub mod render;

pub use book::{Confirm, ContactBook, DeleteOutcome, SubmitOutcome, DELETE_PROMPT};
pub use form::{ContactForm, FormErrors};
