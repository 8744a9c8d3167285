//! Domain types.
//!
//! The contact id wrapper, the email shape rule, and the field-level
//! validation error shared by the store and the client form.

pub mod contact_id;
pub mod email;
pub mod errors;
pub mod field;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::{FieldError, ValidationError};
pub use field::ContactField;
