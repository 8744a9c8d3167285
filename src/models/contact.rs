//! Contact model and its request/response payloads.

use crate::domain::{is_valid_email, ContactField, ContactId, FieldError, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A JSON scalar accepted where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

/// Read an optional text field, casting numbers and booleans to their
/// textual form. `null` is treated as absent; arrays and objects are rejected.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(scalar.map(String::from))
}

/// A stored contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier
    pub id: ContactId,

    /// Full name
    pub name: String,

    /// Email address (`local@domain.tld` shape)
    pub email: String,

    /// Phone number, free-form
    pub phone: String,

    /// Optional free-text message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the store created the record
    pub created_at: DateTime<Utc>,

    /// When the store last wrote the record
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Build a stored record from a create payload.
    ///
    /// Callers are expected to have run [`NewContact::validate`] first;
    /// missing fields become empty strings here.
    pub fn from_new(id: ContactId, new: NewContact, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name.unwrap_or_default(),
            email: new.email.unwrap_or_default(),
            phone: new.phone.unwrap_or_default(),
            message: new.message,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a contact.
///
/// Every field is optional at the type level so that a missing field is
/// reported as a validation failure rather than a decode failure. Numbers
/// and booleans are accepted as text. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewContact {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_text")]
    pub message: Option<String>,
}

impl NewContact {
    /// Payload with the three required fields set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            message: None,
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn value(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Message => self.message.as_deref(),
        }
        .filter(|v| !v.is_empty())
    }

    /// Check the persistence rules: name, email and phone present, email
    /// shaped like an address. Errors are reported for every failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.value(ContactField::Name).is_none() {
            errors.push(FieldError::new(ContactField::Name, "Name is required"));
        }
        match self.value(ContactField::Email) {
            None => errors.push(FieldError::new(ContactField::Email, "Email is required")),
            Some(email) if !is_valid_email(email) => errors.push(FieldError::new(
                ContactField::Email,
                "Please use a valid email address",
            )),
            Some(_) => {}
        }
        if self.value(ContactField::Phone).is_none() {
            errors.push(FieldError::new(ContactField::Phone, "Phone is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(errors))
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedContact {
    pub id: ContactId,
}
