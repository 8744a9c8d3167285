//! Add-contact form values and local validation.

use crate::domain::{is_valid_email, ContactField};
use crate::models::NewContact;
use std::collections::BTreeMap;

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_REQUIRED: &str = "Email is required";
const EMAIL_INVALID: &str = "Email is invalid";
const PHONE_REQUIRED: &str = "Phone is required";

/// Current values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Reset every input to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check each field independently. An empty result means the form may
    /// be submitted.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.is_empty() {
            errors.insert(ContactField::Name, NAME_REQUIRED);
        }
        if self.email.is_empty() {
            errors.insert(ContactField::Email, EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, EMAIL_INVALID);
        }
        if self.phone.is_empty() {
            errors.insert(ContactField::Phone, PHONE_REQUIRED);
        }

        errors
    }

    /// The create payload for the current values. A blank message is omitted.
    pub fn to_payload(&self) -> NewContact {
        let payload = NewContact::new(&self.name, &self.email, &self.phone);
        if self.message.is_empty() {
            payload
        } else {
            payload.with_message(&self.message)
        }
    }
}

/// Per-field error messages shown under the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<ContactField, String>);

impl FormErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ContactField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop the error for one field. Returns whether there was one.
    pub fn clear_field(&mut self, field: ContactField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}
