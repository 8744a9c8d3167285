//! The contact book controller.

use super::form::{ContactForm, FormErrors};
use crate::client::ContactsApi;
use crate::domain::ContactField;
use crate::error::ClientError;
use crate::models::Contact;
use std::sync::Arc;

/// Question asked before a contact is deleted.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of [`ContactBook::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The contact was stored and prepended to the list.
    Created(Contact),
    /// The call failed; the form keeps its values.
    Failed,
}

/// Result of [`ContactBook::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent.
    Cancelled,
    /// The contact was deleted and removed from the list.
    Deleted,
    /// The call failed; the list is unchanged.
    Failed,
}

/// Front-end state: the contact list plus the add-contact form.
///
/// Failed calls never propagate. They are logged and kept in
/// [`last_error`](Self::last_error) for the UI to show if it wants to.
pub struct ContactBook {
    api: Arc<dyn ContactsApi>,
    contacts: Vec<Contact>,
    form: ContactForm,
    errors: FormErrors,
    last_error: Option<String>,
}

impl ContactBook {
    pub fn new(api: Arc<dyn ContactsApi>) -> Self {
        Self {
            api,
            contacts: Vec::new(),
            form: ContactForm::default(),
            errors: FormErrors::default(),
            last_error: None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Hand the last failure to the caller and forget it.
    pub fn take_last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Initial load: fetch the list and start from an empty form, whatever
    /// values the inputs held before.
    pub async fn load(&mut self) -> bool {
        self.form.clear();
        self.errors.clear();
        self.refresh().await
    }

    /// Re-fetch the list without touching the form.
    pub async fn refresh(&mut self) -> bool {
        match self.api.list_contacts().await {
            Ok(contacts) => {
                self.contacts = contacts;
                true
            }
            Err(e) => {
                self.report("load contacts", e);
                false
            }
        }
    }

    /// Update one input. Any error shown for that field is cleared.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear_field(field);
    }

    /// Run local validation, replacing the current field errors.
    pub fn validate(&mut self) -> bool {
        self.errors = self.form.validate();
        self.errors.is_empty()
    }

    /// Validate, then create the contact.
    ///
    /// On success the new record goes to the top of the list (it is the
    /// newest) and the form is reset.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.validate() {
            return SubmitOutcome::Invalid;
        }

        match self.api.create_contact(&self.form.to_payload()).await {
            Ok(contact) => {
                self.contacts.insert(0, contact.clone());
                self.form.clear();
                self.errors.clear();
                SubmitOutcome::Created(contact)
            }
            Err(e) => {
                self.report("create contact", e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete after the user confirms [`DELETE_PROMPT`].
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_contact(id).await {
            Ok(_) => {
                self.contacts.retain(|c| c.id.as_str() != id);
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.report("delete contact", e);
                DeleteOutcome::Failed
            }
        }
    }

    fn report(&mut self, action: &str, error: ClientError) {
        tracing::error!("Failed to {}: {}", action, error);
        self.last_error = Some(format!("Failed to {}: {}", action, error));
    }
}
