//! In-memory record collection shared by the store implementations.

use crate::domain::{ContactId, ValidationError};
use crate::models::{Contact, NewContact};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Records in insertion order. This is also the on-disk document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Collection {
    #[serde(default)]
    contacts: Vec<Contact>,
}

impl Collection {
    pub(crate) fn len(&self) -> usize {
        self.contacts.len()
    }

    fn contains(&self, id: &ContactId) -> bool {
        self.contacts.iter().any(|c| &c.id == id)
    }

    fn fresh_id(&self) -> ContactId {
        loop {
            let id = ContactId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Validate `record` and append it.
    ///
    /// Timestamps never run backwards relative to the latest insertion, so
    /// insertion order and `created_at` order agree even if the wall clock
    /// steps back.
    pub(crate) fn insert(
        &mut self,
        record: NewContact,
        now: DateTime<Utc>,
    ) -> Result<Contact, ValidationError> {
        record.validate()?;

        let now = match self.contacts.last() {
            Some(last) if last.created_at > now => last.created_at,
            _ => now,
        };
        let contact = Contact::from_new(self.fresh_id(), record, now);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    /// Undo the most recent insert.
    pub(crate) fn pop(&mut self) -> Option<Contact> {
        self.contacts.pop()
    }

    /// Remove by id, returning the slot it occupied so it can be restored.
    pub(crate) fn remove(&mut self, id: &ContactId) -> Option<(usize, Contact)> {
        let index = self.contacts.iter().position(|c| &c.id == id)?;
        Some((index, self.contacts.remove(index)))
    }

    pub(crate) fn restore(&mut self, index: usize, contact: Contact) {
        let index = index.min(self.contacts.len());
        self.contacts.insert(index, contact);
    }

    /// Newest first; equal timestamps keep the later insertion first.
    pub(crate) fn newest_first(&self) -> Vec<Contact> {
        let mut sorted: Vec<Contact> = self.contacts.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}
