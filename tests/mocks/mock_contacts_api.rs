use async_trait::async_trait;
use chrono::Utc;
use connectify::domain::ContactId;
use connectify::error::{ClientError, ClientResult};
use connectify::models::{Contact, DeletedContact, NewContact};
use connectify::ContactsApi;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the contacts API.
///
/// Records are kept newest first, failures can be switched on per method,
/// and every call is counted for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactsApi {
    contacts: Arc<Mutex<Vec<Contact>>>,
    failing: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockContactsApi {
    /// Create a new empty MockContactsApi.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored contact; it becomes the newest.
    pub fn add_contact(&self, name: &str, email: &str, phone: &str) -> Contact {
        self.store(NewContact::new(name, email, phone))
    }

    /// Make every later call to `method` fail with a transport error.
    pub fn fail(&self, method: &str) {
        self.failing.lock().unwrap().push(method.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Snapshot of the stored contacts, newest first.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    fn store(&self, payload: NewContact) -> Contact {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = ContactId::new(format!("mock-{}", next_id)).unwrap();
        let contact = Contact::from_new(id, payload, Utc::now());
        self.contacts.lock().unwrap().insert(0, contact.clone());
        contact
    }

    fn track_call(&self, method: &str) -> ClientResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.lock().unwrap().iter().any(|m| m == method) {
            return Err(ClientError::HttpError("Connection failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContactsApi for MockContactsApi {
    async fn list_contacts(&self) -> ClientResult<Vec<Contact>> {
        self.track_call("list_contacts")?;
        Ok(self.stored())
    }

    async fn create_contact(&self, contact: &NewContact) -> ClientResult<Contact> {
        self.track_call("create_contact")?;
        if let Err(e) = contact.validate() {
            return Err(ClientError::BadRequest(e.to_string()));
        }
        Ok(self.store(contact.clone()))
    }

    async fn delete_contact(&self, id: &str) -> ClientResult<DeletedContact> {
        self.track_call("delete_contact")?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| c.id.as_str() != id);
        if contacts.len() == before {
            return Err(ClientError::NotFound("Contact not found".to_string()));
        }
        Ok(DeletedContact {
            id: ContactId::new(id).unwrap(),
        })
    }
}
