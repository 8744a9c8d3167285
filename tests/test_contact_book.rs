//! Controller behaviour of the contact book against a mock API.

mod mocks;

use connectify::frontend::{ContactBook, DeleteOutcome, SubmitOutcome, DELETE_PROMPT};
use connectify::ContactField;
use mocks::MockContactsApi;
use std::cell::Cell;
use std::sync::Arc;

fn book_with(api: &MockContactsApi) -> ContactBook {
    ContactBook::new(Arc::new(api.clone()))
}

fn fill(book: &mut ContactBook, name: &str, email: &str, phone: &str) {
    book.set_field(ContactField::Name, name);
    book.set_field(ContactField::Email, email);
    book.set_field(ContactField::Phone, phone);
}

#[test]
fn test_load_fetches_list() {
    let api = MockContactsApi::new();
    api.add_contact("Ada", "ada@x.com", "1");
    api.add_contact("Grace", "grace@navy.mil", "2");
    let mut book = book_with(&api);

    assert!(tokio_test::block_on(book.load()));

    let names: Vec<_> = book.contacts().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Grace", "Ada"]);
    assert_eq!(api.get_call_count("list_contacts"), 1);
}

#[tokio::test]
async fn test_load_resets_form() {
    let api = MockContactsApi::new();
    let mut book = book_with(&api);
    fill(&mut book, "Ada", "", "");
    assert!(!book.validate());

    book.load().await;

    assert!(book.form().is_empty());
    assert!(book.errors().is_empty());
}

#[tokio::test]
async fn test_load_failure_keeps_list_and_records_error() {
    let api = MockContactsApi::new();
    api.fail("list_contacts");
    let mut book = book_with(&api);

    assert!(!book.load().await);
    assert!(book.contacts().is_empty());
    assert!(book.last_error().unwrap().contains("load contacts"));
}

#[tokio::test]
async fn test_missing_email_blocks_submit() {
    let api = MockContactsApi::new();
    let mut book = book_with(&api);
    fill(&mut book, "Ada", "", "555");

    let outcome = book.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(book.errors().get(ContactField::Email), Some("Email is required"));
    assert_eq!(book.errors().len(), 1);
    assert_eq!(api.get_call_count("create_contact"), 0);
}

#[tokio::test]
async fn test_invalid_email_and_missing_fields() {
    let api = MockContactsApi::new();
    let mut book = book_with(&api);
    book.set_field(ContactField::Email, "ada@x");

    assert_eq!(book.submit().await, SubmitOutcome::Invalid);
    assert_eq!(book.errors().get(ContactField::Name), Some("Name is required"));
    assert_eq!(book.errors().get(ContactField::Email), Some("Email is invalid"));
    assert_eq!(book.errors().get(ContactField::Phone), Some("Phone is required"));
    assert_eq!(book.errors().get(ContactField::Message), None);
}

#[tokio::test]
async fn test_editing_a_field_clears_its_error() {
    let api = MockContactsApi::new();
    let mut book = book_with(&api);
    book.validate();
    assert_eq!(book.errors().len(), 3);

    book.set_field(ContactField::Phone, "5");

    assert_eq!(book.errors().get(ContactField::Phone), None);
    assert_eq!(book.errors().len(), 2);
}

#[tokio::test]
async fn test_submit_prepends_and_clears_form() {
    let api = MockContactsApi::new();
    api.add_contact("Ada", "ada@x.com", "1");
    let mut book = book_with(&api);
    book.load().await;

    fill(&mut book, "Grace", "grace@navy.mil", "2");
    book.set_field(ContactField::Message, "COBOL");
    let outcome = book.submit().await;

    let created = match outcome {
        SubmitOutcome::Created(contact) => contact,
        other => panic!("expected Created, got {:?}", other),
    };
    assert_eq!(created.message.as_deref(), Some("COBOL"));
    assert_eq!(book.contacts()[0], created);
    assert_eq!(book.contacts().len(), 2);
    assert!(book.form().is_empty());
    assert_eq!(api.get_call_count("list_contacts"), 1);
}

#[tokio::test]
async fn test_blank_message_is_not_sent() {
    let api = MockContactsApi::new();
    let mut book = book_with(&api);
    fill(&mut book, "Ada", "ada@x.com", "1");

    book.submit().await;

    assert_eq!(api.stored()[0].message, None);
}

#[tokio::test]
async fn test_failed_submit_keeps_form() {
    let api = MockContactsApi::new();
    api.fail("create_contact");
    let mut book = book_with(&api);
    fill(&mut book, "Ada", "ada@x.com", "1");

    assert_eq!(book.submit().await, SubmitOutcome::Failed);

    assert_eq!(book.form().get(ContactField::Name), "Ada");
    assert!(book.contacts().is_empty());
    assert!(book.take_last_error().unwrap().contains("create contact"));
    assert!(book.last_error().is_none());
}

#[tokio::test]
async fn test_delete_cancelled_sends_nothing() {
    let api = MockContactsApi::new();
    api.add_contact("Ada", "ada@x.com", "1");
    let mut book = book_with(&api);
    book.load().await;
    let id = book.contacts()[0].id.to_string();

    let asked = Cell::new(None);
    let decline = |prompt: &str| {
        asked.set(Some(prompt.to_string()));
        false
    };
    let outcome = book.delete(&id, &decline).await;

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(asked.take().as_deref(), Some(DELETE_PROMPT));
    assert_eq!(api.get_call_count("delete_contact"), 0);
    assert_eq!(book.contacts().len(), 1);
}

#[tokio::test]
async fn test_delete_confirmed_removes_contact() {
    let api = MockContactsApi::new();
    let ada = api.add_contact("Ada", "ada@x.com", "1");
    api.add_contact("Grace", "grace@navy.mil", "2");
    let mut book = book_with(&api);
    book.load().await;

    let outcome = book.delete(ada.id.as_str(), &|_: &str| true).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(book.contacts().len(), 1);
    assert!(book.contacts().iter().all(|c| c.id != ada.id));
    assert_eq!(api.stored().len(), 1);
}

#[tokio::test]
async fn test_delete_failure_keeps_list() {
    let api = MockContactsApi::new();
    api.add_contact("Ada", "ada@x.com", "1");
    let mut book = book_with(&api);
    book.load().await;

    let outcome = book.delete("unknown", &|_: &str| true).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(book.contacts().len(), 1);
    assert!(book.last_error().unwrap().contains("delete contact"));
}
