//! Plain-text rendering of the contact book.

use super::form::FormErrors;
use crate::models::Contact;
use chrono::Local;
use std::fmt::Write;

/// Shown when the list is empty.
pub const EMPTY_LIST: &str = "No contacts found. Add one to get started!";

/// One contact card.
pub fn render_contact(contact: &Contact) -> String {
    let initial = contact
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    let added = contact.created_at.with_timezone(&Local).format("%Y-%m-%d");

    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}  ({})", initial, contact.name, contact.id);
    let _ = writeln!(out, "    Added: {}", added);
    let _ = writeln!(out, "    Email: {}", contact.email);
    let _ = writeln!(out, "    Phone: {}", contact.phone);
    if let Some(message) = contact.message.as_deref().filter(|m| !m.is_empty()) {
        let _ = writeln!(out, "    \"{}\"", message);
    }
    out
}

/// The list heading with its count, followed by every card.
pub fn render_contact_list(contacts: &[Contact]) -> String {
    let mut out = format!("Contact List ({})\n", contacts.len());
    if contacts.is_empty() {
        out.push_str(EMPTY_LIST);
        out.push('\n');
        return out;
    }
    for contact in contacts {
        out.push('\n');
        out.push_str(&render_contact(contact));
    }
    out
}

/// One line per field error, in form order.
pub fn render_form_errors(errors: &FormErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}\n", field, message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactField, ContactId};
    use crate::models::NewContact;
    use chrono::Utc;

    fn contact(message: Option<&str>) -> Contact {
        let mut new = NewContact::new("ada Lovelace", "ada@x.com", "555");
        new.message = message.map(str::to_string);
        Contact::from_new(ContactId::new("c1").unwrap(), new, Utc::now())
    }

    #[test]
    fn test_empty_list() {
        let out = render_contact_list(&[]);
        assert!(out.starts_with("Contact List (0)"));
        assert!(out.contains(EMPTY_LIST));
    }

    #[test]
    fn test_card_shows_initial_and_message() {
        let out = render_contact(&contact(Some("call back")));
        assert!(out.starts_with("[A] ada Lovelace"));
        assert!(out.contains("Email: ada@x.com"));
        assert!(out.contains("\"call back\""));
    }

    #[test]
    fn test_blank_message_hidden() {
        let out = render_contact(&contact(Some("")));
        assert!(!out.contains('"'));
    }

    #[test]
    fn test_form_errors() {
        let mut errors = FormErrors::default();
        errors.insert(ContactField::Phone, "Phone is required");
        errors.insert(ContactField::Name, "Name is required");
        assert_eq!(
            render_form_errors(&errors),
            "  name: Name is required\n  phone: Phone is required\n"
        );
    }
}
