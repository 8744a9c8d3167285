//! Connectify terminal front end.
//!
//! Lists contacts, adds new ones through a prompted form and deletes them
//! after confirmation.

use anyhow::Result;
use connectify::frontend::render::{render_contact_list, render_form_errors};
use connectify::frontend::{ContactBook, DeleteOutcome, SubmitOutcome};
use connectify::{AsyncContactsClient, Config, ContactField, ContactsApi, ContactsClient};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "Commands: list | add | delete <id> | refresh | stats | help | quit";

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

fn confirm(question: &str) -> bool {
    matches!(
        prompt(&format!("{} [y/N] ", question)),
        Ok(Some(answer)) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    )
}

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Full Name",
        ContactField::Email => "Email Address",
        ContactField::Phone => "Phone Number",
        ContactField::Message => "Message (Optional)",
    }
}

/// Prompt for every field, then re-prompt only the fields that failed
/// validation. Leaving a failing field empty abandons the form.
async fn add_contact(book: &mut ContactBook) -> io::Result<()> {
    for field in ContactField::ALL {
        let Some(value) = prompt(&format!("{}: ", field_label(field)))? else {
            return Ok(());
        };
        book.set_field(field, value);
    }

    loop {
        if book.validate() {
            println!("Saving...");
        }
        match book.submit().await {
            SubmitOutcome::Created(contact) => {
                println!("Saved {} ({})", contact.name, contact.id);
                return Ok(());
            }
            SubmitOutcome::Failed => {
                if let Some(message) = book.take_last_error() {
                    println!("{}", message);
                }
                return Ok(());
            }
            SubmitOutcome::Invalid => {
                print!("{}", render_form_errors(book.errors()));
                let failing: Vec<ContactField> = book.errors().iter().map(|(f, _)| f).collect();
                for field in failing {
                    let Some(value) = prompt(&format!("{}: ", field_label(field)))? else {
                        return Ok(());
                    };
                    if value.is_empty() {
                        println!("Cancelled.");
                        return Ok(());
                    }
                    book.set_field(field, value);
                }
            }
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr at warn unless RUST_LOG says otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = AsyncContactsClient::new(ContactsClient::new(&config));
    let mut book = ContactBook::new(Arc::new(client.clone()) as Arc<dyn ContactsApi>);

    println!("Connectify - {}", config.api_url);
    if !book.load().await {
        if let Some(message) = book.take_last_error() {
            println!("{}", message);
        }
    }
    print!("{}", render_contact_list(book.contacts()));
    println!("{}", HELP);

    while let Some(line) = prompt("> ")? {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("list"), _) => print!("{}", render_contact_list(book.contacts())),
            (Some("refresh"), _) => {
                if !book.refresh().await {
                    if let Some(message) = book.take_last_error() {
                        println!("{}", message);
                    }
                }
                print!("{}", render_contact_list(book.contacts()));
            }
            (Some("add"), _) => add_contact(&mut book).await?,
            (Some("delete"), Some(id)) => match book.delete(id, &confirm).await {
                DeleteOutcome::Deleted => println!("Deleted {}", id),
                DeleteOutcome::Cancelled => println!("Kept {}", id),
                DeleteOutcome::Failed => {
                    if let Some(message) = book.take_last_error() {
                        println!("{}", message);
                    }
                }
            },
            (Some("stats"), _) => println!("{}", client.inner().metrics().summary()),
            (Some("quit"), _) | (Some("exit"), _) => break,
            (None, _) => {}
            _ => println!("{}", HELP),
        }
    }

    tracing::debug!("Client traffic: {}", client.inner().metrics().summary());
    Ok(())
}
