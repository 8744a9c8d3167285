use super::collection::Collection;
use super::traits::ContactStore;
use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Contact store persisted as a single JSON document.
///
/// The whole collection is rewritten on every mutation: written to a sibling
/// `.tmp` file, then renamed over the document. Mutations are serialized by
/// a mutex and rolled back in memory if the write fails.
#[derive(Clone)]
pub struct JsonFileContactStore {
    path: PathBuf,
    records: Arc<Mutex<Collection>>,
}

impl JsonFileContactStore {
    /// Open the document at `path`, creating parent directories as needed.
    ///
    /// A missing or blank file is an empty store. A file that is not a
    /// valid document fails with `StoreError::Serialization`.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Collection::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Collection::default(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "Opened contact document {} ({} records)",
            path.display(),
            records.len()
        );

        Ok(Self {
            path,
            records: Arc::new(Mutex::new(records)),
        })
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "contacts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn persist(&self, records: &Collection) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(records)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, bytes).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for JsonFileContactStore {
    async fn insert(&self, record: NewContact) -> StoreResult<Contact> {
        let mut records = self.records.lock().await;
        let contact = records.insert(record, Utc::now())?;

        if let Err(e) = self.persist(&records).await {
            records.pop();
            tracing::error!("Failed to persist contact {}: {}", contact.id, e);
            return Err(e);
        }

        tracing::debug!("Inserted contact {}", contact.id);
        Ok(contact)
    }

    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.records.lock().await.newest_first())
    }

    async fn delete_by_id(&self, id: &ContactId) -> StoreResult<bool> {
        let mut records = self.records.lock().await;
        let Some((index, removed)) = records.remove(id) else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&records).await {
            records.restore(index, removed);
            tracing::error!("Failed to persist deletion of {}: {}", id, e);
            return Err(e);
        }

        Ok(true)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.lock().await.len())
    }
}
