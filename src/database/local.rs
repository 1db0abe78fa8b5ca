//! Local durable storage
//!
//! Each collection is one JSON file `<collection>_v2.json` holding the whole
//! array snapshot. Every write replaces the file through a rename so a
//! snapshot is never half written.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use crate::database::store::{Backend, DocumentStore, StoredDocument};
use crate::utils::errors::{BdeError, Result};
use crate::utils::helpers::generate_uuid;

/// Suffix of every storage key
const KEY_SUFFIX: &str = "_v2";

#[derive(Debug)]
pub struct LocalDocumentStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl LocalDocumentStore {
    /// Open (and create if needed) the data directory
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        debug!(path = %root.display(), "Local store opened");

        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    /// Storage key of a collection
    pub fn storage_key(collection: &str) -> String {
        format!("{}{}", collection, KEY_SUFFIX)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the snapshot of `collection`
    pub fn snapshot_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", Self::storage_key(collection)))
    }

    async fn read_snapshot(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let path = self.snapshot_path(collection);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<Value> = serde_json::from_slice(&raw)?;
        let mut documents = Vec::with_capacity(entries.len());
        for entry in entries {
            match split_id(entry) {
                Some(document) => documents.push(document),
                None => warn!(collection = collection, "Skipping local entry without an id"),
            }
        }
        Ok(documents)
    }

    async fn write_snapshot(&self, collection: &str, documents: &[StoredDocument]) -> Result<()> {
        let entries: Vec<Value> = documents.iter().map(merge_id).collect();
        let serialized = serde_json::to_vec_pretty(&entries)?;

        let path = self.snapshot_path(collection);
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, serialized).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!(collection = collection, entries = documents.len(), "Local snapshot written");
        Ok(())
    }
}

/// Flat `{id, ...fields}` entry into a stored document
fn split_id(entry: Value) -> Option<StoredDocument> {
    let Value::Object(mut fields) = entry else {
        return None;
    };
    let id = match fields.remove("id")? {
        Value::String(id) => id,
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(StoredDocument {
        id,
        data: Value::Object(fields),
    })
}

fn merge_id(document: &StoredDocument) -> Value {
    let mut fields = match &document.data {
        Value::Object(fields) => fields.clone(),
        _ => Map::new(),
    };
    fields.insert("id".to_string(), Value::String(document.id.clone()));
    Value::Object(fields)
}

fn field_matches(document: &StoredDocument, field: &str, value: &str) -> bool {
    document.data.get(field).and_then(Value::as_str) == Some(value)
}

fn ensure_object(data: &Value) -> Result<()> {
    if data.is_object() {
        Ok(())
    } else {
        Err(BdeError::InvalidInput("Document data must be a JSON object".to_string()))
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    fn backend(&self) -> Backend {
        Backend::Local
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let _guard = self.write_lock.lock().await;
        self.read_snapshot(collection).await
    }

    async fn find_by_field(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>> {
        let _guard = self.write_lock.lock().await;
        let documents = self.read_snapshot(collection).await?;
        Ok(documents.into_iter().filter(|doc| field_matches(doc, field, value)).collect())
    }

    async fn insert(&self, collection: &str, mut data: Value) -> Result<StoredDocument> {
        ensure_object(&data)?;
        if let Value::Object(fields) = &mut data {
            fields.remove("id");
        }

        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_snapshot(collection).await?;
        let document = StoredDocument {
            id: generate_uuid(),
            data,
        };
        documents.push(document.clone());
        self.write_snapshot(collection, &documents).await?;
        Ok(document)
    }

    async fn put(&self, collection: &str, document: &StoredDocument) -> Result<()> {
        ensure_object(&document.data)?;

        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_snapshot(collection).await?;
        match documents.iter_mut().find(|existing| existing.id == document.id) {
            Some(existing) => {
                existing.data = document.data.clone();
                self.write_snapshot(collection, &documents).await
            }
            None => {
                debug!(collection = collection, id = %document.id, "Update of unknown id ignored");
                Ok(())
            }
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_snapshot(collection).await?;
        let before = documents.len();
        documents.retain(|doc| doc.id != id);
        if documents.len() != before {
            self.write_snapshot(collection, &documents).await?;
        }
        Ok(())
    }

    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let mut documents = self.read_snapshot(collection).await?;
        let before = documents.len();
        documents.retain(|doc| !field_matches(doc, field, value));
        let removed = (before - documents.len()) as u64;
        if removed > 0 {
            self.write_snapshot(collection, &documents).await?;
        }
        Ok(removed)
    }

    async fn clear(&self, collection: &str) -> Result<u64> {
        let _guard = self.write_lock.lock().await;
        let removed = self.read_snapshot(collection).await?.len() as u64;
        self.write_snapshot(collection, &[]).await?;
        Ok(removed)
    }

    async fn replace_all(&self, collection: &str, documents: &[StoredDocument]) -> Result<()> {
        for document in documents {
            ensure_object(&document.data)?;
        }
        let _guard = self.write_lock.lock().await;
        self.write_snapshot(collection, documents).await
    }
}
