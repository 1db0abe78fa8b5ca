//! Typed views over a document collection

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use crate::database::local::LocalDocumentStore;
use crate::database::store::{DocumentStore, StoredDocument};
use crate::models::{Document, Entity, Orderable};
use crate::utils::errors::Result;
use crate::utils::logging::{log_stale_read, log_store_operation};

/// CRUD over one collection of `T`
///
/// When the primary store is remote, successful reads are mirrored into the
/// local store so a later failed read can still be answered.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    store: Arc<dyn DocumentStore>,
    cache: Option<Arc<LocalDocumentStore>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: Arc::clone(&self.store),
            cache: self.cache.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Collection stored under the entity's own name
    pub fn new(store: Arc<dyn DocumentStore>, cache: Option<Arc<LocalDocumentStore>>) -> Self {
        Self::with_name(T::COLLECTION, store, cache)
    }

    /// Collection of `T` stored under another name
    pub fn with_name(name: &'static str, store: Arc<dyn DocumentStore>, cache: Option<Arc<LocalDocumentStore>>) -> Self {
        Self {
            name,
            store,
            cache,
            _entity: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All entries, honouring explicit display order when present
    pub async fn list(&self) -> Result<Vec<Document<T>>> {
        let started = Instant::now();
        let result = self.store.list(self.name).await;
        log_store_operation("list", self.name, started.elapsed().as_millis() as u64, result.is_ok());

        let stored = match result {
            Ok(stored) => {
                self.refresh_cache(&stored).await;
                stored
            }
            Err(e) => match &self.cache {
                Some(cache) => stale_snapshot(cache, self.name, &e.to_string()).await?,
                None => return Err(e),
            },
        };

        let mut documents = decode_all(stored)?;
        sort_by_display_order(&mut documents);
        Ok(documents)
    }

    /// Store a new entry and return it with its assigned id
    pub async fn add(&self, fields: T) -> Result<Document<T>> {
        fields.validate()?;
        let data = serde_json::to_value(&fields)?;

        let started = Instant::now();
        let result = self.store.insert(self.name, data).await;
        log_store_operation("add", self.name, started.elapsed().as_millis() as u64, result.is_ok());

        let stored = result?;
        debug!(collection = self.name, id = %stored.id, "Entry added");
        Ok(Document::new(stored.id, fields))
    }

    /// Overwrite the entry at `document.id`
    pub async fn update(&self, document: &Document<T>) -> Result<()> {
        document.fields.validate()?;
        let stored = encode(document)?;

        let started = Instant::now();
        let result = self.store.put(self.name, &stored).await;
        log_store_operation("update", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let started = Instant::now();
        let result = self.store.delete(self.name, id).await;
        log_store_operation("delete", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    /// Replace the whole collection with `documents`
    pub async fn replace_all(&self, documents: &[Document<T>]) -> Result<()> {
        let mut stored = Vec::with_capacity(documents.len());
        for document in documents {
            document.fields.validate()?;
            stored.push(encode(document)?);
        }

        let started = Instant::now();
        let result = self.store.replace_all(self.name, &stored).await;
        log_store_operation("replace_all", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    /// Entries whose string `field` equals `value`, in insertion order
    pub(crate) async fn find_by(&self, field: &str, value: &str) -> Result<Vec<Document<T>>> {
        let stored = match (self.store.find_by_field(self.name, field, value).await, &self.cache) {
            (Ok(stored), _) => stored,
            (Err(e), Some(cache)) => stale_snapshot(cache, self.name, &e.to_string())
                .await?
                .into_iter()
                .filter(|doc| doc.data.get(field).and_then(|v| v.as_str()) == Some(value))
                .collect(),
            (Err(e), None) => return Err(e),
        };
        decode_all(stored)
    }

    pub(crate) async fn delete_by(&self, field: &str, value: &str) -> Result<u64> {
        let started = Instant::now();
        let result = self.store.delete_by_field(self.name, field, value).await;
        log_store_operation("delete_by", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    pub(crate) async fn clear(&self) -> Result<u64> {
        let started = Instant::now();
        let result = self.store.clear(self.name).await;
        log_store_operation("clear", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result
    }

    async fn refresh_cache(&self, stored: &[StoredDocument]) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.replace_all(self.name, stored).await {
                debug!(collection = self.name, error = %e, "Could not refresh local snapshot");
            }
        }
    }
}

/// Last locally cached snapshot after a remote read failed
async fn stale_snapshot(cache: &LocalDocumentStore, collection: &str, error: &str) -> Result<Vec<StoredDocument>> {
    let cached = cache.list(collection).await?;
    log_stale_read(collection, error, cached.len());
    Ok(cached)
}

impl<T: Orderable> Collection<T> {
    /// Persist `documents` as the new display order, first entry first
    ///
    /// The whole collection is written back in one snapshot, so a failed
    /// save leaves the previous order in place. Ids no longer stored are
    /// skipped.
    pub async fn update_order(&self, documents: &[Document<T>]) -> Result<()> {
        let mut reordered = HashMap::with_capacity(documents.len());
        for document in apply_display_order(documents) {
            document.fields.validate()?;
            reordered.insert(document.id, serde_json::to_value(&document.fields)?);
        }

        let started = Instant::now();
        let mut stored = self.store.list(self.name).await?;
        for entry in &mut stored {
            if let Some(data) = reordered.remove(&entry.id) {
                entry.data = data;
            }
        }
        let result = self.store.replace_all(self.name, &stored).await;
        log_store_operation("update_order", self.name, started.elapsed().as_millis() as u64, result.is_ok());
        result?;

        debug!(collection = self.name, entries = documents.len(), "Display order saved");
        Ok(())
    }
}

/// Copy of `documents` with `order` set to each entry's position
pub fn apply_display_order<T: Orderable>(documents: &[Document<T>]) -> Vec<Document<T>> {
    documents
        .iter()
        .enumerate()
        .map(|(position, document)| {
            let mut document = document.clone();
            document.fields.set_display_order(Some(position as u32));
            document
        })
        .collect()
}

/// Ordered entries first, by order; unordered ones keep insertion order after them
fn sort_by_display_order<T: Entity>(documents: &mut [Document<T>]) {
    documents.sort_by_key(|document| document.fields.display_order().unwrap_or(u32::MAX));
}

fn encode<T: Entity>(document: &Document<T>) -> Result<StoredDocument> {
    Ok(StoredDocument {
        id: document.id.clone(),
        data: serde_json::to_value(&document.fields)?,
    })
}

fn decode_all<T: Entity>(stored: Vec<StoredDocument>) -> Result<Vec<Document<T>>> {
    stored
        .into_iter()
        .map(|doc| -> Result<Document<T>> {
            Ok(Document::new(doc.id, serde_json::from_value(doc.data)?))
        })
        .collect()
}
