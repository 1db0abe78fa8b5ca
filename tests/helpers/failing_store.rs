//! A remote store stand-in that can be switched off

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use serde_json::Value;
use bde_office::database::{Backend, DocumentStore, LocalDocumentStore, StoredDocument};
use bde_office::{BdeError, Result};

/// Behaves like a remote backend on top of a local directory until `go_offline`
#[derive(Debug)]
pub struct FlakyRemoteStore {
    inner: LocalDocumentStore,
    offline: AtomicBool,
    writes_left: Mutex<Option<usize>>,
}

impl FlakyRemoteStore {
    pub async fn open(root: &std::path::Path) -> Arc<Self> {
        let inner = LocalDocumentStore::open(root).await.expect("open remote stand-in");
        Arc::new(Self {
            inner,
            offline: AtomicBool::new(false),
            writes_left: Mutex::new(None),
        })
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Let `count` more writes through, then fail every write while reads keep working
    pub fn fail_writes_after(&self, count: usize) {
        *self.writes_left.lock().unwrap() = Some(count);
    }

    fn check_write(&self) -> Result<()> {
        self.check()?;
        let mut writes_left = self.writes_left.lock().unwrap();
        match writes_left.as_mut() {
            Some(0) => Err(BdeError::RemoteUnavailable("write rejected".to_string())),
            Some(left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn check(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BdeError::RemoteUnavailable("network unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DocumentStore for FlakyRemoteStore {
    fn backend(&self) -> Backend {
        Backend::Remote
    }

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        self.check()?;
        self.inner.list(collection).await
    }

    async fn find_by_field(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>> {
        self.check()?;
        self.inner.find_by_field(collection, field, value).await
    }

    async fn insert(&self, collection: &str, data: Value) -> Result<StoredDocument> {
        self.check_write()?;
        self.inner.insert(collection, data).await
    }

    async fn put(&self, collection: &str, document: &StoredDocument) -> Result<()> {
        self.check_write()?;
        self.inner.put(collection, document).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.check_write()?;
        self.inner.delete(collection, id).await
    }

    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64> {
        self.check_write()?;
        self.inner.delete_by_field(collection, field, value).await
    }

    async fn clear(&self, collection: &str) -> Result<u64> {
        self.check_write()?;
        self.inner.clear(collection).await
    }

    async fn replace_all(&self, collection: &str, documents: &[StoredDocument]) -> Result<()> {
        self.check_write()?;
        self.inner.replace_all(collection, documents).await
    }
}
