//! Storage port shared by the remote and local backends

use async_trait::async_trait;
use serde_json::Value;
use crate::utils::errors::Result;

/// Which backend a store talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    Local,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Remote => write!(f, "remote"),
            Backend::Local => write!(f, "local"),
        }
    }
}

/// An untyped document as held by a backend
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    /// Entity fields, always a JSON object without `id`
    pub data: Value,
}

/// Document-collection storage addressed by collection name and id
///
/// Both implementations support every operation. Documents come back in
/// insertion order.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    fn backend(&self) -> Backend;

    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Documents whose top-level string `field` equals `value`
    async fn find_by_field(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>>;

    /// Store a new document and return it with its assigned id
    async fn insert(&self, collection: &str, data: Value) -> Result<StoredDocument>;

    /// Overwrite the document with the same id; an unknown id is ignored
    async fn put(&self, collection: &str, document: &StoredDocument) -> Result<()>;

    /// Remove a document; an unknown id is ignored
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Remove every document whose `field` equals `value`, returning how many went
    async fn delete_by_field(&self, collection: &str, field: &str, value: &str) -> Result<u64>;

    /// Remove every document in the collection, returning how many went
    async fn clear(&self, collection: &str) -> Result<u64>;

    /// Swap the whole collection for `documents` in one step
    async fn replace_all(&self, collection: &str, documents: &[StoredDocument]) -> Result<()>;
}
