//! Stored document wrapper and entity traits

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use crate::utils::errors::{BdeError, Result};

/// An entity together with the id its backend assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Document<T> {
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self { id: id.into(), fields }
    }
}

/// A kind of record kept in its own collection
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name shared by both storage backends
    const COLLECTION: &'static str;

    /// Required-field checks run before any write
    fn validate(&self) -> Result<()>;

    /// Explicit display position, for collections that support one
    fn display_order(&self) -> Option<u32> {
        None
    }
}

/// Entities whose display order is chosen by the operator
pub trait Orderable: Entity {
    fn set_display_order(&mut self, order: Option<u32>);
}

/// Fail with `InvalidInput` when a required text field is blank
pub(crate) fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BdeError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}
