//! Sign-up rosters for clubs and ateliers

use tracing::warn;
use crate::database::collection::Collection;
use crate::models::registration::PARENT_FIELD;
use crate::models::{Document, Registration};
use crate::utils::errors::Result;

/// Registration entries of one kind of parent (clubs or ateliers)
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Collection<Registration>,
}

impl Roster {
    pub fn new(entries: Collection<Registration>) -> Self {
        Self { entries }
    }

    pub fn name(&self) -> &'static str {
        self.entries.name()
    }

    /// Roster of one club or atelier, oldest sign-up first
    pub async fn fetch_registrations(&self, parent_id: &str) -> Result<Vec<Document<Registration>>> {
        let mut registrations = self.entries.find_by(PARENT_FIELD, parent_id).await?;
        registrations.sort_by_key(|entry| entry.fields.registered_at);
        Ok(registrations)
    }

    /// Every roster entry across all parents
    pub async fn fetch_all(&self) -> Result<Vec<Document<Registration>>> {
        self.entries.list().await
    }

    pub async fn register(&self, entry: Registration) -> Result<Document<Registration>> {
        self.entries.add(entry).await
    }

    pub async fn update_registration(&self, entry: &Document<Registration>) -> Result<()> {
        self.entries.update(entry).await
    }

    pub async fn delete_registration(&self, id: &str) -> Result<()> {
        self.entries.delete(id).await
    }

    /// Empty the roster of one parent, returning how many entries were removed
    pub async fn reset_registrations(&self, parent_id: &str) -> Result<u64> {
        let removed = self.entries.delete_by(PARENT_FIELD, parent_id).await?;
        warn!(roster = self.name(), parent_id = parent_id, removed = removed, "Roster reset");
        Ok(removed)
    }

    /// Remove every roster entry of every parent
    pub async fn wipe_all_registrations(&self) -> Result<u64> {
        let removed = self.entries.clear().await?;
        warn!(roster = self.name(), removed = removed, "All rosters wiped");
        Ok(removed)
    }
}
