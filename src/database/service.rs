//! Persistence facade
//!
//! One entry point over every collection of the back-office. The backend is
//! chosen once in [`DataService::connect`] and never changes afterwards.

use std::sync::Arc;
use tracing::warn;
use crate::config::{RemoteStoreConfig, Settings};
use crate::database::collection::Collection;
use crate::database::connection::{create_pool, run_migrations, DatabaseConfig};
use crate::database::local::LocalDocumentStore;
use crate::database::remote::PgDocumentStore;
use crate::database::roster::Roster;
use crate::database::store::{Backend, DocumentStore};
use crate::models::*;
use crate::utils::errors::Result;
use crate::utils::logging::log_backend_selected;

/// Collection holding club sign-ups
pub const CLUB_REGISTRATIONS: &str = "club_registrations";
/// Collection holding atelier sign-ups
pub const ATELIER_REGISTRATIONS: &str = "atelier_registrations";

#[derive(Debug, Clone)]
pub struct DataService {
    backend: Backend,
    pub students: Collection<Student>,
    pub events: Collection<Event>,
    pub clubs: Collection<Club>,
    pub members: Collection<Member>,
    pub mentors: Collection<Mentor>,
    pub ateliers: Collection<Atelier>,
    pub cinema_sales: Collection<CinemaSale>,
    pub club_registrations: Roster,
    pub atelier_registrations: Roster,
}

impl DataService {
    /// Build the facade over `store`, mirroring remote reads into `cache`
    pub fn new(store: Arc<dyn DocumentStore>, cache: Option<Arc<LocalDocumentStore>>) -> Self {
        let cache = match store.backend() {
            Backend::Remote => cache,
            Backend::Local => None,
        };

        Self {
            backend: store.backend(),
            students: Collection::new(store.clone(), cache.clone()),
            events: Collection::new(store.clone(), cache.clone()),
            clubs: Collection::new(store.clone(), cache.clone()),
            members: Collection::new(store.clone(), cache.clone()),
            mentors: Collection::new(store.clone(), cache.clone()),
            ateliers: Collection::new(store.clone(), cache.clone()),
            cinema_sales: Collection::new(store.clone(), cache.clone()),
            club_registrations: Roster::new(Collection::with_name(CLUB_REGISTRATIONS, store.clone(), cache.clone())),
            atelier_registrations: Roster::new(Collection::with_name(ATELIER_REGISTRATIONS, store, cache)),
        }
    }

    /// Facade backed only by local storage
    pub fn local(store: Arc<LocalDocumentStore>) -> Self {
        Self::new(store, None)
    }

    /// Pick the backend from configuration
    ///
    /// A usable remote configuration gets a connection pool; any failure
    /// while setting it up is logged and local storage is used instead.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let local = Arc::new(LocalDocumentStore::open(&settings.local.data_dir).await?);

        let Some(remote) = settings.remote_store() else {
            log_backend_selected("local", "no remote store configured");
            return Ok(Self::local(local));
        };

        match connect_remote(remote).await {
            Ok(store) => {
                log_backend_selected("remote", "remote store reachable");
                Ok(Self::new(Arc::new(store), Some(local)))
            }
            Err(e) => {
                warn!(error = %e, "Remote store initialization failed, falling back to local storage");
                log_backend_selected("local", "remote store initialization failed");
                Ok(Self::local(local))
            }
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Entry count per collection, for status output
    pub async fn collection_counts(&self) -> Result<Vec<(&'static str, usize)>> {
        Ok(vec![
            (self.students.name(), self.students.list().await?.len()),
            (self.events.name(), self.events.list().await?.len()),
            (self.clubs.name(), self.clubs.list().await?.len()),
            (self.members.name(), self.members.list().await?.len()),
            (self.mentors.name(), self.mentors.list().await?.len()),
            (self.ateliers.name(), self.ateliers.list().await?.len()),
            (self.cinema_sales.name(), self.cinema_sales.list().await?.len()),
            (self.club_registrations.name(), self.club_registrations.fetch_all().await?.len()),
            (self.atelier_registrations.name(), self.atelier_registrations.fetch_all().await?.len()),
        ])
    }
}

async fn connect_remote(remote: &RemoteStoreConfig) -> Result<PgDocumentStore> {
    let pool = create_pool(&DatabaseConfig::from(remote)).await?;
    run_migrations(&pool).await?;
    Ok(PgDocumentStore::new(pool))
}
