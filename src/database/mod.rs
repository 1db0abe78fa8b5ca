//! Database module
//!
//! This module handles the storage backends and the persistence facade

pub mod collection;
pub mod connection;
pub mod local;
pub mod remote;
pub mod roster;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use collection::Collection;
pub use connection::{DatabasePool, DatabaseConfig, create_pool, run_migrations, health_check};
pub use local::LocalDocumentStore;
pub use remote::PgDocumentStore;
pub use roster::Roster;
pub use service::DataService;
pub use store::{Backend, DocumentStore, StoredDocument};
