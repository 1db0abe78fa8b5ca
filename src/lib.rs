//! BDE Office
//!
//! Data services behind a student association's public site and back-office.
//! This library provides the persistence facade over a remote document store
//! or local storage, and the dues, roster, cinema, catalog and login services
//! built on it.

pub mod config;
pub mod services;
pub mod models;
pub mod database;
pub mod state;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BdeError, Result};

// Re-export main components for easy access
pub use database::{Backend, DataService};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
