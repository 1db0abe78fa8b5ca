//! Middleware module
//!
//! Checks run in front of protected back-office operations

pub mod auth;

pub use auth::SessionGuard;
