//! Test helpers module
//!
//! This module provides utilities and helpers for testing the persistence
//! facade and the services built on it.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;
pub mod failing_store;
pub mod database_helper;

pub use test_context::*;
pub use test_data::*;
pub use failing_store::*;
pub use database_helper::*;
