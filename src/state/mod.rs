//! Admin UI state helpers
//!
//! Short-lived state owned by the admin views. Nothing here is persisted.

pub mod confirmation;

pub use confirmation::{ConfirmOutcome, DeleteConfirmation, DEFAULT_CONFIRM_WINDOW};
