//! Data models module
//!
//! This module contains all data structures used throughout the crate

pub mod document;
pub mod student;
pub mod event;
pub mod club;
pub mod member;
pub mod mentor;
pub mod atelier;
pub mod registration;
pub mod cinema;

// Re-export commonly used models
pub use document::{Document, Entity, Orderable};
pub use student::{Student, CLASS_LEVELS};
pub use event::{Event, EventStatus};
pub use club::Club;
pub use member::Member;
pub use mentor::Mentor;
pub use atelier::Atelier;
pub use registration::Registration;
pub use cinema::{CinemaSale, SaleStatus, SeatMap};
