//! Services module
//!
//! This module contains the business logic built on the persistence facade

pub mod auth;
pub mod catalog;
pub mod cinema;
pub mod reports;
pub mod student;

use crate::config::Settings;
use crate::database::DataService;

// Re-export commonly used services
pub use auth::{AuthService, AdminSession, SessionClaims};
pub use catalog::PublicCatalog;
pub use cinema::{CinemaService, SeatState};
pub use reports::{DuesSummary, PaymentFilter, StudentFilter, StudentReport};
pub use student::StudentService;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub data: DataService,
    pub auth: AuthService,
    pub students: StudentService,
    pub cinema: CinemaService,
    pub catalog: PublicCatalog,
}

impl ServiceFactory {
    /// Create a new service factory over an already connected facade
    pub fn new(data: DataService, settings: &Settings) -> Self {
        Self {
            auth: AuthService::new(settings.auth.clone()),
            students: StudentService::new(data.students.clone(), settings.dues.clone()),
            cinema: CinemaService::new(data.cinema_sales.clone()),
            catalog: PublicCatalog::new(data.clone()),
            data,
        }
    }
}
