//! Event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::utils::errors::{BdeError, Result};
use crate::utils::helpers::is_valid_image_source;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Past,
    Cancelled,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Upcoming => write!(f, "upcoming"),
            EventStatus::Past => write!(f, "past"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub status: EventStatus,
}

impl Event {
    /// An upcoming event is listed publicly once, until its date passes
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == EventStatus::Upcoming && self.date >= today
    }
}

impl Entity for Event {
    const COLLECTION: &'static str = "events";

    fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("location", &self.location)?;
        if !self.image_url.is_empty() && !is_valid_image_source(&self.image_url) {
            return Err(BdeError::InvalidInput(
                "Image must be an http(s) URL or an embedded image".to_string()
            ));
        }
        Ok(())
    }
}
