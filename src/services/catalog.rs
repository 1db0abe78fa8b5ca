//! Read-only views for the public site

use chrono::NaiveDate;
use crate::database::DataService;
use crate::models::{Atelier, Club, Document, Event, EventStatus, Member, Mentor};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct PublicCatalog {
    data: DataService,
}

impl PublicCatalog {
    pub fn new(data: DataService) -> Self {
        Self { data }
    }

    /// Upcoming events from `today` on, soonest first
    pub async fn upcoming_events(&self, today: NaiveDate) -> Result<Vec<Document<Event>>> {
        let mut events: Vec<_> = self
            .data
            .events
            .list()
            .await?
            .into_iter()
            .filter(|event| event.fields.is_upcoming(today))
            .collect();
        events.sort_by_key(|event| event.fields.date);
        Ok(events)
    }

    /// Past events, most recent first
    ///
    /// An event still flagged upcoming whose date has gone by counts as past.
    pub async fn past_events(&self, today: NaiveDate) -> Result<Vec<Document<Event>>> {
        let mut events: Vec<_> = self
            .data
            .events
            .list()
            .await?
            .into_iter()
            .filter(|event| match event.fields.status {
                EventStatus::Past => true,
                EventStatus::Upcoming => event.fields.date < today,
                EventStatus::Cancelled => false,
            })
            .collect();
        events.sort_by(|a, b| b.fields.date.cmp(&a.fields.date));
        Ok(events)
    }

    pub async fn clubs(&self) -> Result<Vec<Document<Club>>> {
        self.data.clubs.list().await
    }

    pub async fn team(&self) -> Result<Vec<Document<Member>>> {
        self.data.members.list().await
    }

    /// Tutoring mentors in display order
    pub async fn mentors(&self) -> Result<Vec<Document<Mentor>>> {
        self.data.mentors.list().await
    }

    /// Ateliers in display order
    pub async fn ateliers(&self) -> Result<Vec<Document<Atelier>>> {
        self.data.ateliers.list().await
    }
}
