//! Cinema seating model
//!
//! The room has a fixed seat map. A seat id is `<row>-<number>`, for example
//! `FB-1` is the first seat of the second front row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::models::document::{require, Entity};
use crate::utils::errors::{BdeError, Result};

/// Field holding the seat id, used for reservation lookups
pub const SEAT_FIELD: &str = "seatId";

/// Rows of the room, front to back, with their seat counts
const SEAT_ROWS: [(&str, u8); 8] = [
    ("FA", 8),
    ("FB", 8),
    ("FC", 8),
    ("FD", 8),
    ("BA", 10),
    ("BB", 10),
    ("BC", 10),
    ("BD", 10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaleStatus {
    Pending,
    CheckedIn,
}

/// A free-seat reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CinemaSale {
    pub seat_id: String,
    pub guest_name: String,
    pub reserved_at: DateTime<Utc>,
    pub status: SaleStatus,
}

impl CinemaSale {
    pub fn new(seat_id: impl Into<String>, guest_name: impl Into<String>) -> Self {
        Self {
            seat_id: seat_id.into(),
            guest_name: guest_name.into(),
            reserved_at: Utc::now(),
            status: SaleStatus::Pending,
        }
    }
}

impl Entity for CinemaSale {
    const COLLECTION: &'static str = "cinema_sales";

    fn validate(&self) -> Result<()> {
        require("guestName", &self.guest_name)?;
        if !SeatMap::standard().contains(&self.seat_id) {
            return Err(BdeError::UnknownSeat(self.seat_id.clone()));
        }
        Ok(())
    }
}

/// The fixed enumeration of bookable seats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMap {
    seats: Vec<String>,
}

impl SeatMap {
    /// The room layout used by the association
    pub fn standard() -> Self {
        let seats = SEAT_ROWS
            .iter()
            .flat_map(|(row, count)| (1..=*count).map(move |n| format!("{}-{}", row, n)))
            .collect();
        Self { seats }
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seats.iter().any(|seat| seat == seat_id)
    }

    /// Seat ids front to back, left to right
    pub fn seats(&self) -> &[String] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}
