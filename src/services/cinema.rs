//! Cinema seat booking service
//!
//! Seats are free; a reservation only records who sits where. Reserving a
//! seat that is already taken replaces the previous reservation.

use chrono::Utc;
use tracing::info;
use crate::database::Collection;
use crate::models::cinema::SEAT_FIELD;
use crate::models::{CinemaSale, Document, Entity, SaleStatus, SeatMap};
use crate::utils::errors::{BdeError, Result};

/// One seat of the map with its current reservation, if any
#[derive(Debug, Clone, PartialEq)]
pub struct SeatState {
    pub seat_id: String,
    pub sale: Option<Document<CinemaSale>>,
}

impl SeatState {
    pub fn is_occupied(&self) -> bool {
        self.sale.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct CinemaService {
    sales: Collection<CinemaSale>,
    seat_map: SeatMap,
}

impl CinemaService {
    pub fn new(sales: Collection<CinemaSale>) -> Self {
        Self {
            sales,
            seat_map: SeatMap::standard(),
        }
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Book `seat_id` for `guest_name`, overwriting any earlier booking of that seat
    pub async fn reserve(&self, seat_id: &str, guest_name: &str) -> Result<Document<CinemaSale>> {
        if !self.seat_map.contains(seat_id) {
            return Err(BdeError::UnknownSeat(seat_id.to_string()));
        }

        let sale = CinemaSale::new(seat_id, guest_name);
        let existing = self.sales.find_by(SEAT_FIELD, seat_id).await?;

        let reservation = match existing.split_first() {
            Some((current, duplicates)) => {
                let document = Document::new(current.id.clone(), sale);
                self.sales.update(&document).await?;
                for duplicate in duplicates {
                    self.sales.delete(&duplicate.id).await?;
                }
                document
            }
            None => self.sales.add(sale).await?,
        };

        info!(seat_id = seat_id, sale_id = %reservation.id, "Seat reserved");
        Ok(reservation)
    }

    /// Mark a reservation as checked in at the door
    pub async fn check_in(&self, sale_id: &str) -> Result<Document<CinemaSale>> {
        self.set_status(sale_id, SaleStatus::CheckedIn).await
    }

    /// Undo a check-in
    pub async fn undo_check_in(&self, sale_id: &str) -> Result<Document<CinemaSale>> {
        self.set_status(sale_id, SaleStatus::Pending).await
    }

    /// Free a seat; freeing an empty seat does nothing
    pub async fn release(&self, seat_id: &str) -> Result<u64> {
        let released = self.sales.delete_by(SEAT_FIELD, seat_id).await?;
        if released > 0 {
            info!(seat_id = seat_id, "Seat released");
        }
        Ok(released)
    }

    /// Every seat of the map, in map order, with its reservation
    pub async fn occupancy(&self) -> Result<Vec<SeatState>> {
        let sales = self.sales.list().await?;
        Ok(self
            .seat_map
            .seats()
            .iter()
            .map(|seat_id| SeatState {
                seat_id: seat_id.clone(),
                sale: sales.iter().find(|sale| &sale.fields.seat_id == seat_id).cloned(),
            })
            .collect())
    }

    pub async fn available_seats(&self) -> Result<Vec<String>> {
        Ok(self
            .occupancy()
            .await?
            .into_iter()
            .filter(|seat| !seat.is_occupied())
            .map(|seat| seat.seat_id)
            .collect())
    }

    async fn set_status(&self, sale_id: &str, status: SaleStatus) -> Result<Document<CinemaSale>> {
        let mut sale = self
            .sales
            .list()
            .await?
            .into_iter()
            .find(|sale| sale.id == sale_id)
            .ok_or_else(|| BdeError::not_found(CinemaSale::COLLECTION, sale_id))?;

        sale.fields.status = status;
        if status == SaleStatus::CheckedIn {
            info!(sale_id = sale_id, checked_in_at = %Utc::now(), "Guest checked in");
        }
        self.sales.update(&sale).await?;
        Ok(sale)
    }
}
