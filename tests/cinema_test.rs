//! Cinema seat booking

mod helpers;

use bde_office::models::*;
use bde_office::BdeError;
use assert_matches::assert_matches;
use helpers::*;

#[tokio::test]
async fn test_reserve_marks_seat_occupied() {
    let ctx = TestContext::new().await.unwrap();
    let cinema = ctx.services().cinema;

    let sale = cinema.reserve("FB-1", "Awa").await.unwrap();
    assert_eq!(sale.fields.status, SaleStatus::Pending);

    let occupancy = cinema.occupancy().await.unwrap();
    assert_eq!(occupancy.len(), cinema.seat_map().len());
    let seat = occupancy.iter().find(|s| s.seat_id == "FB-1").unwrap();
    assert!(seat.is_occupied());
    assert_eq!(seat.sale.as_ref().unwrap().fields.guest_name, "Awa");
    assert_eq!(occupancy.iter().filter(|s| s.is_occupied()).count(), 1);
}

#[tokio::test]
async fn test_reserving_taken_seat_overwrites() {
    let ctx = TestContext::new().await.unwrap();
    let cinema = ctx.services().cinema;

    let first = cinema.reserve("FB-1", "Awa").await.unwrap();
    let second = cinema.reserve("FB-1", "Marc").await.unwrap();
    assert_eq!(first.id, second.id);

    let sales = ctx.data.cinema_sales.list().await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].fields.guest_name, "Marc");
}

#[tokio::test]
async fn test_unknown_seat_rejected() {
    let ctx = TestContext::new().await.unwrap();
    let result = ctx.services().cinema.reserve("ZZ-99", "Awa").await;
    assert_matches!(result, Err(BdeError::UnknownSeat(seat)) if seat == "ZZ-99");
    assert!(ctx.data.cinema_sales.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_check_in_and_release() {
    let ctx = TestContext::new().await.unwrap();
    let cinema = ctx.services().cinema;
    let free_before = cinema.available_seats().await.unwrap().len();

    let sale = cinema.reserve("BA-3", "Inès").await.unwrap();
    let checked = cinema.check_in(&sale.id).await.unwrap();
    assert_eq!(checked.fields.status, SaleStatus::CheckedIn);
    let undone = cinema.undo_check_in(&sale.id).await.unwrap();
    assert_eq!(undone.fields.status, SaleStatus::Pending);

    assert_eq!(cinema.available_seats().await.unwrap().len(), free_before - 1);
    assert_eq!(cinema.release("BA-3").await.unwrap(), 1);
    assert_eq!(cinema.release("BA-3").await.unwrap(), 0);
    assert_eq!(cinema.available_seats().await.unwrap().len(), free_before);
}

#[tokio::test]
async fn test_check_in_unknown_sale() {
    let ctx = TestContext::new().await.unwrap();
    let result = ctx.services().cinema.check_in("nope").await;
    assert_matches!(result, Err(BdeError::NotFound { .. }));
}
