//! BDE Office
//!
//! Start-up check: loads configuration, connects the persistence facade and
//! reports what each collection holds.

use anyhow::Context;
use tracing::info;

use bde_office::{
    config::Settings,
    utils::{helpers::{format_amount, format_date, today}, logging},
    services::{ServiceFactory, StudentFilter, StudentReport},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading configuration")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", bde_office::info());

    let data = bde_office::DataService::connect(&settings).await?;
    info!(backend = %data.backend(), "Persistence facade ready");

    let services = ServiceFactory::new(data, &settings);

    for (collection, count) in services.data.collection_counts().await? {
        info!(collection = collection, entries = count, "Collection status");
    }

    let students = services.data.students.list().await?;
    let report = StudentReport::build(&students, &StudentFilter::default());
    info!(
        paid = report.summary.paid,
        unpaid = report.summary.unpaid,
        collected = %format_amount(report.summary.collected, &settings.dues.currency),
        "Dues status"
    );

    let upcoming = services.catalog.upcoming_events(today()).await?;
    let free_seats = services.cinema.available_seats().await?;
    if let Some(next) = upcoming.first() {
        info!(title = %next.fields.title, date = %format_date(next.fields.date), "Next event");
    }
    info!(
        upcoming_events = upcoming.len(),
        free_seats = free_seats.len(),
        "Public site status"
    );

    info!("{} is ready", bde_office::NAME);
    Ok(())
}
