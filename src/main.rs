//! Scripted demo of one booking cycle: book in the morning, collect the meal
//! the next day at the counter.

use breakbuddy::clock::FixedClock;
use breakbuddy::config::BookingConfig;
use breakbuddy::domain::{Menu, MenuItem, Principal};
use breakbuddy::lifecycle::{setup_tracing, BreakfastSystem};
use chrono::{Duration, Local, NaiveTime};
use std::sync::Arc;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BookingConfig::from_env().map_err(|e| e.to_string())?;
    let morning = Local::now().date_naive().and_time(NaiveTime::MIN) + Duration::hours(9);
    let clock = FixedClock::new(morning);
    let system = BreakfastSystem::new(config, Arc::new(clock.clone()));

    let menu = Menu::new(
        morning.date(),
        vec![
            MenuItem::new("1", "Masala Dosa", "Crispy crepe with potato filling", "South Indian"),
            MenuItem::new("2", "Poha", "Flattened rice with peanuts", "Maharashtrian"),
            MenuItem::new("3", "Aloo Paratha", "Stuffed flatbread", "North Indian").unavailable(),
        ],
    );
    let employee = Principal::employee("EMP001", "John Doe");
    let chef = Principal::chef("CHEF01", "Ravi Kumar");
    info!(date = %menu.date, available = menu.available().count(), "Menu loaded");

    let span = tracing::info_span!("booking");
    async {
        let mut session = system
            .employee_session(employee.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(open = session.is_booking_open(), "Booking window checked");

        for item in &menu.items {
            match session.book_tomorrow(item).await {
                Ok(booking) => info!(booking_id = %booking.id, dish = %item.name, "Booked"),
                Err(e) => info!(error = %e, dish = %item.name, "Not booked"),
            }
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Next morning at the counter.
    clock.advance(Duration::days(1));

    let span = tracing::info_span!("counter");
    async {
        let mut session = system
            .employee_session(employee)
            .await
            .map_err(|e| e.to_string())?;
        let kitchen = system.kitchen_session(chef).map_err(|e| e.to_string())?;

        let code = session.get_breakfast().await.map_err(|e| e.to_string())?;
        info!(code = %code.value, expires_at = %code.expires_at, "Code shown to the chef");

        let booking_id = session
            .today()
            .map(|booking| booking.id)
            .ok_or("today's booking missing")?;

        if let Err(e) = kitchen.verify_code(&booking_id, "not-a-code").await {
            info!(error = %e, "Wrong code rejected");
        }
        match kitchen.verify_code(&booking_id, &code.value).await {
            Ok(booking) => info!(booking_id = %booking.id, status = %booking.status, "Meal collected"),
            Err(e) => error!(error = %e, "Verification failed"),
        }

        let summary = kitchen.summary().await.map_err(|e| e.to_string())?;
        info!(
            total = summary.total,
            pending = summary.pending,
            served = summary.served,
            "Kitchen summary"
        );
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
