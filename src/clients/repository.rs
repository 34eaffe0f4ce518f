use crate::domain::{Booking, BookingId, EmployeeId};
use crate::store_actor::StoreError;
use async_trait::async_trait;
use crate::policy::next_day;
use chrono::NaiveDate;

/// Storage seam for bookings.
///
/// Sessions only talk to this trait, so the booking rules never depend on the
/// storage technology behind it. [`BookingStoreClient`](super::BookingStoreClient)
/// implements it on top of the in-memory store actor; a backend client would
/// implement it on top of the remote booking API.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// The booking `employee` holds for `date`, if any.
    async fn load_booking(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<Booking>, StoreError>;

    async fn get_booking(&self, id: &BookingId) -> Result<Option<Booking>, StoreError>;

    /// Insert or replace a booking by id.
    async fn save_booking(&self, booking: Booking) -> Result<(), StoreError>;

    async fn remove_booking(&self, id: &BookingId) -> Result<(), StoreError>;

    /// Transition a confirmed booking to served and return the stored result.
    async fn mark_served(&self, id: &BookingId) -> Result<Booking, StoreError>;

    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, StoreError>;

    /// Fetch the employee's booking for `today`.
    #[tracing::instrument(skip(self))]
    async fn load_today_booking(
        &self,
        employee: &EmployeeId,
        today: NaiveDate,
    ) -> Result<Option<Booking>, StoreError> {
        tracing::debug!("Loading today's booking");
        self.load_booking(employee, today).await
    }

    /// Fetch the employee's booking for the day after `today`.
    ///
    /// On the last representable date there is no tomorrow and nothing to load.
    #[tracing::instrument(skip(self))]
    async fn load_tomorrow_booking(
        &self,
        employee: &EmployeeId,
        today: NaiveDate,
    ) -> Result<Option<Booking>, StoreError> {
        tracing::debug!("Loading tomorrow's booking");
        match next_day(today) {
            Some(tomorrow) => self.load_booking(employee, tomorrow).await,
            None => Ok(None),
        }
    }
}
