//! # Kitchen Session
//!
//! The chef's view: today's bookings, a pending/served tally, and code
//! verification at the counter.

use super::{authorize, SessionError};
use crate::clients::BookingRepository;
use crate::clock::Clock;
use crate::domain::{Booking, BookingId, BookingStatus, Principal, Role};
use crate::policy::{self, BookingError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Counts of today's bookings as shown on the chef dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenSummary {
    pub total: usize,
    /// Confirmed but not yet collected.
    pub pending: usize,
    pub served: usize,
}

impl KitchenSummary {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings
            .iter()
            .fold(Self::default(), |mut summary, booking| {
                summary.total += 1;
                match booking.status {
                    BookingStatus::Served => summary.served += 1,
                    BookingStatus::Pending | BookingStatus::Confirmed => summary.pending += 1,
                }
                summary
            })
    }
}

pub struct KitchenSession<R: BookingRepository> {
    principal: Principal,
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R: BookingRepository> KitchenSession<R> {
    /// Opens a session for a chef.
    ///
    /// # Errors
    /// [`SessionError::Forbidden`] for any role other than [`Role::Chef`].
    pub fn open(
        principal: Principal,
        repository: R,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SessionError> {
        authorize(&principal, &[Role::Chef])?;
        info!(chef = %principal.id, "Kitchen session opened");
        Ok(Self {
            principal,
            repository,
            clock,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// All bookings dated today, ordered by employee id.
    #[instrument(skip(self))]
    pub async fn today_bookings(&self) -> Result<Vec<Booking>, SessionError> {
        Ok(self.repository.list_for_date(self.clock.today()).await?)
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<KitchenSummary, SessionError> {
        let bookings = self.today_bookings().await?;
        Ok(KitchenSummary::from_bookings(&bookings))
    }

    /// Checks the code an employee presents and marks the meal served.
    ///
    /// An expired code is cleared in the store before
    /// [`BookingError::CodeExpired`] is returned, so the employee has to ask
    /// for a new one.
    ///
    /// # Errors
    /// [`SessionError::BookingNotFound`] for an unknown id, otherwise the
    /// [`verify_code`](policy::verify_code) rules.
    #[instrument(skip_all, fields(booking_id = %booking_id))]
    pub async fn verify_code(
        &self,
        booking_id: &BookingId,
        entered: &str,
    ) -> Result<Booking, SessionError> {
        let mut booking = self
            .repository
            .get_booking(booking_id)
            .await?
            .ok_or(SessionError::BookingNotFound(*booking_id))?;

        match policy::verify_code(&mut booking, entered, self.clock.now()) {
            Ok(()) => {
                let served = self.repository.mark_served(booking_id).await?;
                info!(employee = %served.employee_id, "Meal served");
                Ok(served)
            }
            Err(BookingError::CodeExpired) => {
                warn!("Expired code presented, clearing it");
                self.repository.save_booking(booking).await?;
                Err(BookingError::CodeExpired.into())
            }
            Err(e) => {
                warn!(error = %e, "Code rejected");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeId, MenuItemId};
    use chrono::NaiveDate;

    fn booking(employee: &str, status: BookingStatus) -> Booking {
        let mut booking = Booking::pending(
            EmployeeId::from(employee),
            MenuItemId::from("1"),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        );
        booking.status = status;
        booking
    }

    #[test]
    fn test_summary_counts() {
        let bookings = vec![
            booking("EMP001", BookingStatus::Confirmed),
            booking("EMP002", BookingStatus::Served),
            booking("EMP003", BookingStatus::Confirmed),
        ];
        assert_eq!(
            KitchenSummary::from_bookings(&bookings),
            KitchenSummary {
                total: 3,
                pending: 2,
                served: 1,
            }
        );
        assert_eq!(KitchenSummary::from_bookings(&[]), KitchenSummary::default());
    }
}
