//! # Employee Session
//!
//! The employee's side of the day: book or cancel tomorrow's meal while the
//! window is open, and ask for a redemption code for today's meal.
//!
//! The session keeps a [`BookingRecord`] mirror of the employee's two bookings.
//! The mirror is reloaded when the day changes, and today's booking is
//! reloaded before a code is issued because the kitchen changes it too.
//! Every mutation goes through the policy first, then the repository, and only
//! touches the record once the repository accepted the change. A rejected or
//! failed operation leaves the record as the store last reported it.

use super::{authorize, BookingRecord, SessionError};
use crate::clients::BookingRepository;
use crate::clock::Clock;
use crate::config::BookingConfig;
use crate::domain::{Booking, EmployeeId, MenuItem, Principal, RedemptionCode, Role};
use crate::policy::{self, BookingWindow};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct EmployeeSession<R: BookingRepository> {
    principal: Principal,
    employee: EmployeeId,
    record: BookingRecord,
    repository: R,
    clock: Arc<dyn Clock>,
    window: BookingWindow,
    code_ttl: chrono::Duration,
}

impl<R: BookingRepository> EmployeeSession<R> {
    /// Opens a session for an employee and loads today's and tomorrow's bookings.
    ///
    /// # Errors
    /// [`SessionError::Forbidden`] for any role other than
    /// [`Role::Employee`]; [`SessionError::Store`] if loading fails.
    #[instrument(skip_all, fields(employee = %principal.id))]
    pub async fn open(
        principal: Principal,
        repository: R,
        clock: Arc<dyn Clock>,
        config: &BookingConfig,
    ) -> Result<Self, SessionError> {
        authorize(&principal, &[Role::Employee])?;

        let mut session = Self {
            employee: principal.employee_id(),
            principal,
            record: BookingRecord::empty(clock.today()),
            repository,
            clock,
            window: config.window(),
            code_ttl: config.code_ttl(),
        };
        session.refresh().await?;
        info!("Employee session opened");
        Ok(session)
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn record(&self) -> &BookingRecord {
        &self.record
    }

    /// Today's booking as of the last load.
    pub fn today(&self) -> Option<&Booking> {
        self.record.today()
    }

    /// Tomorrow's booking as of the last load.
    pub fn tomorrow(&self) -> Option<&Booking> {
        self.record.tomorrow()
    }

    pub fn is_booking_open(&self) -> bool {
        self.window.is_open(self.clock.now())
    }

    /// Reloads both bookings from the repository.
    #[instrument(skip(self), fields(employee = %self.employee))]
    pub async fn refresh(&mut self) -> Result<(), SessionError> {
        let today = self.clock.today();
        let today_booking = self
            .repository
            .load_today_booking(&self.employee, today)
            .await?;
        let tomorrow_booking = self
            .repository
            .load_tomorrow_booking(&self.employee, today)
            .await?;

        self.record = BookingRecord::new(today, today_booking, tomorrow_booking);
        Ok(())
    }

    /// Reloads the record if the day has changed since it was loaded.
    async fn ensure_current(&mut self) -> Result<(), SessionError> {
        if !self.record.is_current(self.clock.today()) {
            debug!(loaded_for = %self.record.loaded_for(), "Day changed, reloading bookings");
            self.refresh().await?;
        }
        Ok(())
    }

    /// Books `item` for tomorrow and returns the confirmed booking.
    #[instrument(skip(self, item), fields(employee = %self.employee, item = %item.id))]
    pub async fn book_tomorrow(&mut self, item: &MenuItem) -> Result<Booking, SessionError> {
        self.ensure_current().await?;

        let now = self.clock.now();
        let booking = policy::can_book_tomorrow(
            self.record.tomorrow(),
            item,
            &self.employee,
            now,
            &self.window,
        )
        .inspect_err(|e| warn!(error = %e, "Booking rejected"))?;

        self.repository.save_booking(booking.clone()).await?;
        self.record.set_tomorrow(Some(booking.clone()));
        info!(booking_id = %booking.id, date = %booking.date, "Booked tomorrow's meal");
        Ok(booking)
    }

    /// Cancels tomorrow's booking.
    #[instrument(skip(self), fields(employee = %self.employee))]
    pub async fn cancel_tomorrow(&mut self) -> Result<(), SessionError> {
        self.ensure_current().await?;

        let now = self.clock.now();
        let id = policy::cancel_tomorrow(self.record.tomorrow(), now, &self.window)
            .inspect_err(|e| warn!(error = %e, "Cancellation rejected"))?;

        self.repository.remove_booking(&id).await?;
        self.record.set_tomorrow(None);
        info!(booking_id = %id, "Cancelled tomorrow's meal");
        Ok(())
    }

    /// Issues a redemption code for today's meal ("Get Breakfast").
    ///
    /// Today's booking is reloaded first, since the kitchen may have served it
    /// or cleared its code since the record was loaded.
    ///
    /// # Errors
    /// [`SessionError::NoBookingToday`] without a booking for today, otherwise
    /// the [`issue_code`](policy::issue_code) rules.
    #[instrument(skip(self), fields(employee = %self.employee))]
    pub async fn get_breakfast(&mut self) -> Result<RedemptionCode, SessionError> {
        self.ensure_current().await?;

        let today = self.clock.today();
        let current = self
            .repository
            .load_today_booking(&self.employee, today)
            .await?;
        self.record.set_today(current.clone());
        let mut booking = current.ok_or(SessionError::NoBookingToday)?;

        let now = self.clock.now();
        let code = policy::issue_code(&mut booking, now, self.code_ttl)
            .inspect_err(|e| warn!(booking_id = %booking.id, error = %e, "Code not issued"))?;

        self.repository.save_booking(booking.clone()).await?;
        info!(booking_id = %booking.id, expires_at = %code.expires_at, "Redemption code issued");
        self.record.set_today(Some(booking));
        Ok(code)
    }
}
