//! # Booking Window Policy
//!
//! Next-day bookings can be created and cancelled from midnight until the
//! cutoff hour (16:00 by default). The same cutoff gates both operations.

use super::BookingError;
use crate::domain::{Booking, BookingId, EmployeeId, MenuItem};
use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};

/// Default cutoff: booking for tomorrow closes at 4 PM.
pub const DEFAULT_CUTOFF_HOUR: u32 = 16;

/// Returns true iff `now.hour < cutoff_hour`. Exactly the cutoff hour is closed.
pub fn is_booking_window_open(now: NaiveDateTime, cutoff_hour: u32) -> bool {
    now.hour() < cutoff_hour
}

/// The configured daily booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub cutoff_hour: u32,
}

impl BookingWindow {
    pub fn new(cutoff_hour: u32) -> Self {
        Self { cutoff_hour }
    }

    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        is_booking_window_open(now, self.cutoff_hour)
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF_HOUR)
    }
}

/// The calendar day after `date`, or `None` on the last representable date.
pub fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}

/// Checks whether `employee` may book `item` for tomorrow and, if so, returns
/// the new booking already confirmed.
///
/// `existing` only counts when it is dated tomorrow; a booking left over from
/// an earlier day does not block a new one.
///
/// # Errors
/// Checked in order: [`BookingError::WindowClosed`] (also when `now` falls on
/// the last representable date, which has no tomorrow),
/// [`BookingError::ItemUnavailable`], [`BookingError::AlreadyBooked`].
pub fn can_book_tomorrow(
    existing: Option<&Booking>,
    item: &MenuItem,
    employee: &EmployeeId,
    now: NaiveDateTime,
    window: &BookingWindow,
) -> Result<Booking, BookingError> {
    let tomorrow = next_day(now.date())
        .filter(|_| window.is_open(now))
        .ok_or(BookingError::WindowClosed)?;
    if !item.available {
        return Err(BookingError::ItemUnavailable);
    }
    if existing.is_some_and(|booking| booking.date == tomorrow) {
        return Err(BookingError::AlreadyBooked);
    }

    let mut booking = Booking::pending(employee.clone(), item.id.clone(), tomorrow);
    // No approval step exists: a booking is confirmed as soon as it is made.
    booking.confirm();
    Ok(booking)
}

/// Checks whether tomorrow's booking may be cancelled and returns the id the
/// caller should remove.
///
/// Only a booking dated tomorrow can be cancelled; today's meal never can.
///
/// # Errors
/// Checked in order: [`BookingError::WindowClosed`],
/// [`BookingError::NoActiveBooking`].
pub fn cancel_tomorrow(
    existing: Option<&Booking>,
    now: NaiveDateTime,
    window: &BookingWindow,
) -> Result<BookingId, BookingError> {
    if !window.is_open(now) {
        return Err(BookingError::WindowClosed);
    }
    let tomorrow = next_day(now.date());
    existing
        .filter(|booking| Some(booking.date) == tomorrow)
        .map(|booking| booking.id)
        .ok_or(BookingError::NoActiveBooking)
}
