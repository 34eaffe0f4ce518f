//! Error types for the booking store.

use crate::domain::{BookingId, BookingStatus, EmployeeId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while reading or writing bookings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store actor is no longer receiving requests.
    #[error("Booking store closed")]
    ActorClosed,

    /// The store actor dropped the response channel.
    #[error("Booking store dropped response channel")]
    ActorDropped,

    /// The requested booking was not found.
    #[error("Booking not found: {0}")]
    NotFound(BookingId),

    /// The employee already holds a different booking for that date.
    #[error("Employee {employee} already has a booking on {date}")]
    DuplicateBooking { employee: EmployeeId, date: NaiveDate },

    /// The booking is not in a state that allows the requested change.
    #[error("Booking {id} cannot change while {status}")]
    InvalidTransition { id: BookingId, status: BookingStatus },
}
