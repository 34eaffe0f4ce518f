//! Error types for employee and kitchen sessions.

use crate::domain::{BookingId, Role};
use crate::policy::BookingError;
use crate::store_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// A booking rule rejected the operation.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// The booking store failed or rejected the write.
    #[error("Booking store error: {0}")]
    Store(#[from] StoreError),

    /// The principal's role may not open this session.
    #[error("Role {role} may not access this view")]
    Forbidden { role: Role },

    /// "Get Breakfast" was requested without a booking for today.
    #[error("No booking for today")]
    NoBookingToday,

    /// The kitchen referenced a booking the store does not know.
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),
}
