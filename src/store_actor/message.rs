//! # Store Messages
//!
//! Requests sent from a [`BookingStoreClient`](crate::clients::BookingStoreClient)
//! to the [`BookingStoreActor`](super::BookingStoreActor). Every request carries
//! a one-shot channel for its reply.

use super::StoreError;
use crate::domain::{Booking, BookingId, EmployeeId};
use chrono::NaiveDate;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    /// The booking `employee` holds for `date`, if any.
    Load {
        employee: EmployeeId,
        date: NaiveDate,
        respond_to: Response<Option<Booking>>,
    },
    Get {
        id: BookingId,
        respond_to: Response<Option<Booking>>,
    },
    /// Insert or replace a booking by id.
    Save {
        booking: Booking,
        respond_to: Response<()>,
    },
    Remove {
        id: BookingId,
        respond_to: Response<()>,
    },
    /// Transition a confirmed booking to served and return it.
    MarkServed {
        id: BookingId,
        respond_to: Response<Booking>,
    },
    /// All bookings for one date, ordered by employee id.
    ListForDate {
        date: NaiveDate,
        respond_to: Response<Vec<Booking>>,
    },
}
