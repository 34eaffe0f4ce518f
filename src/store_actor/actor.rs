//! # Booking Store Actor
//!
//! The in-memory reference implementation of the booking repository. It owns
//! every booking and processes one [`StoreRequest`] at a time, so the map
//! needs no `Mutex`.

use super::{StoreError, StoreRequest};
use crate::clients::BookingStoreClient;
use crate::domain::{Booking, BookingId, BookingStatus, EmployeeId};
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Server half of the booking store.
///
/// Create it with [`BookingStoreActor::new`], spawn [`BookingStoreActor::run`]
/// on a Tokio task, and talk to it through the returned client. The loop ends
/// when every client clone has been dropped.
pub struct BookingStoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    bookings: HashMap<BookingId, Booking>,
}

impl BookingStoreActor {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, BookingStoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            bookings: HashMap::new(),
        };
        (actor, BookingStoreClient::new(sender))
    }

    /// Runs the event loop until the channel closes.
    pub async fn run(mut self) {
        info!("Booking store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Load {
                    employee,
                    date,
                    respond_to,
                } => {
                    let booking = self.find(&employee, date).cloned();
                    debug!(%employee, %date, found = booking.is_some(), "Load");
                    let _ = respond_to.send(Ok(booking));
                }
                StoreRequest::Get { id, respond_to } => {
                    let booking = self.bookings.get(&id).cloned();
                    debug!(booking_id = %id, found = booking.is_some(), "Get");
                    let _ = respond_to.send(Ok(booking));
                }
                StoreRequest::Save {
                    booking,
                    respond_to,
                } => {
                    debug!(?booking, "Save");
                    let _ = respond_to.send(self.save(booking));
                }
                StoreRequest::Remove { id, respond_to } => {
                    debug!(booking_id = %id, "Remove");
                    let result = match self.bookings.remove(&id) {
                        Some(_) => {
                            info!(booking_id = %id, size = self.bookings.len(), "Removed");
                            Ok(())
                        }
                        None => {
                            warn!(booking_id = %id, "Not found");
                            Err(StoreError::NotFound(id))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                StoreRequest::MarkServed { id, respond_to } => {
                    debug!(booking_id = %id, "MarkServed");
                    let _ = respond_to.send(self.mark_served(id));
                }
                StoreRequest::ListForDate { date, respond_to } => {
                    let mut bookings: Vec<Booking> = self
                        .bookings
                        .values()
                        .filter(|b| b.date == date)
                        .cloned()
                        .collect();
                    bookings.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
                    debug!(%date, count = bookings.len(), "ListForDate");
                    let _ = respond_to.send(Ok(bookings));
                }
            }
        }

        info!(size = self.bookings.len(), "Booking store shutdown");
    }

    fn find(&self, employee: &EmployeeId, date: NaiveDate) -> Option<&Booking> {
        self.bookings
            .values()
            .find(|b| &b.employee_id == employee && b.date == date)
    }

    fn save(&mut self, booking: Booking) -> Result<(), StoreError> {
        // Served is terminal: a stale copy must not bring the meal back.
        if let Some(stored) = self.bookings.get(&booking.id) {
            if stored.is_served() && *stored != booking {
                warn!(booking_id = %booking.id, "Served booking is final");
                return Err(StoreError::InvalidTransition {
                    id: booking.id,
                    status: stored.status,
                });
            }
        }
        if let Some(other) = self.find(&booking.employee_id, booking.date) {
            if other.id != booking.id {
                warn!(
                    employee = %booking.employee_id,
                    date = %booking.date,
                    existing = %other.id,
                    "Duplicate booking rejected"
                );
                return Err(StoreError::DuplicateBooking {
                    employee: booking.employee_id,
                    date: booking.date,
                });
            }
        }

        let id = booking.id;
        let status = booking.status;
        self.bookings.insert(id, booking);
        info!(booking_id = %id, %status, size = self.bookings.len(), "Saved");
        Ok(())
    }

    fn mark_served(&mut self, id: BookingId) -> Result<Booking, StoreError> {
        let Some(booking) = self.bookings.get_mut(&id) else {
            warn!(booking_id = %id, "Not found");
            return Err(StoreError::NotFound(id));
        };
        if booking.status != BookingStatus::Confirmed {
            warn!(booking_id = %id, status = %booking.status, "Cannot mark served");
            return Err(StoreError::InvalidTransition {
                id,
                status: booking.status,
            });
        }

        booking.serve();
        info!(booking_id = %id, "Served");
        Ok(booking.clone())
    }
}
