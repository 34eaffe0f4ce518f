//! # Booking Store Client
//!
//! Type-safe async API over the store actor's channel. Each call sends one
//! [`StoreRequest`] and waits on a one-shot channel for the reply.

use crate::clients::BookingRepository;
use crate::domain::{Booking, BookingId, EmployeeId};
use crate::store_actor::{StoreError, StoreRequest};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::{mpsc, oneshot};

/// Client for interacting with the booking store actor.
///
/// Holds only a sender, so cloning is cheap; every session gets its own clone.
#[derive(Clone)]
pub struct BookingStoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl BookingStoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}

#[async_trait]
impl BookingRepository for BookingStoreClient {
    #[tracing::instrument(skip(self))]
    async fn load_booking(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
    ) -> Result<Option<Booking>, StoreError> {
        let employee = employee.clone();
        self.request(|respond_to| StoreRequest::Load {
            employee,
            date,
            respond_to,
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_booking(&self, id: &BookingId) -> Result<Option<Booking>, StoreError> {
        let id = *id;
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.id))]
    async fn save_booking(&self, booking: Booking) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Save {
            booking,
            respond_to,
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_booking(&self, id: &BookingId) -> Result<(), StoreError> {
        let id = *id;
        self.request(|respond_to| StoreRequest::Remove { id, respond_to })
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn mark_served(&self, id: &BookingId) -> Result<Booking, StoreError> {
        let id = *id;
        self.request(|respond_to| StoreRequest::MarkServed { id, respond_to })
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn list_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, StoreError> {
        self.request(|respond_to| StoreRequest::ListForDate { date, respond_to })
            .await
    }
}
