//! # Booking Store Actor
//!
//! In-memory storage for bookings, run as a single Tokio task.
//!
//! ## Structure
//!
//! - [`actor`] - [`BookingStoreActor`], the server loop that owns the bookings
//! - [`message`] - [`StoreRequest`], the channel protocol
//! - [`error`] - [`StoreError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use breakbuddy::clients::BookingRepository;
//! use breakbuddy::store_actor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = store_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//!     let bookings = client.list_for_date(date).await.unwrap();
//!     assert!(bookings.is_empty());
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::BookingStoreClient;

/// Creates a new booking store actor and its client.
pub fn new(buffer_size: usize) -> (BookingStoreActor, BookingStoreClient) {
    BookingStoreActor::new(buffer_size)
}
