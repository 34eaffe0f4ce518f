//! The repository seam and its clients.
//!
//! - [`BookingRepository`] - the storage interface sessions depend on
//! - [`BookingStoreClient`] - channel client for the in-memory store actor
//! - [`mock`] - scripted store for tests

pub mod booking_client;
pub mod mock;
pub mod repository;

pub use booking_client::*;
pub use repository::*;
