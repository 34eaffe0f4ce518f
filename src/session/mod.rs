//! # Sessions
//!
//! Role-gated entry points used by the UI layer. An [`EmployeeSession`] books,
//! cancels and requests codes for one employee; a [`KitchenSession`] lists
//! today's bookings and verifies codes at the counter.
//!
//! Both depend only on [`BookingRepository`](crate::clients::BookingRepository)
//! and a [`Clock`](crate::clock::Clock), so tests can run them against the
//! scripted store with a pinned clock.

pub mod access;
pub mod employee;
pub mod error;
pub mod kitchen;
pub mod record;

pub use access::*;
pub use employee::*;
pub use error::*;
pub use kitchen::*;
pub use record::*;
