//! Booking window and redemption code rules.
//!
//! Everything here is synchronous and free of I/O: callers pass in the current
//! instant and the booking to act on, and get a typed [`BookingError`] back for
//! every rejected step.

pub mod error;
pub mod redemption;
pub mod window;

pub use error::*;
pub use redemption::*;
pub use window::*;
