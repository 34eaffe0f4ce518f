//! # BreakBuddy Booking Core
//!
//! Next-day breakfast booking and meal redemption for an office cafeteria.
//!
//! Employees book one meal for tomorrow while the daily window is open
//! (until 16:00 local time). On the day, "Get Breakfast" issues a six digit
//! code that is valid for 30 minutes; the chef enters it at the counter and
//! the booking becomes served.
//!
//! ## Module Tour
//!
//! ### 1. The Rules ([`policy`])
//! Pure, synchronous functions over a [`Booking`](domain::Booking) and an
//! explicit `now`.
//! - **Key items**: [`can_book_tomorrow`](policy::can_book_tomorrow),
//!   [`cancel_tomorrow`](policy::cancel_tomorrow),
//!   [`issue_code`](policy::issue_code), [`verify_code`](policy::verify_code).
//!
//! ### 2. The Store ([`store_actor`], [`clients`])
//! An in-memory booking store run as one Tokio task, reached through the
//! [`BookingRepository`](clients::BookingRepository) trait.
//! [`MockBookingStore`](clients::mock::MockBookingStore) scripts the same
//! protocol for tests.
//!
//! ### 3. The Sessions ([`session`])
//! Role-gated entry points: [`EmployeeSession`](session::EmployeeSession) and
//! [`KitchenSession`](session::KitchenSession).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`BreakfastSystem`](lifecycle::BreakfastSystem) starts the store, opens
//! sessions and shuts everything down.
//!
//! Time comes from a [`Clock`](clock::Clock) and tunables from
//! [`BookingConfig`](config::BookingConfig).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod domain;
pub mod lifecycle;
pub mod policy;
pub mod session;
pub mod store_actor;
