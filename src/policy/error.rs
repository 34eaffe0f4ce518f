//! Error types for the booking window and redemption rules.

use thiserror::Error;

/// Expected outcomes of a rejected booking or redemption step.
///
/// None of these is fatal: the UI maps each one to a message and the user can
/// retry (re-enter a code, request a new one after expiry, and so on).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BookingError {
    /// Booking and cancellation for tomorrow close at the cutoff hour.
    #[error("Booking window for tomorrow is closed")]
    WindowClosed,

    /// The chosen menu item is sold out.
    #[error("Menu item is not available")]
    ItemUnavailable,

    /// Only one booking for tomorrow may exist; cancel it first.
    #[error("A booking for tomorrow already exists")]
    AlreadyBooked,

    /// There is no booking for tomorrow to cancel.
    #[error("No active booking to cancel")]
    NoActiveBooking,

    /// Codes are only issued for confirmed bookings.
    #[error("Booking is not confirmed")]
    NotConfirmed,

    /// A code is already attached and has not expired yet.
    #[error("A redemption code is already active for this booking")]
    AlreadyIssued,

    /// The kitchen submitted an empty code.
    #[error("Please enter the code provided by the employee")]
    MissingCode,

    /// No code has been requested for this booking.
    #[error("No redemption code has been issued for this booking")]
    NoCodeIssued,

    /// The code expired; it has been cleared and a new one must be requested.
    #[error("Redemption code has expired")]
    CodeExpired,

    /// The entered code does not match the issued one.
    #[error("Redemption code does not match")]
    CodeMismatch,

    /// The meal was already collected.
    #[error("Booking has already been served")]
    AlreadyServed,
}
