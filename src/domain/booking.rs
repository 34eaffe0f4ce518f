//! Bookings and the redemption codes attached to them.

use crate::domain::{EmployeeId, MenuItemId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Type-safe identifier for Bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "booking_{}", self.0)
    }
}

/// Lifecycle of a booking: `Pending -> Confirmed -> Served`.
///
/// `Served` is terminal. Older clients label served history entries as
/// "completed"; that label deserializes to `Served`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    #[serde(alias = "completed")]
    Served,
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Served => write!(f, "served"),
        }
    }
}

/// A short-lived code the employee shows to the kitchen to collect a meal.
///
/// `value` is always six decimal digits and may start with zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionCode {
    pub value: String,
    pub issued_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl RedemptionCode {
    /// A code is still valid at its exact expiry instant.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        now > self.expires_at
    }
}

/// An employee's claim on one menu item for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub employee_id: EmployeeId,
    pub menu_item_id: MenuItemId,
    pub date: NaiveDate,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<RedemptionCode>,
}

impl Booking {
    /// Creates a new Booking in the `Pending` state with a fresh id.
    ///
    /// # Arguments
    /// * `employee_id` - Owner of the booking
    /// * `menu_item_id` - The booked dish
    /// * `date` - The day the meal is served
    pub fn pending(employee_id: EmployeeId, menu_item_id: MenuItemId, date: NaiveDate) -> Self {
        Self {
            id: BookingId::new(),
            employee_id,
            menu_item_id,
            date,
            status: BookingStatus::Pending,
            code: None,
        }
    }

    /// Moves a `Pending` booking to `Confirmed`. Returns false for any other state.
    pub fn confirm(&mut self) -> bool {
        if self.status != BookingStatus::Pending {
            return false;
        }
        self.status = BookingStatus::Confirmed;
        true
    }

    /// Moves the booking to the terminal `Served` state and drops its code.
    pub fn serve(&mut self) {
        self.status = BookingStatus::Served;
        self.code = None;
    }

    pub fn is_served(&self) -> bool {
        self.status == BookingStatus::Served
    }

    /// The attached code, if one exists and has not expired at `now`.
    pub fn active_code(&self, now: NaiveDateTime) -> Option<&RedemptionCode> {
        self.code.as_ref().filter(|code| !code.is_expired(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn booking() -> Booking {
        Booking::pending(
            EmployeeId::from("EMP001"),
            MenuItemId::from("1"),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_confirm_only_from_pending() {
        let mut booking = booking();
        assert!(booking.confirm());
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(!booking.confirm());

        booking.serve();
        assert!(!booking.confirm());
        assert_eq!(booking.status, BookingStatus::Served);
    }

    #[test]
    fn test_serve_clears_code() {
        let mut booking = booking();
        booking.confirm();
        booking.code = Some(RedemptionCode {
            value: "012345".into(),
            issued_at: at(8, 0),
            expires_at: at(8, 0) + Duration::minutes(30),
        });

        booking.serve();
        assert!(booking.is_served());
        assert!(booking.code.is_none());
    }

    #[test]
    fn test_code_valid_until_expiry_instant() {
        let code = RedemptionCode {
            value: "999999".into(),
            issued_at: at(8, 0),
            expires_at: at(8, 30),
        };
        assert!(!code.is_expired(at(8, 30)));
        assert!(code.is_expired(at(8, 31)));
    }

    #[test]
    fn test_completed_label_reads_as_served() {
        let status: BookingStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, BookingStatus::Served);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"served\"");
    }
}
