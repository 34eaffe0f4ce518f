//! # Redemption Codes
//!
//! "Get Breakfast" attaches a short-lived six digit code to today's confirmed
//! booking. The kitchen enters that code to mark the meal as served.
//!
//! Codes are drawn uniformly from `000000..=999999` and kept as strings, so
//! leading zeros survive.

use super::BookingError;
use crate::domain::{Booking, BookingStatus, RedemptionCode};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use tracing::debug;

/// Number of digits in every redemption code.
pub const CODE_LENGTH: usize = 6;

/// Default validity of an issued code.
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 30;

const CODE_SPACE: u32 = 1_000_000;

/// Issues a code for `booking` using the thread-local RNG.
///
/// See [`issue_code_with`] for the rules.
pub fn issue_code(
    booking: &mut Booking,
    now: NaiveDateTime,
    ttl: Duration,
) -> Result<RedemptionCode, BookingError> {
    issue_code_with(booking, now, ttl, &mut rand::thread_rng())
}

/// Issues a code valid from `now` until `now + ttl` and attaches it to `booking`.
///
/// An expired code still attached to the booking is replaced.
///
/// # Errors
/// - [`BookingError::NotConfirmed`] unless the booking is `Confirmed`
/// - [`BookingError::AlreadyIssued`] while a previous code is still valid
pub fn issue_code_with<R: Rng + ?Sized>(
    booking: &mut Booking,
    now: NaiveDateTime,
    ttl: Duration,
    rng: &mut R,
) -> Result<RedemptionCode, BookingError> {
    if booking.status != BookingStatus::Confirmed {
        return Err(BookingError::NotConfirmed);
    }
    if booking.active_code(now).is_some() {
        return Err(BookingError::AlreadyIssued);
    }

    let code = RedemptionCode {
        value: format!("{:0width$}", rng.gen_range(0..CODE_SPACE), width = CODE_LENGTH),
        issued_at: now,
        expires_at: now + ttl,
    };
    debug!(booking_id = %booking.id, expires_at = %code.expires_at, "Code issued");
    booking.code = Some(code.clone());
    Ok(code)
}

/// Checks `entered` against the code attached to `booking` and marks the
/// booking served on a match.
///
/// Surrounding whitespace in `entered` is ignored.
///
/// # Errors
/// Checked in order:
/// 1. [`BookingError::MissingCode`] for an empty entry
/// 2. [`BookingError::AlreadyServed`] if the meal was already collected
/// 3. [`BookingError::NoCodeIssued`] if no code is attached
/// 4. [`BookingError::CodeExpired`] past `expires_at`; the code is cleared
/// 5. [`BookingError::CodeMismatch`] if the digits differ
pub fn verify_code(
    booking: &mut Booking,
    entered: &str,
    now: NaiveDateTime,
) -> Result<(), BookingError> {
    let entered = entered.trim();
    if entered.is_empty() {
        return Err(BookingError::MissingCode);
    }
    if booking.is_served() {
        return Err(BookingError::AlreadyServed);
    }

    let code = booking.code.as_ref().ok_or(BookingError::NoCodeIssued)?;
    if code.is_expired(now) {
        // A stale code must not be retried.
        booking.code = None;
        return Err(BookingError::CodeExpired);
    }
    if code.value != entered {
        return Err(BookingError::CodeMismatch);
    }

    booking.serve();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeId, MenuItemId};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn ttl() -> Duration {
        Duration::minutes(DEFAULT_CODE_TTL_MINUTES)
    }

    fn confirmed() -> Booking {
        let mut booking = Booking::pending(
            EmployeeId::from("EMP001"),
            MenuItemId::from("1"),
            t0().date(),
        );
        booking.confirm();
        booking
    }

    fn is_six_digits(value: &str) -> bool {
        value.len() == CODE_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn test_issue_sets_expiry_and_attaches_code() {
        let mut booking = confirmed();
        let code = issue_code(&mut booking, t0(), ttl()).unwrap();

        assert!(is_six_digits(&code.value));
        assert_eq!(code.issued_at, t0());
        assert_eq!(code.expires_at, t0() + ttl());
        assert_eq!(booking.code.as_ref(), Some(&code));
    }

    #[test]
    fn test_issued_codes_are_always_six_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let mut booking = confirmed();
            let code = issue_code_with(&mut booking, t0(), ttl(), &mut rng).unwrap();
            assert!(is_six_digits(&code.value), "malformed code {:?}", code.value);
        }
    }

    #[test]
    fn test_small_values_keep_leading_zeros() {
        // Always yields the lowest value in range.
        struct Zero;
        impl rand::RngCore for Zero {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, dest: &mut [u8]) {
                dest.fill(0);
            }
            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
                dest.fill(0);
                Ok(())
            }
        }

        let mut booking = confirmed();
        let code = issue_code_with(&mut booking, t0(), ttl(), &mut Zero).unwrap();
        assert_eq!(code.value, "000000");
    }

    #[test]
    fn test_issue_requires_confirmed_booking() {
        let mut pending = Booking::pending(
            EmployeeId::from("EMP001"),
            MenuItemId::from("1"),
            t0().date(),
        );
        assert_eq!(
            issue_code(&mut pending, t0(), ttl()),
            Err(BookingError::NotConfirmed)
        );

        let mut served = confirmed();
        served.serve();
        assert_eq!(
            issue_code(&mut served, t0(), ttl()),
            Err(BookingError::NotConfirmed)
        );
    }

    #[test]
    fn test_reissue_before_expiry_is_rejected() {
        let mut booking = confirmed();
        let first = issue_code(&mut booking, t0(), ttl()).unwrap();

        let again = issue_code(&mut booking, t0() + Duration::minutes(10), ttl());
        assert_eq!(again, Err(BookingError::AlreadyIssued));
        assert_eq!(booking.code, Some(first));
    }

    #[test]
    fn test_reissue_after_expiry_replaces_code() {
        let mut booking = confirmed();
        issue_code(&mut booking, t0(), ttl()).unwrap();

        let later = t0() + Duration::minutes(45);
        let second = issue_code(&mut booking, later, ttl()).unwrap();
        assert_eq!(second.issued_at, later);
        assert_eq!(booking.code, Some(second));
    }

    #[test]
    fn test_verify_empty_entry() {
        let mut booking = confirmed();
        issue_code(&mut booking, t0(), ttl()).unwrap();
        assert_eq!(
            verify_code(&mut booking, "", t0()),
            Err(BookingError::MissingCode)
        );
        assert_eq!(
            verify_code(&mut booking, "   ", t0()),
            Err(BookingError::MissingCode)
        );
    }

    #[test]
    fn test_verify_without_code() {
        let mut booking = confirmed();
        assert_eq!(
            verify_code(&mut booking, "123456", t0()),
            Err(BookingError::NoCodeIssued)
        );
    }

    #[test]
    fn test_verify_mismatch_keeps_code() {
        let mut booking = confirmed();
        let code = issue_code(&mut booking, t0(), ttl()).unwrap();
        let wrong = if code.value == "111111" { "222222" } else { "111111" };

        assert_eq!(
            verify_code(&mut booking, wrong, t0() + Duration::minutes(1)),
            Err(BookingError::CodeMismatch)
        );
        assert_eq!(booking.code, Some(code));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_expired_code_is_cleared() {
        let mut booking = confirmed();
        let code = issue_code(&mut booking, t0(), ttl()).unwrap();
        let late = t0() + Duration::minutes(31);

        assert_eq!(
            verify_code(&mut booking, &code.value, late),
            Err(BookingError::CodeExpired)
        );
        assert!(booking.code.is_none());
        assert_eq!(
            verify_code(&mut booking, &code.value, late),
            Err(BookingError::NoCodeIssued)
        );
    }

    #[test]
    fn test_verify_then_verify_again() {
        let mut booking = confirmed();
        let code = issue_code(&mut booking, t0(), ttl()).unwrap();

        verify_code(&mut booking, &code.value, t0() + Duration::minutes(5)).unwrap();
        assert_eq!(booking.status, BookingStatus::Served);
        assert!(booking.code.is_none());

        assert_eq!(
            verify_code(&mut booking, &code.value, t0() + Duration::minutes(6)),
            Err(BookingError::AlreadyServed)
        );
    }

    #[test]
    fn test_verify_ignores_surrounding_whitespace() {
        let mut booking = confirmed();
        let code = issue_code(&mut booking, t0(), ttl()).unwrap();
        let padded = format!(" {} ", code.value);

        verify_code(&mut booking, &padded, t0() + Duration::minutes(30)).unwrap();
        assert!(booking.is_served());
    }
}
