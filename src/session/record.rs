use crate::domain::{Booking, BookingId};
use chrono::NaiveDate;

/// One employee's view of their bookings: today's meal and tomorrow's.
///
/// Owned by a single [`EmployeeSession`](super::EmployeeSession) and never
/// shared, so it is a plain struct mutated through `&mut self`. The slots are
/// relative to [`loaded_for`](Self::loaded_for); once the calendar moves on
/// the record is stale and must be reloaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    loaded_for: NaiveDate,
    today: Option<Booking>,
    tomorrow: Option<Booking>,
}

impl BookingRecord {
    pub fn new(loaded_for: NaiveDate, today: Option<Booking>, tomorrow: Option<Booking>) -> Self {
        Self {
            loaded_for,
            today,
            tomorrow,
        }
    }

    /// An empty record for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, None, None)
    }

    /// The day that "today" referred to when the slots were loaded.
    pub fn loaded_for(&self) -> NaiveDate {
        self.loaded_for
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.loaded_for == today
    }

    pub fn today(&self) -> Option<&Booking> {
        self.today.as_ref()
    }

    pub fn tomorrow(&self) -> Option<&Booking> {
        self.tomorrow.as_ref()
    }

    pub fn set_today(&mut self, booking: Option<Booking>) {
        self.today = booking;
    }

    pub fn set_tomorrow(&mut self, booking: Option<Booking>) {
        self.tomorrow = booking;
    }

    /// Marks the held booking with `id` as served. Returns false if neither
    /// slot holds it.
    pub fn mark_served(&mut self, id: &BookingId) -> bool {
        let slot = [self.today.as_mut(), self.tomorrow.as_mut()]
            .into_iter()
            .flatten()
            .find(|booking| &booking.id == id);
        match slot {
            Some(booking) => {
                booking.serve();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingStatus, EmployeeId, MenuItemId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn confirmed(d: u32) -> Booking {
        let mut booking =
            Booking::pending(EmployeeId::from("EMP001"), MenuItemId::from("1"), day(d));
        booking.confirm();
        booking
    }

    #[test]
    fn test_slots_start_empty() {
        let record = BookingRecord::empty(day(10));
        assert!(record.today().is_none());
        assert!(record.tomorrow().is_none());
    }

    #[test]
    fn test_stale_after_midnight() {
        let record = BookingRecord::new(day(10), None, Some(confirmed(11)));
        assert_eq!(record.loaded_for(), day(10));
        assert!(record.is_current(day(10)));
        assert!(!record.is_current(day(11)));
    }

    #[test]
    fn test_set_and_clear_tomorrow() {
        let mut record = BookingRecord::new(day(10), Some(confirmed(10)), None);
        let tomorrow = confirmed(11);

        record.set_tomorrow(Some(tomorrow.clone()));
        assert_eq!(record.tomorrow(), Some(&tomorrow));

        record.set_tomorrow(None);
        assert!(record.tomorrow().is_none());
        assert!(record.today().is_some());
    }

    #[test]
    fn test_mark_served_finds_the_right_slot() {
        let today = confirmed(10);
        let tomorrow = confirmed(11);
        let mut record = BookingRecord::new(day(10), Some(today.clone()), Some(tomorrow.clone()));

        assert!(record.mark_served(&today.id));
        assert_eq!(record.today().unwrap().status, BookingStatus::Served);
        assert_eq!(record.tomorrow().unwrap().status, BookingStatus::Confirmed);

        assert!(!record.mark_served(&BookingId::new()));
    }
}
