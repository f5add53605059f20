use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Appointment request submitted by the public booking widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: String,
    pub license_plate: String,
    /// Requested service ("Bảo dưỡng định kỳ", "Sửa chữa", …).
    pub service_kind: String,
    /// Booking date, "YYYY-MM-DD".
    pub date: String,
    /// Display label of the chosen slot, e.g. "07:30 - 09:30".
    pub time_slot: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A bookable time window. `threshold` is the start hour as a decimal
/// (7.5 = 07:30), used to disable slots already past on same-day bookings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub threshold: f64,
}

pub const TIME_SLOTS: [TimeSlot; 5] = [
    TimeSlot { label: "07:30 - 09:30", threshold: 7.5 },
    TimeSlot { label: "09:30 - 11:30", threshold: 9.5 },
    TimeSlot { label: "13:00 - 15:00", threshold: 13.0 },
    TimeSlot { label: "15:00 - 17:00", threshold: 15.0 },
    TimeSlot { label: "17:00 - 19:00", threshold: 17.0 },
];

/// A slot is closed only on same-day bookings, once the current time has
/// reached its start. Future dates never disable slots.
pub fn is_slot_disabled(
    booking_date: NaiveDate,
    today: NaiveDate,
    current_hour: f64,
    slot_threshold: f64,
) -> bool {
    booking_date == today && current_hour >= slot_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_same_day_past_slot_disabled() {
        let today = d("2024-05-20");
        assert!(is_slot_disabled(today, today, 7.5, 7.5));
        assert!(is_slot_disabled(today, today, 8.0, 7.5));
    }

    #[test]
    fn test_same_day_future_slot_open() {
        let today = d("2024-05-20");
        assert!(!is_slot_disabled(today, today, 7.0, 7.5));
    }

    #[test]
    fn test_future_date_never_disabled() {
        let today = d("2024-05-20");
        let tomorrow = d("2024-05-21");
        assert!(!is_slot_disabled(tomorrow, today, 23.0, 7.5));
    }
}
