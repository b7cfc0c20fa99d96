//! Read-time appointment status.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::AppointmentStatus;

/// Classifies an appointment relative to `today`.
///
/// `today` is always supplied by the caller so the result depends on its
/// inputs alone.
pub fn derive_status(appointment_date: NaiveDate, today: NaiveDate) -> AppointmentStatus {
    match appointment_date.cmp(&today) {
        Ordering::Less => AppointmentStatus::Completed,
        Ordering::Equal => AppointmentStatus::Today,
        Ordering::Greater => AppointmentStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn past_date_is_completed() {
        assert_eq!(
            derive_status(today() - Duration::days(1), today()),
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn same_date_is_today() {
        assert_eq!(derive_status(today(), today()), AppointmentStatus::Today);
    }

    #[test]
    fn future_date_is_upcoming() {
        assert_eq!(
            derive_status(today() + Duration::days(1), today()),
            AppointmentStatus::Upcoming
        );
    }

    #[test]
    fn classification_is_exhaustive_across_a_range() {
        for offset in -400..=400 {
            let d = today() + Duration::days(offset);
            let expected = match offset {
                o if o < 0 => AppointmentStatus::Completed,
                0 => AppointmentStatus::Today,
                _ => AppointmentStatus::Upcoming,
            };
            assert_eq!(derive_status(d, today()), expected, "offset {offset}");
        }
    }

    #[test]
    fn year_boundary() {
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(derive_status(eve, new_year), AppointmentStatus::Completed);
        assert_eq!(derive_status(new_year, eve), AppointmentStatus::Upcoming);
    }
}
