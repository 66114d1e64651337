use chrono::{DateTime, Duration, NaiveDate, Utc};

/// An exact instant used as an availability key. Two slots are the same slot
/// only when they compare equal to the nanosecond.
pub type TimeSlot = DateTime<Utc>;

pub const SLOT_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn format_slot(slot: &TimeSlot) -> String {
    slot.format(SLOT_DISPLAY_FORMAT).to_string()
}

/// Calendar-date comparison, time of day ignored.
pub fn same_calendar_date(slot: &TimeSlot, date: NaiveDate) -> bool {
    slot.date_naive() == date
}

/// True when `slot` is at most `hours` ahead of `now`. Slots already in the
/// past always qualify. A window too large for `Duration` covers every slot.
pub fn starts_within(slot: &TimeSlot, now: &TimeSlot, hours: i64) -> bool {
    match Duration::try_hours(hours) {
        Some(window) => *slot - *now <= window,
        None => hours > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> TimeSlot {
        Utc.with_ymd_and_hms(2025, 3, 14, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_same_calendar_date_ignores_time() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(same_calendar_date(&at(0, 0), date));
        assert!(same_calendar_date(&at(23, 59), date));
        assert!(!same_calendar_date(&at(9, 0), date.succ_opt().unwrap()));
    }

    #[test]
    fn test_starts_within_boundary_is_inclusive() {
        let now = at(9, 0);
        assert!(starts_within(&(now + Duration::hours(24)), &now, 24));
        assert!(!starts_within(&(now + Duration::hours(24) + Duration::seconds(1)), &now, 24));
    }

    #[test]
    fn test_starts_within_includes_past() {
        let now = at(9, 0);
        assert!(starts_within(&(now - Duration::days(3)), &now, 24));
    }

    #[test]
    fn test_starts_within_saturates_huge_window() {
        let now = at(9, 0);
        let far = now + Duration::days(365 * 1000);
        assert!(starts_within(&far, &now, i64::MAX));
        assert!(starts_within(&(now - Duration::days(1)), &now, i64::MIN));
    }

    #[test]
    fn test_format_slot() {
        assert_eq!(format_slot(&at(14, 30)), "2025-03-14 14:30");
    }
}
