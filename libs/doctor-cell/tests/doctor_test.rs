use chrono::{Duration, TimeZone, Utc};

use doctor_cell::Doctor;

#[test]
fn test_doctor_starts_with_no_bookable_time() {
    let doctor = Doctor::new(1, "Dr. Smith", "Cardiology");
    let base = Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap();

    for offset in 0..48 {
        assert!(!doctor.is_available(&(base + Duration::minutes(30 * offset))));
    }
    assert!(doctor.availability().open_slots().is_empty());
}

#[test]
fn test_doctor_availability_is_per_doctor() {
    let slot = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
    let mut smith = Doctor::new(1, "Dr. Smith", "Cardiology");
    let adams = Doctor::new(2, "Dr. Adams", "Dermatology");

    smith.set_availability(slot, true);

    assert!(smith.is_available(&slot));
    assert!(!adams.is_available(&slot));
}

#[test]
fn test_doctor_display() {
    let doctor = Doctor::new(2, "Dr. Adams", "Dermatology");
    assert_eq!(doctor.to_string(), "ID: 2, Name: Dr. Adams, Specialty: Dermatology");
}
