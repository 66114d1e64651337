#![allow(dead_code)]

use std::sync::Arc;
use chrono::{DateTime, Duration, TimeZone, Utc};

use appointment_cell::SchedulingEngine;
use doctor_cell::Doctor;
use notification_cell::RecordingNotificationSink;
use patient_cell::Patient;
use shared_config::AppConfig;

pub type TestEngine = SchedulingEngine<Arc<RecordingNotificationSink>>;

pub const JOHN: u32 = 1;
pub const JANE: u32 = 2;
pub const SMITH: u32 = 1;
pub const ADAMS: u32 = 2;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 15, 9, 0, 0).unwrap()
}

pub fn hours(n: i64) -> DateTime<Utc> {
    base_time() + Duration::hours(n)
}

/// Engine with two patients and two doctors registered, no slots opened.
pub fn seeded_engine() -> (TestEngine, Arc<RecordingNotificationSink>) {
    seeded_engine_with(&AppConfig::default())
}

pub fn seeded_engine_with(config: &AppConfig) -> (TestEngine, Arc<RecordingNotificationSink>) {
    let sink = Arc::new(RecordingNotificationSink::new());
    let mut engine = SchedulingEngine::with_notifier(config, Arc::clone(&sink));

    engine.add_patient(Patient::new(JOHN, "John Doe", "john@example.com", "1234567890"));
    engine.add_patient(Patient::new(JANE, "Jane Doe", "jane@example.com", "0987654321"));
    engine.add_doctor(Doctor::new(SMITH, "Dr. Smith", "Cardiology"));
    engine.add_doctor(Doctor::new(ADAMS, "Dr. Adams", "Dermatology"));

    (engine, sink)
}

pub fn open_slot(engine: &mut TestEngine, doctor_id: u32, slot: DateTime<Utc>) {
    engine
        .doctor_mut(doctor_id)
        .expect("doctor registered")
        .set_availability(slot, true);
}

pub fn is_open(engine: &TestEngine, doctor_id: u32, slot: DateTime<Utc>) -> bool {
    engine.doctor(doctor_id).expect("doctor registered").is_available(&slot)
}
