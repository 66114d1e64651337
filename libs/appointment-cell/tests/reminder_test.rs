mod common;

use appointment_cell::models::Appointment;
use notification_cell::NotificationChannel;
use shared_config::AppConfig;
use common::*;

#[test]
fn test_reminders_cover_window_and_past() {
    let (mut engine, sink) = seeded_engine();
    let now = hours(0);
    for slot in [hours(-3), hours(24), hours(25)] {
        open_slot(&mut engine, SMITH, slot);
    }
    engine.schedule_appointment(Appointment::new(1, JOHN, SMITH, hours(-3))).unwrap();
    engine.schedule_appointment(Appointment::new(2, JANE, SMITH, hours(24))).unwrap();
    engine.schedule_appointment(Appointment::new(3, JOHN, SMITH, hours(25))).unwrap();
    sink.clear();

    let reminded = engine.send_reminders_at(now).unwrap();

    assert_eq!(reminded, 2);
    assert_eq!(sink.count(NotificationChannel::Email), 2);
    assert_eq!(sink.count(NotificationChannel::Sms), 2);
    assert_eq!(sink.sent_to("jane@example.com").len(), 1);
    let john_mail = sink.sent_to("john@example.com");
    assert_eq!(john_mail.len(), 1);
    assert_eq!(john_mail[0].subject.as_deref(), Some("Appointment Reminder"));
}

#[test]
fn test_reminders_are_repeatable_and_stateless() {
    let (mut engine, sink) = seeded_engine();
    open_slot(&mut engine, ADAMS, hours(1));
    engine.schedule_appointment(Appointment::new(1, JANE, ADAMS, hours(1))).unwrap();
    let before = engine.appointments().to_vec();
    sink.clear();

    assert_eq!(engine.send_reminders_at(hours(0)).unwrap(), 1);
    assert_eq!(engine.send_reminders_at(hours(0)).unwrap(), 1);

    assert_eq!(sink.len(), 4);
    assert_eq!(engine.appointments(), before.as_slice());
    assert!(!is_open(&engine, ADAMS, hours(1)));
}

#[test]
fn test_reminder_window_from_config() {
    let config = AppConfig {
        reminder_window_hours: 2,
        ..AppConfig::default()
    };
    let (mut engine, sink) = seeded_engine_with(&config);
    open_slot(&mut engine, SMITH, hours(3));
    engine.schedule_appointment(Appointment::new(1, JOHN, SMITH, hours(3))).unwrap();
    sink.clear();

    assert_eq!(engine.send_reminders_at(hours(0)).unwrap(), 0);
    assert_eq!(engine.send_reminders_at(hours(1)).unwrap(), 1);
}

#[test]
fn test_no_appointments_no_reminders() {
    let (engine, sink) = seeded_engine();
    assert_eq!(engine.send_reminders().unwrap(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_oversized_reminder_window_covers_everything() {
    let config = AppConfig {
        reminder_window_hours: i64::MAX,
        ..AppConfig::default()
    };
    let (mut engine, sink) = seeded_engine_with(&config);
    open_slot(&mut engine, SMITH, hours(24 * 365 * 50));
    engine
        .schedule_appointment(Appointment::new(1, JOHN, SMITH, hours(24 * 365 * 50)))
        .unwrap();
    sink.clear();

    assert_eq!(engine.send_reminders_at(hours(0)).unwrap(), 1);
    assert_eq!(sink.len(), 2);
}
