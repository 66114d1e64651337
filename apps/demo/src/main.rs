use anyhow::{bail, Result};
use chrono::{Duration, Utc};
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::models::Appointment;
use appointment_cell::SchedulingEngine;
use auth_cell::{User, UserRole};
use doctor_cell::Doctor;
use patient_cell::Patient;
use shared_config::AppConfig;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic scheduler demo");

    let config = AppConfig::from_env();
    let mut manager = SchedulingEngine::new(&config);

    let admin_user = User::new("admin", "adminpass", UserRole::Admin)?;
    let doctor_user = User::new("drsmith", "docpass", UserRole::Doctor)?;
    let patient_user = User::new("john", "patientpass", UserRole::Patient)?;

    if !admin_user.authenticate("admin", "adminpass") {
        bail!("admin authentication failed");
    }
    admin_user.access_control();

    let now = Utc::now();
    let in_24h = now + Duration::hours(24);
    let in_48h = now + Duration::hours(48);
    let in_72h = now + Duration::hours(72);

    manager.add_patient(Patient::new(1, "John Doe", "john@example.com", "1234567890"));
    manager.add_patient(Patient::new(2, "Jane Doe", "jane@example.com", "0987654321"));

    let mut smith = Doctor::new(1, "Dr. Smith", "Cardiology");
    let mut adams = Doctor::new(2, "Dr. Adams", "Dermatology");
    smith.set_availability(in_48h, true);
    smith.set_availability(in_72h, true);
    adams.set_availability(in_24h, true);
    manager.add_doctor(smith);
    manager.add_doctor(adams);

    manager.list_patients();
    manager.list_doctors();

    manager.schedule_appointment(Appointment::new(1, 1, 1, in_48h))?;
    manager.schedule_appointment(Appointment::new(2, 2, 2, in_24h))?;

    if let Some(john) = manager.patient_mut(1) {
        john.add_to_medical_history(format!("Check-up on {}", in_48h.format("%Y-%m-%d %H:%M")));
        john.show_medical_history();
    }

    manager.list_appointments();
    let reminded = manager.send_reminders()?;
    info!("{} reminder(s) sent", reminded);

    manager.reschedule_appointment(1, in_72h)?;
    manager.list_appointments();

    manager.cancel_appointment(2)?;
    manager.list_appointments();

    if doctor_user.authenticate("drsmith", "docpass") {
        doctor_user.access_control();
    }

    if patient_user.authenticate("john", "patientpass") {
        patient_user.access_control();
    }

    Ok(())
}
