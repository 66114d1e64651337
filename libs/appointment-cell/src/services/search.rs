use chrono::NaiveDate;

use doctor_cell::Doctor;
use patient_cell::Patient;
use shared_models::same_calendar_date;

use crate::models::{Appointment, AppointmentSearchQuery};

/// An appointment together with the entities it refers to. Either reference
/// may be missing if the caller re-keyed or never registered the entity.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentView<'a> {
    pub appointment: &'a Appointment,
    pub patient: Option<&'a Patient>,
    pub doctor: Option<&'a Doctor>,
}

/// One independent predicate over an appointment. A search applies every
/// filter and keeps appointments that satisfy all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentFilter {
    PatientName(String),
    DoctorName(String),
    Date(NaiveDate),
}

impl AppointmentFilter {
    pub fn from_query(query: &AppointmentSearchQuery) -> Vec<Self> {
        let mut filters = Vec::new();

        if let Some(name) = query.patient_name.as_deref().filter(|n| !n.is_empty()) {
            filters.push(AppointmentFilter::PatientName(name.to_string()));
        }

        if let Some(name) = query.doctor_name.as_deref().filter(|n| !n.is_empty()) {
            filters.push(AppointmentFilter::DoctorName(name.to_string()));
        }

        if let Some(date) = query.appointment_date {
            filters.push(AppointmentFilter::Date(date));
        }

        filters
    }

    pub fn matches(&self, view: &AppointmentView<'_>) -> bool {
        match self {
            AppointmentFilter::PatientName(name) => view
                .patient
                .map_or(false, |patient| names_equal(&patient.name, name)),
            AppointmentFilter::DoctorName(name) => view
                .doctor
                .map_or(false, |doctor| names_equal(&doctor.name, name)),
            AppointmentFilter::Date(date) => {
                same_calendar_date(&view.appointment.appointment_date(), *date)
            }
        }
    }
}

pub fn matches_all(filters: &[AppointmentFilter], view: &AppointmentView<'_>) -> bool {
    filters.iter().all(|filter| filter.matches(view))
}

// Exact match, case-insensitive. Substrings do not match.
fn names_equal(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
