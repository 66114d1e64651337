// libs/appointment-cell/src/models.rs
use std::fmt;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::{format_slot, AppointmentId, DoctorId, PatientId, TimeSlot};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    appointment_date: TimeSlot,
    status: AppointmentStatus,
}

impl Appointment {
    /// New appointments always start unconfirmed.
    pub fn new(
        id: AppointmentId,
        patient_id: PatientId,
        doctor_id: DoctorId,
        appointment_date: TimeSlot,
    ) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            appointment_date,
            status: AppointmentStatus::Pending,
        }
    }

    pub fn appointment_date(&self) -> TimeSlot {
        self.appointment_date
    }

    pub fn status(&self) -> &AppointmentStatus {
        &self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == AppointmentStatus::Confirmed
    }

    pub(crate) fn confirm(&mut self) {
        self.status = AppointmentStatus::Confirmed;
    }

    pub(crate) fn reschedule_to(&mut self, new_date: TimeSlot) {
        self.appointment_date = new_date;
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
        }
    }
}

// ==============================================================================
// OPERATION OUTCOMES
// ==============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleOutcome {
    Scheduled { appointment_id: AppointmentId },
    DoctorUnavailable { doctor_id: DoctorId, slot: TimeSlot },
}

impl ScheduleOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduleOutcome::Scheduled { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// The removed appointment, handed back to the caller.
    Cancelled(Appointment),
    NotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RescheduleOutcome {
    Rescheduled { previous: TimeSlot, current: TimeSlot },
    DoctorUnavailable { doctor_id: DoctorId, slot: TimeSlot },
    NotFound,
}

impl RescheduleOutcome {
    pub fn is_rescheduled(&self) -> bool {
        matches!(self, RescheduleOutcome::Rescheduled { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    Confirmed,
    AlreadyConfirmed,
    NotFound,
}

// ==============================================================================
// QUERY & DISPLAY MODELS
// ==============================================================================

/// Optional conjunctive filters. Empty name strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentSearchQuery {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub appointment_date: Option<NaiveDate>,
}

impl AppointmentSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    pub fn with_doctor_name(mut self, name: impl Into<String>) -> Self {
        self.doctor_name = Some(name.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.appointment_date = Some(date);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: AppointmentId,
    pub patient_name: String,
    pub doctor_name: String,
    pub appointment_date: TimeSlot,
    pub is_confirmed: bool,
}

impl fmt::Display for AppointmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Patient: {}, Doctor: {}, Date: {}, Confirmed: {}",
            self.id,
            self.patient_name,
            self.doctor_name,
            format_slot(&self.appointment_date),
            self.is_confirmed
        )
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

/// Faults that indicate a broken reference rather than an ordinary rejection.
/// Rejections such as an unavailable doctor are reported through the outcome
/// enums above.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Patient {0} is not registered with the scheduler")]
    PatientNotFound(PatientId),

    #[error("Doctor {0} is not registered with the scheduler")]
    DoctorNotFound(DoctorId),

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStatusTransition(AppointmentStatus),
}
