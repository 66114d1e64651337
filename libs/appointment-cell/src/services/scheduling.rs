// libs/appointment-cell/src/services/scheduling.rs
use chrono::Utc;
use tracing::{debug, info, warn};

use doctor_cell::Doctor;
use notification_cell::{ConsoleNotificationService, NotificationSink};
use patient_cell::Patient;
use shared_config::AppConfig;
use shared_models::{format_slot, AppointmentId, DoctorId, PatientId, TimeSlot};

use crate::models::{
    Appointment, AppointmentError, AppointmentSearchQuery, AppointmentStatus, AppointmentSummary,
    CancelOutcome, ConfirmOutcome, RescheduleOutcome, ScheduleOutcome,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::search::{matches_all, AppointmentFilter, AppointmentView};

/// Owns every patient, doctor and appointment and keeps each doctor's
/// availability consistent with the booked appointments.
///
/// All lookups are linear scans in insertion order; when identifiers collide
/// the first registered entry wins. The engine is a plain value with no
/// internal locking.
pub struct SchedulingEngine<N: NotificationSink = ConsoleNotificationService> {
    appointments: Vec<Appointment>,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    notifier: N,
    lifecycle: AppointmentLifecycleService,
}

impl SchedulingEngine<ConsoleNotificationService> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_notifier(config, ConsoleNotificationService::new(config))
    }
}

impl<N: NotificationSink> SchedulingEngine<N> {
    pub fn with_notifier(config: &AppConfig, notifier: N) -> Self {
        Self {
            appointments: Vec::new(),
            patients: Vec::new(),
            doctors: Vec::new(),
            notifier,
            lifecycle: AppointmentLifecycleService::new(config),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ==========================================================================
    // PATIENTS & DOCTORS
    // ==========================================================================

    pub fn add_patient(&mut self, patient: Patient) {
        info!(patient_id = patient.id(), "Patient {} added.", patient.name);
        self.patients.push(patient);
    }

    pub fn add_doctor(&mut self, doctor: Doctor) {
        info!(doctor_id = doctor.id(), "Doctor {} added.", doctor.name);
        self.doctors.push(doctor);
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id() == id)
    }

    /// Mutable access, mainly for appending medical history. The id itself is
    /// read-only so appointments keep resolving to the same patient.
    pub fn patient_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id() == id)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id() == id)
    }

    /// Mutable access, mainly for opening and closing availability slots. The
    /// id itself is read-only.
    pub fn doctor_mut(&mut self, id: DoctorId) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|d| d.id() == id)
    }

    pub fn list_patients(&self) -> &[Patient] {
        info!("Patients List:");
        for patient in &self.patients {
            info!("{}", patient);
        }
        &self.patients
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        info!("Doctors List:");
        for doctor in &self.doctors {
            info!("{}", doctor);
        }
        &self.doctors
    }

    // ==========================================================================
    // APPOINTMENTS
    // ==========================================================================

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Book `appointment` if its doctor has the exact slot open. On success the
    /// slot is closed and the patient is notified; otherwise nothing changes.
    pub fn schedule_appointment(
        &mut self,
        appointment: Appointment,
    ) -> Result<ScheduleOutcome, AppointmentError> {
        let slot = appointment.appointment_date();
        let patient_idx = self.patient_index(appointment.patient_id)?;
        let doctor_idx = self.doctor_index(appointment.doctor_id)?;

        if !self.doctors[doctor_idx].is_available(&slot) {
            warn!(
                appointment_id = appointment.id,
                "Doctor {} is not available on {}",
                self.doctors[doctor_idx].name,
                format_slot(&slot)
            );
            return Ok(ScheduleOutcome::DoctorUnavailable {
                doctor_id: appointment.doctor_id,
                slot,
            });
        }

        let appointment_id = appointment.id;
        self.appointments.push(appointment);
        self.doctors[doctor_idx].set_availability(slot, false);

        let patient = &self.patients[patient_idx];
        let doctor = &self.doctors[doctor_idx];
        info!(
            appointment_id,
            "Appointment {} scheduled for {} with {} on {}",
            appointment_id,
            patient.name,
            doctor.name,
            format_slot(&slot)
        );

        let message = format!(
            "Your appointment with {} is confirmed for {}",
            doctor.name,
            format_slot(&slot)
        );
        self.notifier.send_email(&patient.email, "Appointment Confirmation", &message);
        self.notifier.send_sms(&patient.phone_number, &message);

        Ok(ScheduleOutcome::Scheduled { appointment_id })
    }

    /// Move an appointment from pending to confirmed. Scheduling never does
    /// this on its own.
    pub fn confirm_appointment(
        &mut self,
        id: AppointmentId,
    ) -> Result<ConfirmOutcome, AppointmentError> {
        let Some(idx) = self.appointment_index(id) else {
            warn!("Appointment {} not found.", id);
            return Ok(ConfirmOutcome::NotFound);
        };

        let patient_idx = self.patient_index(self.appointments[idx].patient_id)?;
        let doctor_idx = self.doctor_index(self.appointments[idx].doctor_id)?;

        let current = *self.appointments[idx].status();
        match self
            .lifecycle
            .validate_status_transition(&current, &AppointmentStatus::Confirmed)
        {
            Ok(()) => {}
            Err(AppointmentError::InvalidStatusTransition(AppointmentStatus::Confirmed)) => {
                debug!(appointment_id = id, "Appointment already confirmed");
                return Ok(ConfirmOutcome::AlreadyConfirmed);
            }
            Err(e) => return Err(e),
        }

        let appointment = &mut self.appointments[idx];
        appointment.confirm();
        info!(
            appointment_id = id,
            "Appointment {} confirmed for {} with {} on {}",
            id,
            self.patients[patient_idx].name,
            self.doctors[doctor_idx].name,
            format_slot(&appointment.appointment_date())
        );

        Ok(ConfirmOutcome::Confirmed)
    }

    /// Remove the first appointment with `id` and reopen its slot. The slot is
    /// reopened unconditionally, even if another appointment shares it.
    pub fn cancel_appointment(
        &mut self,
        id: AppointmentId,
    ) -> Result<CancelOutcome, AppointmentError> {
        let Some(idx) = self.appointment_index(id) else {
            warn!("Appointment {} not found.", id);
            return Ok(CancelOutcome::NotFound);
        };

        let patient_idx = self.patient_index(self.appointments[idx].patient_id)?;
        let doctor_idx = self.doctor_index(self.appointments[idx].doctor_id)?;

        let appointment = self.appointments.remove(idx);
        let slot = appointment.appointment_date();
        self.doctors[doctor_idx].set_availability(slot, true);

        let patient = &self.patients[patient_idx];
        let doctor = &self.doctors[doctor_idx];
        info!(
            appointment_id = id,
            "Appointment {} for {} with {} has been canceled.",
            id,
            patient.name,
            doctor.name
        );

        let message = format!(
            "Your appointment with {} on {} has been canceled.",
            doctor.name,
            format_slot(&slot)
        );
        self.notifier.send_email(&patient.email, "Appointment Cancellation", &message);
        self.notifier.send_sms(&patient.phone_number, &message);

        Ok(CancelOutcome::Cancelled(appointment))
    }

    /// Move an appointment to `new_slot` if the same doctor has it open. A
    /// rejected move leaves the appointment and both slots untouched.
    pub fn reschedule_appointment(
        &mut self,
        id: AppointmentId,
        new_slot: TimeSlot,
    ) -> Result<RescheduleOutcome, AppointmentError> {
        let Some(idx) = self.appointment_index(id) else {
            warn!("Appointment {} not found.", id);
            return Ok(RescheduleOutcome::NotFound);
        };

        let patient_idx = self.patient_index(self.appointments[idx].patient_id)?;
        let doctor_idx = self.doctor_index(self.appointments[idx].doctor_id)?;

        if !self.doctors[doctor_idx].is_available(&new_slot) {
            warn!(
                appointment_id = id,
                "Doctor {} is not available on {}",
                self.doctors[doctor_idx].name,
                format_slot(&new_slot)
            );
            return Ok(RescheduleOutcome::DoctorUnavailable {
                doctor_id: self.doctors[doctor_idx].id(),
                slot: new_slot,
            });
        }

        // Free before booking so that old == new still ends up booked.
        let previous = self.appointments[idx].appointment_date();
        self.doctors[doctor_idx].set_availability(previous, true);
        self.appointments[idx].reschedule_to(new_slot);
        self.doctors[doctor_idx].set_availability(new_slot, false);

        let patient = &self.patients[patient_idx];
        let doctor = &self.doctors[doctor_idx];
        info!(
            appointment_id = id,
            "Appointment {} rescheduled to {} for {} with {}",
            id,
            format_slot(&new_slot),
            patient.name,
            doctor.name
        );

        let message = format!(
            "Your appointment with {} has been rescheduled to {}",
            doctor.name,
            format_slot(&new_slot)
        );
        self.notifier.send_email(&patient.email, "Appointment Rescheduled", &message);
        self.notifier.send_sms(&patient.phone_number, &message);

        Ok(RescheduleOutcome::Rescheduled {
            previous,
            current: new_slot,
        })
    }

    /// Remind every patient whose appointment is due within the configured
    /// window of the current time. Returns how many appointments were reminded.
    pub fn send_reminders(&self) -> Result<usize, AppointmentError> {
        self.send_reminders_at(Utc::now())
    }

    /// Same as [`send_reminders`](Self::send_reminders) against a fixed
    /// reference time. Past appointments are reminded too.
    pub fn send_reminders_at(&self, now: TimeSlot) -> Result<usize, AppointmentError> {
        let due: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| self.lifecycle.is_reminder_due(&a.appointment_date(), &now))
            .collect();

        // Resolve every reference before sending anything.
        let mut targets = Vec::with_capacity(due.len());
        for appointment in due {
            let patient = &self.patients[self.patient_index(appointment.patient_id)?];
            let doctor = &self.doctors[self.doctor_index(appointment.doctor_id)?];
            targets.push((appointment, patient, doctor));
        }

        for (appointment, patient, doctor) in &targets {
            let slot = format_slot(&appointment.appointment_date());
            info!(
                appointment_id = appointment.id,
                "Reminder: Appointment {} is scheduled for {} with {} on {}",
                appointment.id,
                patient.name,
                doctor.name,
                slot
            );

            self.notifier.send_email(
                &patient.email,
                "Appointment Reminder",
                &format!(
                    "This is a reminder for your appointment with {} on {}",
                    doctor.name, slot
                ),
            );
            self.notifier.send_sms(
                &patient.phone_number,
                &format!("Reminder: Appointment with {} on {}", doctor.name, slot),
            );
        }

        debug!("Sent {} reminders", targets.len());
        Ok(targets.len())
    }

    pub fn list_appointments(&self) -> Vec<AppointmentSummary> {
        info!("Current Appointments:");
        let summaries: Vec<AppointmentSummary> = self
            .appointments
            .iter()
            .map(|a| self.summarize(&self.view(a)))
            .collect();

        for summary in &summaries {
            info!("{}", summary);
        }
        summaries
    }

    /// Appointments matching every provided filter, in booking order. No
    /// filters matches everything.
    pub fn search_appointments(&self, query: &AppointmentSearchQuery) -> Vec<&Appointment> {
        let filters = AppointmentFilter::from_query(query);
        debug!("Searching appointments with {} filters", filters.len());

        let results: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| matches_all(&filters, &self.view(a)))
            .collect();

        if results.is_empty() {
            info!("No appointments found matching the criteria.");
        } else {
            info!("Search Results:");
            for appointment in &results {
                info!("{}", self.summarize(&self.view(appointment)));
            }
        }

        results
    }

    // ==========================================================================
    // HELPERS
    // ==========================================================================

    fn appointment_index(&self, id: AppointmentId) -> Option<usize> {
        self.appointments.iter().position(|a| a.id == id)
    }

    fn patient_index(&self, id: PatientId) -> Result<usize, AppointmentError> {
        self.patients
            .iter()
            .position(|p| p.id() == id)
            .ok_or(AppointmentError::PatientNotFound(id))
    }

    fn doctor_index(&self, id: DoctorId) -> Result<usize, AppointmentError> {
        self.doctors
            .iter()
            .position(|d| d.id() == id)
            .ok_or(AppointmentError::DoctorNotFound(id))
    }

    fn view<'a>(&'a self, appointment: &'a Appointment) -> AppointmentView<'a> {
        AppointmentView {
            appointment,
            patient: self.patient(appointment.patient_id),
            doctor: self.doctor(appointment.doctor_id),
        }
    }

    fn summarize(&self, view: &AppointmentView<'_>) -> AppointmentSummary {
        AppointmentSummary {
            id: view.appointment.id,
            patient_name: view.patient.map(|p| p.name.clone()).unwrap_or_default(),
            doctor_name: view.doctor.map(|d| d.name.clone()).unwrap_or_default(),
            appointment_date: view.appointment.appointment_date(),
            is_confirmed: view.appointment.is_confirmed(),
        }
    }
}
