// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, info, warn};

use shared_config::AppConfig;
use shared_models::{starts_within, TimeSlot};

use crate::models::{AppointmentError, AppointmentStatus};

pub struct AppointmentLifecycleService {
    reminder_window_hours: i64,
}

impl AppointmentLifecycleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            reminder_window_hours: config.reminder_window_hours,
        }
    }

    /// Validate that a status transition is allowed
    pub fn validate_status_transition(
        &self,
        current_status: &AppointmentStatus,
        new_status: &AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition from {:?} to {:?}", current_status, new_status);

        let valid_transitions = self.get_valid_transitions(current_status);

        if !valid_transitions.contains(new_status) {
            warn!("Invalid status transition attempted: {:?} -> {:?}", current_status, new_status);
            return Err(AppointmentError::InvalidStatusTransition(*current_status));
        }

        info!("Status transition validated: {:?} -> {:?}", current_status, new_status);
        Ok(())
    }

    /// Get all valid next statuses for a given current status.
    /// Cancellation is not a status: a cancelled appointment is dropped.
    pub fn get_valid_transitions(
        &self,
        current_status: &AppointmentStatus,
    ) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Pending => vec![AppointmentStatus::Confirmed],
            AppointmentStatus::Confirmed => vec![],
        }
    }

    /// Whether an appointment at `appointment_date` is due a reminder at
    /// `current_time`. The window is inclusive and has no lower bound, so
    /// appointments already in the past are always due.
    pub fn is_reminder_due(&self, appointment_date: &TimeSlot, current_time: &TimeSlot) -> bool {
        starts_within(appointment_date, current_time, self.reminder_window_hours)
    }

    pub fn reminder_window_hours(&self) -> i64 {
        self.reminder_window_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    fn service() -> AppointmentLifecycleService {
        AppointmentLifecycleService::new(&AppConfig::default())
    }

    #[test]
    fn test_pending_can_be_confirmed() {
        assert!(service()
            .validate_status_transition(&AppointmentStatus::Pending, &AppointmentStatus::Confirmed)
            .is_ok());
    }

    #[test]
    fn test_confirmed_is_final() {
        assert!(service().get_valid_transitions(&AppointmentStatus::Confirmed).is_empty());
        assert_matches!(
            service().validate_status_transition(
                &AppointmentStatus::Confirmed,
                &AppointmentStatus::Pending
            ),
            Err(AppointmentError::InvalidStatusTransition(AppointmentStatus::Confirmed))
        );
    }

    #[test]
    fn test_confirmed_cannot_be_confirmed_again() {
        assert_matches!(
            service().validate_status_transition(
                &AppointmentStatus::Confirmed,
                &AppointmentStatus::Confirmed
            ),
            Err(AppointmentError::InvalidStatusTransition(AppointmentStatus::Confirmed))
        );
    }

    #[test]
    fn test_reminder_window() {
        let service = service();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();

        assert!(service.is_reminder_due(&(now + Duration::hours(24)), &now));
        assert!(service.is_reminder_due(&(now + Duration::minutes(5)), &now));
        assert!(service.is_reminder_due(&(now - Duration::hours(2)), &now));
        assert!(!service.is_reminder_due(&(now + Duration::hours(25)), &now));
    }

    #[test]
    fn test_configured_window() {
        let config = AppConfig {
            reminder_window_hours: 2,
            ..AppConfig::default()
        };
        let service = AppointmentLifecycleService::new(&config);
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();

        assert_eq!(service.reminder_window_hours(), 2);
        assert!(!service.is_reminder_due(&(now + Duration::hours(3)), &now));
    }
}
