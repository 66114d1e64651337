use tracing::{debug, info};

use shared_config::AppConfig;

use crate::sink::NotificationSink;

/// Simulated delivery: every message is written to the log instead of being
/// sent anywhere.
#[derive(Debug, Clone)]
pub struct ConsoleNotificationService {
    email_enabled: bool,
    sms_enabled: bool,
}

impl ConsoleNotificationService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            email_enabled: config.email_notifications_enabled,
            sms_enabled: config.sms_notifications_enabled,
        }
    }
}

impl Default for ConsoleNotificationService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl NotificationSink for ConsoleNotificationService {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        if !self.email_enabled {
            debug!(recipient = %to, "Email channel disabled, dropping message");
            return;
        }
        info!(
            channel = "email",
            "Email sent to {} with subject: {} and body: {}",
            to, subject, body
        );
    }

    fn send_sms(&self, phone_number: &str, message: &str) {
        if !self.sms_enabled {
            debug!(recipient = %phone_number, "SMS channel disabled, dropping message");
            return;
        }
        info!(channel = "sms", "SMS sent to {} with message: {}", phone_number, message);
    }
}
