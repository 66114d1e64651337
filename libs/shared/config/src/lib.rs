use std::env;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_REMINDER_WINDOW_HOURS: i64 = 24;
/// Upper bound accepted from the environment: one hundred years.
pub const MAX_REMINDER_WINDOW_HOURS: i64 = 24 * 365 * 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub reminder_window_hours: i64,
    pub email_notifications_enabled: bool,
    pub sms_notifications_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reminder_window_hours: DEFAULT_REMINDER_WINDOW_HOURS,
            email_notifications_enabled: true,
            sms_notifications_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            reminder_window_hours: env::var("REMINDER_WINDOW_HOURS")
                .ok()
                .and_then(|raw| parse_hours(&raw))
                .unwrap_or_else(|| {
                    warn!("REMINDER_WINDOW_HOURS not set or invalid, using default");
                    DEFAULT_REMINDER_WINDOW_HOURS
                }),
            email_notifications_enabled: env::var("EMAIL_NOTIFICATIONS_ENABLED")
                .ok()
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or_else(|| {
                    warn!("EMAIL_NOTIFICATIONS_ENABLED not set or invalid, using default");
                    true
                }),
            sms_notifications_enabled: env::var("SMS_NOTIFICATIONS_ENABLED")
                .ok()
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or_else(|| {
                    warn!("SMS_NOTIFICATIONS_ENABLED not set or invalid, using default");
                    true
                }),
        };

        if !config.has_notification_channel() {
            warn!("All notification channels disabled - patients will not be notified");
        }

        config
    }

    pub fn has_notification_channel(&self) -> bool {
        self.email_notifications_enabled || self.sms_notifications_enabled
    }
}

fn parse_hours(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|hours| (0..=MAX_REMINDER_WINDOW_HOURS).contains(hours))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.reminder_window_hours, 24);
        assert!(config.email_notifications_enabled);
        assert!(config.sms_notifications_enabled);
        assert!(config.has_notification_channel());
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("48"), Some(48));
        assert_eq!(parse_hours(" 12 "), Some(12));
        assert_eq!(parse_hours("-1"), None);
        assert_eq!(parse_hours("876000"), Some(MAX_REMINDER_WINDOW_HOURS));
        assert_eq!(parse_hours("876001"), None);
        assert_eq!(parse_hours(&i64::MAX.to_string()), None);
        assert_eq!(parse_hours("soon"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_no_channel() {
        let config = AppConfig {
            email_notifications_enabled: false,
            sms_notifications_enabled: false,
            ..AppConfig::default()
        };
        assert!(!config.has_notification_channel());
    }
}
