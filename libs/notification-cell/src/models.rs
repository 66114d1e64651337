use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationChannel::Email => write!(f, "email"),
            NotificationChannel::Sms => write!(f, "sms"),
        }
    }
}

/// A single delivered message. SMS messages carry no subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub channel: NotificationChannel,
    pub recipient: String,
    pub subject: Option<String>,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    pub fn email(to: &str, subject: &str, body: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: NotificationChannel::Email,
            recipient: to.to_string(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
            sent_at: Utc::now(),
        }
    }

    pub fn sms(phone_number: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel: NotificationChannel::Sms,
            recipient: phone_number.to_string(),
            subject: None,
            body: message.to_string(),
            sent_at: Utc::now(),
        }
    }
}
