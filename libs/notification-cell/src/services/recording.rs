use std::sync::{Mutex, MutexGuard};

use crate::models::{Notification, NotificationChannel};
use crate::sink::NotificationSink;

/// Keeps every message in memory so an embedding program can inspect what
/// would have been delivered.
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    pub fn sent_to(&self, recipient: &str) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter(|n| n.recipient == recipient)
            .cloned()
            .collect()
    }

    pub fn count(&self, channel: NotificationChannel) -> usize {
        self.lock().iter().filter(|n| n.channel == channel).count()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A panic while holding the lock cannot leave a half-written Vec.
        self.sent.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        self.lock().push(Notification::email(to, subject, body));
    }

    fn send_sms(&self, phone_number: &str, message: &str) {
        self.lock().push(Notification::sms(phone_number, message));
    }
}
