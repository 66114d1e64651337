use std::sync::Arc;

/// Outbound channel for patient notifications.
///
/// Delivery is fire-and-forget: callers never observe success or failure.
pub trait NotificationSink {
    fn send_email(&self, to: &str, subject: &str, body: &str);

    fn send_sms(&self, phone_number: &str, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        (**self).send_email(to, subject, body)
    }

    fn send_sms(&self, phone_number: &str, message: &str) {
        (**self).send_sms(phone_number, message)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Box<T> {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        (**self).send_email(to, subject, body)
    }

    fn send_sms(&self, phone_number: &str, message: &str) {
        (**self).send_sms(phone_number, message)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn send_email(&self, to: &str, subject: &str, body: &str) {
        (**self).send_email(to, subject, body)
    }

    fn send_sms(&self, phone_number: &str, message: &str) {
        (**self).send_sms(phone_number, message)
    }
}
