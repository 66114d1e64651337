pub mod console;
pub mod recording;

pub use console::ConsoleNotificationService;
pub use recording::RecordingNotificationSink;
