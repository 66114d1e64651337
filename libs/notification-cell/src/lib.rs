pub mod models;
pub mod services;
pub mod sink;

pub use models::*;
pub use services::*;
pub use sink::NotificationSink;
