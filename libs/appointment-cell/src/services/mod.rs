pub mod lifecycle;
pub mod scheduling;
pub mod search;

pub use lifecycle::AppointmentLifecycleService;
pub use scheduling::SchedulingEngine;
pub use search::{AppointmentFilter, AppointmentView};
