pub mod slot;

pub use slot::*;

/// Caller-assigned identifiers. Uniqueness is not enforced anywhere.
pub type PatientId = u32;
pub type DoctorId = u32;
pub type AppointmentId = u32;
