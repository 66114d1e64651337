use std::fmt;
use serde::{Deserialize, Serialize};

use shared_models::{DoctorId, TimeSlot};

use crate::services::AvailabilityLedger;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    id: DoctorId,
    pub name: String,
    pub specialty: String,
    availability: AvailabilityLedger,
}

impl Doctor {
    pub fn new(id: DoctorId, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
            availability: AvailabilityLedger::new(),
        }
    }

    pub fn id(&self) -> DoctorId {
        self.id
    }

    pub fn set_availability(&mut self, slot: TimeSlot, is_available: bool) {
        self.availability.set_availability(slot, is_available);
    }

    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.availability.is_available(slot)
    }

    pub fn availability(&self) -> &AvailabilityLedger {
        &self.availability
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Specialty: {}", self.id, self.name, self.specialty)
    }
}
