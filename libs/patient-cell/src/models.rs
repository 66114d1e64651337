use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::info;

use shared_models::PatientId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    medical_history: Vec<String>,
}

impl Patient {
    pub fn new(
        id: PatientId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            medical_history: Vec::new(),
        }
    }

    /// Appointments refer to patients by this id, so it is fixed at construction.
    pub fn id(&self) -> PatientId {
        self.id
    }

    /// Append an entry to the medical history. Entries are never edited or
    /// removed once recorded.
    pub fn add_to_medical_history(&mut self, entry: impl Into<String>) {
        self.medical_history.push(entry.into());
    }

    pub fn medical_history(&self) -> &[String] {
        &self.medical_history
    }

    pub fn show_medical_history(&self) {
        info!("Medical History for {}:", self.name);
        for entry in &self.medical_history {
            info!("{}", entry);
        }
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}, Phone: {}",
            self.id, self.name, self.email, self.phone_number
        )
    }
}
