use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use shared_models::{format_slot, TimeSlot};

/// Per-doctor record of which exact slots are open.
///
/// A slot that has never been set is treated as unavailable, so a doctor has
/// no bookable time until slots are explicitly opened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityLedger {
    slots: BTreeMap<TimeSlot, bool>,
}

impl AvailabilityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the flag for `slot`, overwriting any earlier value.
    pub fn set_availability(&mut self, slot: TimeSlot, is_available: bool) {
        debug!("Setting slot {} available={}", format_slot(&slot), is_available);
        self.slots.insert(slot, is_available);
    }

    pub fn is_available(&self, slot: &TimeSlot) -> bool {
        self.slots.get(slot).copied().unwrap_or(false)
    }

    /// Slots currently marked open, earliest first.
    pub fn open_slots(&self) -> Vec<TimeSlot> {
        self.slots
            .iter()
            .filter(|(_, open)| **open)
            .map(|(slot, _)| *slot)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
