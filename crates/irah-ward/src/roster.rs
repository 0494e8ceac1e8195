use std::collections::BTreeMap;

use irah_core::models::patient::{PatientRecord, WARD_BEDS};

use crate::error::WardError;

/// The unit's bed roster: at most one record per bed, keyed by bed
/// number 1–20. Iteration order is ascending bed number, so listings
/// and exports are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    beds: BTreeMap<u8, PatientRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a record at its bed, replacing any current occupant
    /// (last write wins, no audit trail). Returns the replaced record,
    /// if any.
    pub fn upsert(&mut self, record: PatientRecord) -> Result<Option<PatientRecord>, WardError> {
        if record.bed < 1 || record.bed > WARD_BEDS {
            return Err(WardError::BedOutOfRange(record.bed));
        }
        Ok(self.beds.insert(record.bed, record))
    }

    /// Free a bed. `None` means the bed was already empty; the roster
    /// is unchanged in that case.
    pub fn remove(&mut self, bed: u8) -> Option<PatientRecord> {
        self.beds.remove(&bed)
    }

    /// Empty the roster unconditionally. Returns how many records were
    /// discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.beds.len();
        self.beds.clear();
        discarded
    }

    pub fn get(&self, bed: u8) -> Option<&PatientRecord> {
        self.beds.get(&bed)
    }

    /// Records in ascending bed order.
    pub fn list(&self) -> impl Iterator<Item = &PatientRecord> {
        self.beds.values()
    }

    pub fn len(&self) -> usize {
        self.beds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beds.is_empty()
    }
}
