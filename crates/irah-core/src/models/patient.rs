use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::inputs::ScaleInputs;
use super::score::ScoreResult;

/// Number of beds in the unit.
pub const WARD_BEDS: u8 = 20;

/// One occupied bed: identification, the raw inputs snapshot, and the
/// score derived from them. The bed number is the only identity; a new
/// record for the same bed replaces this one outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    /// Bed number, 1–20.
    pub bed: u8,
    /// Patient initials (e.g. "JAS").
    pub initials: String,
    pub assessed_on: jiff::civil::Date,
    pub inputs: ScaleInputs,
    pub score: ScoreResult,
}
