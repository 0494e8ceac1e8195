use thiserror::Error;

use irah_core::models::patient::WARD_BEDS;

#[derive(Debug, Error)]
pub enum WardError {
    /// Bed numbers are structural keys, not clinical values: out of
    /// range is rejected outright instead of clamped.
    #[error("bed number {0} is outside the ward range 1-{WARD_BEDS}")]
    BedOutOfRange(u8),
}
