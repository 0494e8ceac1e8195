//! Static clinical reference data. Never mutated at runtime.

pub mod charlson;
pub mod fois;
pub mod fugulin;
