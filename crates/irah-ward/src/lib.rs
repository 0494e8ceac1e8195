//! irah-ward
//!
//! The fixed-capacity bed roster and the derived unit summary.
//! Process-local state, no persistence: the hosting session owns the
//! roster's lifecycle and passes it by reference to every operation.

pub mod error;
pub mod roster;
pub mod summary;
