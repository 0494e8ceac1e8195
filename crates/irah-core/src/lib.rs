//! irah-core
//!
//! Pure domain types for the IRAH–Premier scoring engine.
//! No I/O and no async: this is the shared vocabulary of the system.

pub mod models;
