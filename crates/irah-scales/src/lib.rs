//! irah-scales
//!
//! Scale reference catalogs and the IRAH–Premier scoring engine.
//! Pure data and functions, no I/O and no state.
//!
//! The catalogs (Fugulin domains, Charlson weights, FOIS labels) are
//! fixed clinical reference constants; the normalizers map each raw
//! scale value to a 0–100 sub-score; `evaluate` combines them into the
//! composite score and risk tier.

pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod normalize;

pub use evaluate::evaluate;
