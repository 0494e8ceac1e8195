//! irah-export
//!
//! Durable output boundaries of the scoring engine: the flat CSV, the
//! tera-rendered ward report, the DOCX report document, and the
//! institutional reference document. Column names and order are stable
//! contracts for downstream consumers.

pub mod csv;
pub mod docx;
pub mod error;
pub mod reference;
pub mod render;
pub mod styles;
