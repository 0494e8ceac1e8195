//! The institutional reference document shown alongside the
//! calculator. Free text, rendered verbatim by the presentation layer;
//! a missing file degrades to a placeholder and never stops scoring.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::ExportError;

pub const REFERENCE_PLACEHOLDER: &str =
    "Documento institucional não disponível. Consulte a coordenação da unidade.";

/// Read the reference document from disk.
pub fn load(path: &Path) -> Result<String, ExportError> {
    fs::read_to_string(path).map_err(|source| ExportError::MissingReference {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the reference document, falling back to the placeholder text
/// when unavailable.
pub fn load_or_placeholder(path: &Path) -> String {
    match load(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "reference document unavailable");
            REFERENCE_PLACEHOLDER.to_string()
        }
    }
}
