use thiserror::Error;

use irah_export::error::ExportError;
use irah_ward::error::WardError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("patient initials must not be empty")]
    MissingInitials,

    #[error("ward error: {0}")]
    Ward(#[from] WardError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),
}
