use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown Fugulin domain: {0}")]
    UnknownDomain(String),

    #[error("Fugulin level {0} is outside the 1-4 ordinal range")]
    InvalidLevel(u8),

    #[error("FOIS level {0} is outside the 1-7 range")]
    UnknownFoisLevel(u8),
}
