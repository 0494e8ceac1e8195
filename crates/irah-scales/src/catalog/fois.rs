use crate::error::ScaleError;

/// Form label for one FOIS level (1–7).
pub fn label(level: u8) -> Result<&'static str, ScaleError> {
    match level {
        1 => Ok("Nutrição alternativa (não oral)"),
        2 => Ok("Via alternativa predominante com ingestão oral mínima"),
        3 => Ok("Ingestão oral consistente + via alternativa"),
        4 => Ok("Ingestão oral de consistência única"),
        5 => Ok("Ingestão oral com preparação especial"),
        6 => Ok("Ingestão oral com restrição mínima"),
        7 => Ok("Ingestão oral plena (sem restrições)"),
        other => Err(ScaleError::UnknownFoisLevel(other)),
    }
}
