use serde::Serialize;
use tracing::info;

/// A structured audit event for roster mutations.
///
/// The roster keeps no history of its own (last write wins), so these
/// events are the only trace of who occupied a bed before an edit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: String,
    pub bed: Option<u8>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, bed: Option<u8>) -> Self {
        Self {
            action: action.into(),
            bed,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = %self.action,
            audit.bed = ?self.bed,
            audit.details = ?self.details,
            "audit event"
        );
    }
}
