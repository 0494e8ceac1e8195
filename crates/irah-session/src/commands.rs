//! Command functions invoked by the presentation layer. Each command
//! is one atomic logical operation: evaluate, then optionally mutate
//! the roster under the session lock.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use ts_rs::TS;

use irah_core::models::inputs::ScaleInputs;
use irah_core::models::patient::PatientRecord;
use irah_core::models::score::ScoreResult;
use irah_export::csv::ward_csv;
use irah_export::docx::generate_report_docx;
use irah_export::reference::load_or_placeholder;
use irah_export::render::render_default_report;
use irah_export::styles::ReportStyles;
use irah_scales::evaluate::evaluate;
use irah_ward::summary::UnitSummary;

use crate::audit::AuditEvent;
use crate::error::SessionError;
use crate::state::SessionState;

/// Outcome of a remove command. An empty bed is informational, not an
/// error: the roster is untouched either way.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(PatientRecord),
    BedAlreadyEmpty,
}

/// The current roster listing plus the derived unit summary.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct WardOverview {
    pub patients: Vec<PatientRecord>,
    pub summary: UnitSummary,
}

/// Score one patient without touching the roster.
pub fn evaluate_patient(inputs: &ScaleInputs) -> ScoreResult {
    evaluate(inputs)
}

/// Evaluate and place the patient at a bed, replacing any current
/// occupant. Initials are trimmed and upper-cased; empty initials are
/// rejected before the roster is touched.
pub async fn assign_bed(
    state: &SessionState,
    bed: u8,
    initials: &str,
    assessed_on: jiff::civil::Date,
    inputs: ScaleInputs,
) -> Result<PatientRecord, SessionError> {
    let initials = initials.trim().to_uppercase();
    if initials.is_empty() {
        return Err(SessionError::MissingInitials);
    }

    let score = evaluate(&inputs);
    let record = PatientRecord {
        bed,
        initials,
        assessed_on,
        inputs,
        score,
    };

    let replaced = {
        let mut roster = state.roster.lock().await;
        roster.upsert(record.clone())?
    };

    AuditEvent::new("assign_bed", Some(bed))
        .with_details(json!({
            "initials": record.initials,
            "tier": record.score.tier.label(),
            "replaced": replaced.map(|r| r.initials),
        }))
        .emit();

    Ok(record)
}

/// Free a bed, reporting whether anyone was there.
pub async fn remove_bed(state: &SessionState, bed: u8) -> RemoveOutcome {
    let removed = {
        let mut roster = state.roster.lock().await;
        roster.remove(bed)
    };

    match removed {
        Some(record) => {
            AuditEvent::new("remove_bed", Some(bed))
                .with_details(json!({ "initials": record.initials }))
                .emit();
            RemoveOutcome::Removed(record)
        }
        None => RemoveOutcome::BedAlreadyEmpty,
    }
}

/// Empty the ward. Returns how many records were discarded.
pub async fn clear_ward(state: &SessionState) -> usize {
    let discarded = {
        let mut roster = state.roster.lock().await;
        roster.clear()
    };

    AuditEvent::new("clear_ward", None)
        .with_details(json!({ "discarded": discarded }))
        .emit();

    discarded
}

/// Current listing plus summary, both computed under one lock hold so
/// they describe the same roster state.
pub async fn ward_overview(state: &SessionState) -> WardOverview {
    let roster = state.roster.lock().await;
    WardOverview {
        patients: roster.list().cloned().collect(),
        summary: UnitSummary::from_roster(&roster),
    }
}

/// Flat CSV of the current roster.
pub async fn export_csv(state: &SessionState) -> String {
    let roster = state.roster.lock().await;
    ward_csv(&roster)
}

/// Text rendition of the ward report.
pub async fn export_report_text(state: &SessionState) -> Result<String, SessionError> {
    let roster = state.roster.lock().await;
    Ok(render_default_report(&roster)?)
}

/// DOCX rendition of the ward report.
pub async fn export_report_docx(
    state: &SessionState,
    styles: &ReportStyles,
) -> Result<Vec<u8>, SessionError> {
    let roster = state.roster.lock().await;
    Ok(generate_report_docx(&roster, styles)?)
}

/// The institutional reference document, or its placeholder.
pub fn reference_document(path: &Path) -> String {
    load_or_placeholder(path)
}
