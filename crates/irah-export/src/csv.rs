//! Flat CSV export, one row per occupied bed. The column set and order
//! are a stable contract; nested detail structures are serialized as
//! opaque quoted text.

use irah_core::models::patient::PatientRecord;
use irah_scales::catalog::{charlson, fugulin};
use irah_ward::roster::Roster;

pub const CSV_COLUMNS: [&str; 16] = [
    "Leito",
    "Iniciais",
    "IRAH_Premier",
    "Risco",
    "Gatilho_Alto",
    "Fugulin_total",
    "Fugulin_classificacao",
    "Fugulin_detalhes",
    "Charlson_total",
    "Charlson_base",
    "Charlson_idade_pts",
    "Charlson_detalhes",
    "MRC",
    "ASG",
    "FOIS",
    "Polifarmacia",
];

/// Quote a field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// "domain=level" pairs for every Fugulin domain of the record's model.
fn fugulin_details(record: &PatientRecord) -> String {
    fugulin::domains(record.inputs.fugulin.model)
        .iter()
        .enumerate()
        .map(|(i, domain)| format!("{}={}", domain.name, record.inputs.fugulin.level(i)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Selected comorbidity labels, in catalog order.
fn charlson_details(record: &PatientRecord) -> String {
    record
        .inputs
        .charlson
        .conditions
        .iter()
        .map(|c| charlson::label(*c))
        .collect::<Vec<_>>()
        .join("; ")
}

fn row(record: &PatientRecord) -> String {
    let score = &record.score;
    let fields = [
        record.bed.to_string(),
        record.initials.clone(),
        format!("{:.1}", score.composite),
        score.tier.label().to_string(),
        (if score.trigger { "SIM" } else { "" }).to_string(),
        score.fugulin_total.to_string(),
        score.fugulin_tier.label().to_string(),
        fugulin_details(record),
        score.charlson_total.to_string(),
        score.charlson_base.to_string(),
        score.charlson_age_points.to_string(),
        charlson_details(record),
        record.inputs.mrc.to_string(),
        record.inputs.asg.label().to_string(),
        record.inputs.fois.to_string(),
        record.inputs.polypharmacy.to_string(),
    ];
    fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// The full ward CSV: header plus one row per occupied bed, in
/// ascending bed order.
pub fn ward_csv(roster: &Roster) -> String {
    let mut out = CSV_COLUMNS.join(",");
    out.push('\n');
    for record in roster.list() {
        out.push_str(&row(record));
        out.push('\n');
    }
    out
}
