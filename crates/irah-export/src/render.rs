use serde::Serialize;
use tera::{Context, Tera};

use irah_core::models::patient::PatientRecord;
use irah_ward::roster::Roster;
use irah_ward::summary::UnitSummary;

use crate::error::ExportError;

const NO_DATA: &str = "sem dados";

/// The built-in ward report template (Markdown-ish; the DOCX layer and
/// the tabular display both consume this shape). Institutions may
/// substitute their own template via [`render_report`].
pub const DEFAULT_REPORT_TEMPLATE: &str = "\
# IRAH–Premier — Relatório Assistencial

## Resumo da unidade ({{ summary.capacity }} leitos)

- **Ocupação**: {{ summary.occupancy }}
- **Média IRAH**: {{ summary.mean }}
- **Mediana IRAH**: {{ summary.median }}
- **Carga total (soma)**: {{ summary.total_load }}
- **Distribuição**: {{ summary.distribution }}
- **Complexidade global (pela média)**: {{ summary.global_complexity }}

## Lista de pacientes

{% for p in patients %}- **Leito {{ p.bed }}** — {{ p.initials }}: IRAH {{ p.score }} ({{ p.tier }}{% if p.trigger %}, gatilho{% endif %}) | Fugulin {{ p.fugulin_total }} ({{ p.fugulin_tier }}) | Charlson {{ p.charlson_total }} | MRC {{ p.mrc }} | ASG {{ p.asg }} | FOIS {{ p.fois }} | Polifarmácia {{ p.polypharmacy }}
{% endfor %}
Observação: ferramenta de apoio assistencial. Utilize julgamento clínico profissional.
";

/// Summary block of the report: six preformatted fields.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryBlock {
    pub capacity: u8,
    pub occupancy: String,
    pub mean: String,
    pub median: String,
    pub total_load: String,
    pub distribution: String,
    pub global_complexity: String,
}

impl SummaryBlock {
    pub fn from_summary(summary: &UnitSummary) -> Self {
        let fmt = |value: Option<f64>| match value {
            Some(v) => format!("{v:.1}"),
            None => NO_DATA.to_string(),
        };
        Self {
            capacity: summary.capacity,
            occupancy: summary.occupancy(),
            mean: fmt(summary.mean),
            median: fmt(summary.median),
            total_load: format!("{:.1}", summary.total_load),
            distribution: summary.distribution(),
            global_complexity: summary
                .global_complexity
                .map(|t| t.label().to_string())
                .unwrap_or_else(|| NO_DATA.to_string()),
        }
    }
}

/// One patient line of the report: the twelve fixed columns.
#[derive(Debug, Clone, Serialize)]
pub struct PatientRow {
    pub bed: u8,
    pub initials: String,
    pub score: String,
    pub tier: String,
    pub trigger: bool,
    pub fugulin_total: u8,
    pub fugulin_tier: String,
    pub charlson_total: u8,
    pub mrc: u8,
    pub asg: String,
    pub fois: u8,
    pub polypharmacy: u16,
}

impl PatientRow {
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            bed: record.bed,
            initials: record.initials.clone(),
            score: format!("{:.1}", record.score.composite),
            tier: record.score.tier.label().to_string(),
            trigger: record.score.trigger,
            fugulin_total: record.score.fugulin_total,
            fugulin_tier: record.score.fugulin_tier.label().to_string(),
            charlson_total: record.score.charlson_total,
            mrc: record.inputs.mrc,
            asg: record.inputs.asg.label().to_string(),
            fois: record.inputs.fois,
            polypharmacy: record.inputs.polypharmacy,
        }
    }
}

/// Everything a report template can address.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub summary: SummaryBlock,
    pub patients: Vec<PatientRow>,
}

impl ReportContext {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            summary: SummaryBlock::from_summary(&UnitSummary::from_roster(roster)),
            patients: roster.list().map(PatientRow::from_record).collect(),
        }
    }
}

/// Render a report template (Jinja2 syntax) with the given context.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the built-in ward report for the current roster.
pub fn render_default_report(roster: &Roster) -> Result<String, ExportError> {
    render_report(
        "ward_report",
        DEFAULT_REPORT_TEMPLATE,
        &ReportContext::from_roster(roster),
    )
}
