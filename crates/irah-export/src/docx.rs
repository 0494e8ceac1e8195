//! DOCX rendition of the ward report: a summary block followed by one
//! row per patient, mirroring the report template's content.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, RunFonts, Style, StyleType, Table, TableCell, TableRow};

use irah_ward::roster::Roster;

use crate::error::ExportError;
use crate::render::{PatientRow, ReportContext};
use crate::styles::ReportStyles;

/// Patient-table column headers, in the stable export order.
pub const REPORT_COLUMNS: [&str; 12] = [
    "Leito",
    "Iniciais",
    "IRAH_Premier",
    "Risco",
    "Gatilho_Alto",
    "Fugulin_total",
    "Fugulin_classificacao",
    "Charlson_total",
    "MRC",
    "ASG",
    "FOIS",
    "Polifarmacia",
];

/// Generate the DOCX ward report for the current roster.
pub fn generate_report_docx(roster: &Roster, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let context = ReportContext::from_roster(roster);

    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading_size));

    docx = docx.add_paragraph(heading("IRAH–Premier — Relatório Assistencial", "Heading1"));
    docx = docx.add_paragraph(heading(
        &format!("Resumo da unidade ({} leitos)", context.summary.capacity),
        "Heading2",
    ));

    let summary_rows = [
        ("Ocupação", context.summary.occupancy.as_str()),
        ("Média IRAH", context.summary.mean.as_str()),
        ("Mediana IRAH", context.summary.median.as_str()),
        ("Carga total (soma)", context.summary.total_load.as_str()),
        ("Distribuição", context.summary.distribution.as_str()),
        (
            "Complexidade global (pela média)",
            context.summary.global_complexity.as_str(),
        ),
    ];
    let summary_table = Table::new(
        summary_rows
            .iter()
            .map(|(label, value)| {
                TableRow::new(vec![
                    cell(label, styles, styles.body_size),
                    cell(value, styles, styles.body_size),
                ])
            })
            .collect(),
    );
    docx = docx.add_table(summary_table);

    docx = docx.add_paragraph(heading("Lista de pacientes", "Heading2"));

    let mut patient_rows = vec![TableRow::new(
        REPORT_COLUMNS
            .iter()
            .map(|name| cell(name, styles, styles.table_size))
            .collect(),
    )];
    patient_rows.extend(context.patients.iter().map(|p| patient_row(p, styles)));
    docx = docx.add_table(Table::new(patient_rows));

    docx = docx.add_paragraph(body(
        "Observação: ferramenta de apoio assistencial. Utilize julgamento clínico profissional.",
        styles,
    ));

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn patient_row(p: &PatientRow, styles: &ReportStyles) -> TableRow {
    let trigger = if p.trigger { "SIM" } else { "" };
    let fields = [
        p.bed.to_string(),
        p.initials.clone(),
        p.score.clone(),
        p.tier.clone(),
        trigger.to_string(),
        p.fugulin_total.to_string(),
        p.fugulin_tier.clone(),
        p.charlson_total.to_string(),
        p.mrc.to_string(),
        p.asg.clone(),
        p.fois.to_string(),
        p.polypharmacy.to_string(),
    ];
    TableRow::new(
        fields
            .iter()
            .map(|f| cell(f, styles, styles.table_size))
            .collect(),
    )
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    // OOXML sizes are half-points.
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2)
}

fn heading(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn body(text: &str, styles: &ReportStyles) -> Paragraph {
    Paragraph::new().add_run(styled_run(text, styles, styles.body_size))
}

fn cell(text: &str, styles: &ReportStyles, size_pt: usize) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(styled_run(text, styles, size_pt)))
}

fn styled_run(text: &str, styles: &ReportStyles, size_pt: usize) -> Run {
    Run::new()
        .add_text(text)
        .size(size_pt * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
