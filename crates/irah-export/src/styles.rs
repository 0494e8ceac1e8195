use serde::{Deserialize, Serialize};

/// Styling configuration for the DOCX ward report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStyles {
    /// Font for body and table text.
    pub body_font: String,

    /// Report title size in points.
    pub title_size: usize,

    /// Section heading size in points.
    pub heading_size: usize,

    /// Body text size in points.
    pub body_size: usize,

    /// Patient-table text size in points (the table has twelve
    /// columns, so it runs smaller than the body).
    pub table_size: usize,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            title_size: 18,
            heading_size: 14,
            body_size: 10,
            table_size: 8,
        }
    }
}
