//! Report output: number formatting, text tables, CSV and JSON export

mod export;
pub mod format;
mod table;

pub use export::{to_json_string, write_csv, write_json, write_scenario_csv, ProjectionResponse};
pub use format::{format_currency, format_number, roi_text};
pub use table::{render_report, render_scenario_summary, render_table, table_rows, COLUMN_HEADERS, REPORT_TITLE, TOTAL_ROW_LABEL};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}
