//! Plain-text rendering of the twelve-month table and the full report

use chrono::NaiveDate;

use super::format::{format_currency, format_number, group_thousands, roi_text};
use crate::inputs::{InputField, SimulationInputs};
use crate::projection::SimulationResults;
use crate::scenario::{best_by_profit, earliest_roi, ScenarioOutcome};

pub const REPORT_TITLE: &str = "SEO Planner Results";
pub const TOTAL_ROW_LABEL: &str = "Total / End of Year 1";

/// Column headers, month column first
pub const COLUMN_HEADERS: [&str; 9] = [
    "Month",
    "Est. Traffic",
    "Est. Leads (MQL)",
    "Est. New Customers",
    "Est. Monthly Revenue ($)",
    "Cumulative Revenue ($)",
    "Cumulative Expense ($)",
    "Monthly Profit ($)",
    "Cumulative Profit ($)",
];

/// Formatted cells for every month plus the year-end total row
pub fn table_rows(results: &SimulationResults) -> Vec<[String; 9]> {
    let mut rows: Vec<[String; 9]> = results
        .monthly_data
        .iter()
        .map(|row| {
            [
                row.month.clone(),
                format_number(row.traffic),
                format_number(row.leads),
                format_number(row.customers),
                format_currency(row.revenue),
                format_currency(row.cum_revenue),
                format_currency(row.cum_expense),
                format_currency(row.profit),
                format_currency(row.cum_profit),
            ]
        })
        .collect();

    rows.push([
        TOTAL_ROW_LABEL.to_string(),
        format_number(results.total_traffic),
        format_number(results.total_leads),
        format_number(results.total_customers),
        format_currency(results.total_monthly_revenue),
        format_currency(results.final_cumulative_revenue),
        format_currency(results.final_cumulative_expense),
        format_currency(results.total_monthly_profit()),
        format_currency(results.final_cumulative_profit),
    ]);

    rows
}

/// Fixed-width text table; the month column is left-aligned, figures right-aligned
pub fn render_table(results: &SimulationResults) -> String {
    let rows = table_rows(results);

    let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let render_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = width)
                } else {
                    format!("{:>width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let mut lines = Vec::with_capacity(rows.len() + 3);

    lines.push(render_line(&COLUMN_HEADERS));
    lines.push("-".repeat(total_width));
    for (i, row) in rows.iter().enumerate() {
        if i == rows.len() - 1 {
            lines.push("-".repeat(total_width));
        }
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render_line(&cells));
    }

    lines.join("\n")
}

/// Assumption value as shown in the report
fn format_assumption(field: InputField, value: f64) -> String {
    if field.is_currency() {
        format_currency(value)
    } else if field.is_percentage() {
        format!("{}%", value)
    } else {
        group_thousands(&value.to_string())
    }
}

/// Full text report: title, date, assumptions, time to ROI and the table
pub fn render_report(inputs: &SimulationInputs, results: &SimulationResults, generated_on: NaiveDate) -> String {
    let mut out = Vec::new();

    out.push(REPORT_TITLE.to_string());
    out.push(format!("Generated on: {}", generated_on.format("%Y-%m-%d")));
    out.push(String::new());

    out.push("Assumptions".to_string());
    let label_width = InputField::ALL.iter().map(|f| f.label().len()).max().unwrap_or(0);
    for field in InputField::ALL {
        out.push(format!(
            "  {:<width$}  {}",
            field.label(),
            format_assumption(field, inputs.get(field)),
            width = label_width
        ));
    }
    out.push(String::new());

    out.push(format!("Time to ROI: {}", roi_text(results.roi_month)));
    out.push(String::new());

    out.push("Estimated 12-Month Impact & ROI".to_string());
    out.push(render_table(results));

    out.join("\n")
}

/// Side-by-side year-end comparison of a scenario batch
pub fn render_scenario_summary(outcomes: &[ScenarioOutcome]) -> String {
    let name_width = outcomes.iter().map(|o| o.name.len()).max().unwrap_or(0).max(8);
    let mut out = Vec::with_capacity(outcomes.len() + 6);

    out.push(format!(
        "{:<name_width$} {:>16} {:>16} {:>16} {:>30}",
        "Scenario", "Revenue", "Expense", "Profit", "Time to ROI",
        name_width = name_width
    ));
    out.push("-".repeat(name_width + 82));

    for outcome in outcomes {
        let results = &outcome.results;
        out.push(format!(
            "{:<name_width$} {:>16} {:>16} {:>16} {:>30}",
            outcome.name,
            format_currency(results.final_cumulative_revenue),
            format_currency(results.final_cumulative_expense),
            format_currency(results.final_cumulative_profit),
            roi_text(results.roi_month),
            name_width = name_width,
        ));
    }
    out.push(String::new());

    if let Some(best) = best_by_profit(outcomes) {
        out.push(format!("Highest year-end profit: {}", best.name));
    }
    match earliest_roi(outcomes) {
        Some(fastest) => out.push(format!(
            "Fastest to ROI: {} ({})",
            fastest.name,
            roi_text(fastest.results.roi_month)
        )),
        None => out.push("No scenario reaches ROI within 12 months".to_string()),
    }
    let reached = outcomes.iter().filter(|o| o.results.roi_reached()).count();
    out.push(format!("{} of {} scenarios reach ROI", reached, outcomes.len()));

    out.join("\n")
}
