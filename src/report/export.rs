//! Machine-readable export of projection results (CSV and JSON)

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::ReportError;
use crate::inputs::SimulationInputs;
use crate::projection::SimulationResults;
use crate::scenario::ScenarioOutcome;
use crate::share::to_query_string;

/// Inputs and results together, as served to API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub inputs: SimulationInputs,
    pub results: SimulationResults,
    /// Query string that reproduces `inputs` in a share link
    pub share_query: String,
}

impl ProjectionResponse {
    pub fn new(inputs: SimulationInputs, results: SimulationResults) -> Self {
        let share_query = to_query_string(&inputs);
        Self { inputs, results, share_query }
    }
}

#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    #[serde(rename = "Month")]
    month: &'a str,
    #[serde(rename = "Traffic")]
    traffic: f64,
    #[serde(rename = "Leads")]
    leads: f64,
    #[serde(rename = "Customers")]
    customers: f64,
    #[serde(rename = "Revenue")]
    revenue: f64,
    #[serde(rename = "CumRevenue")]
    cum_revenue: f64,
    #[serde(rename = "CumExpense")]
    cum_expense: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "CumProfit")]
    cum_profit: f64,
}

/// Write the monthly table with its year-end total row as CSV (raw numbers)
pub fn write_csv<W: Write>(writer: W, results: &SimulationResults) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in &results.monthly_data {
        csv_writer.serialize(CsvRecord {
            month: &row.month,
            traffic: row.traffic,
            leads: row.leads,
            customers: row.customers,
            revenue: row.revenue,
            cum_revenue: row.cum_revenue,
            cum_expense: row.cum_expense,
            profit: row.profit,
            cum_profit: row.cum_profit,
        })?;
    }

    csv_writer.serialize(CsvRecord {
        month: super::TOTAL_ROW_LABEL,
        traffic: results.total_traffic,
        leads: results.total_leads,
        customers: results.total_customers,
        revenue: results.total_monthly_revenue,
        cum_revenue: results.final_cumulative_revenue,
        cum_expense: results.final_cumulative_expense,
        profit: results.total_monthly_profit(),
        cum_profit: results.final_cumulative_profit,
    })?;

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ScenarioCsvRecord<'a> {
    #[serde(rename = "Scenario")]
    name: &'a str,
    #[serde(rename = "Revenue")]
    revenue: f64,
    #[serde(rename = "Expense")]
    expense: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    /// Empty when ROI is not reached
    #[serde(rename = "RoiMonth")]
    roi_month: Option<u32>,
}

/// Write one year-end row per scenario as CSV
pub fn write_scenario_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let results = &outcome.results;
        csv_writer.serialize(ScenarioCsvRecord {
            name: &outcome.name,
            revenue: results.final_cumulative_revenue,
            expense: results.final_cumulative_expense,
            profit: results.final_cumulative_profit,
            roi_month: results.roi_month,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write any serializable document as pretty JSON
pub fn write_json<W: Write, T: Serialize>(mut writer: W, document: &T) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, document)?;
    writeln!(writer)?;
    Ok(())
}

/// Compact JSON string
pub fn to_json_string<T: Serialize>(document: &T) -> Result<String, ReportError> {
    Ok(serde_json::to_string(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    #[test]
    fn test_write_csv() {
        let results = project(&SimulationInputs {
            ramp_up: 1.0,
            ..Default::default()
        });
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &results).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[0],
            "Month,Traffic,Leads,Customers,Revenue,CumRevenue,CumExpense,Profit,CumProfit"
        );
        assert!(lines[1].starts_with("Month 1,750.0,15.0,1.5,2250.0,2250.0,2000.0,250.0,250.0"));
        assert!(lines[13].starts_with("Total / End of Year 1,9000.0,"));
    }

    #[test]
    fn test_response_json() {
        let inputs = SimulationInputs::default();
        let response = ProjectionResponse::new(inputs, project(&inputs));
        let json = to_json_string(&response).unwrap();

        assert!(json.contains("\"shareQuery\":\"pSEO_pages=500&"));
        assert!(json.contains("\"roiMonth\":-1"));
        assert!(json.contains("\"monthlyData\":["));

        let back: ProjectionResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.inputs, inputs);
        assert_eq!(back.results.monthly_data.len(), 12);
        assert_eq!(back.results.roi_month, None);
    }

    #[test]
    fn test_write_scenario_csv() {
        let outcomes = crate::ScenarioRunner::sequential().run_batch(&[
            crate::NamedScenario {
                name: "Baseline".to_string(),
                inputs: SimulationInputs::default(),
            },
            crate::NamedScenario {
                name: "No spend".to_string(),
                inputs: SimulationInputs {
                    monthly_expense: 0.0,
                    ..Default::default()
                },
            },
        ]);
        let mut buffer = Vec::new();
        write_scenario_csv(&mut buffer, &outcomes).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Scenario,Revenue,Expense,Profit,RoiMonth");
        assert_eq!(lines[1], "Baseline,21375.0,24000.0,-2625.0,");
        assert_eq!(lines[2], "No spend,21375.0,0.0,21375.0,1");
    }

    #[test]
    fn test_write_json_pretty() {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &SimulationInputs::default()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.ends_with("}\n"));
    }
}
