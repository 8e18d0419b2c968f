//! Simulation assumptions entered by the user
//!
//! Conversion rates are stored exactly as entered (whole-number percentages);
//! the projection engine turns them into fractions when it runs.

mod field;
pub mod loader;

pub use field::{InputField, UnknownField};
pub use loader::{load_inputs, load_inputs_from_reader, load_scenarios, load_scenarios_from_reader, InputError};

use serde::{Deserialize, Serialize};

/// Assumption set for a programmatic SEO strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationInputs {
    /// Number of content pages
    #[serde(rename = "pSEO_pages")]
    pub pseo_pages: f64,

    /// Average monthly search volume per page
    pub avg_msv: f64,

    /// Click-through rate (percent)
    pub avg_ctr: f64,

    /// Traffic-to-lead conversion rate (percent)
    pub traffic_cr: f64,

    /// Lead-to-customer conversion rate (percent)
    pub lead_cr: f64,

    /// Customer lifetime value
    pub cltv: f64,

    /// Months to reach full run-rate
    pub ramp_up: f64,

    /// Recurring monthly cost of the strategy
    pub monthly_expense: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            pseo_pages: 500.0,
            avg_msv: 50.0,
            avg_ctr: 3.0,
            traffic_cr: 2.0,
            lead_cr: 10.0,
            cltv: 1500.0,
            ramp_up: 6.0,
            monthly_expense: 2000.0,
        }
    }
}

impl SimulationInputs {
    /// All-zero assumption set (what an empty form amounts to)
    pub fn zeroed() -> Self {
        Self {
            pseo_pages: 0.0,
            avg_msv: 0.0,
            avg_ctr: 0.0,
            traffic_cr: 0.0,
            lead_cr: 0.0,
            cltv: 0.0,
            ramp_up: 0.0,
            monthly_expense: 0.0,
        }
    }

    /// Read one field by name
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::PseoPages => self.pseo_pages,
            InputField::AvgMsv => self.avg_msv,
            InputField::AvgCtr => self.avg_ctr,
            InputField::TrafficCr => self.traffic_cr,
            InputField::LeadCr => self.lead_cr,
            InputField::Cltv => self.cltv,
            InputField::RampUp => self.ramp_up,
            InputField::MonthlyExpense => self.monthly_expense,
        }
    }

    /// Overwrite one field by name
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::PseoPages => &mut self.pseo_pages,
            InputField::AvgMsv => &mut self.avg_msv,
            InputField::AvgCtr => &mut self.avg_ctr,
            InputField::TrafficCr => &mut self.traffic_cr,
            InputField::LeadCr => &mut self.lead_cr,
            InputField::Cltv => &mut self.cltv,
            InputField::RampUp => &mut self.ramp_up,
            InputField::MonthlyExpense => &mut self.monthly_expense,
        };
        *slot = value;
    }

    /// Builder-style variant of [`SimulationInputs::set`]
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

/// Parse a user-entered number the way the input form does.
///
/// Thousands separators are dropped and the longest leading numeric prefix
/// is used (`"12abc"` reads as 12). Empty, unparsable and non-finite values
/// become 0.
pub fn parse_value(raw: &str) -> f64 {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    leading_number(&cleaned, raw)
}

/// Parse a share-link parameter value.
///
/// Same as [`parse_value`] except that commas are not separators: the
/// number ends at the first comma, so `"1,500"` reads as 1.
pub fn parse_param(raw: &str) -> f64 {
    leading_number(raw.trim(), raw)
}

fn leading_number(cleaned: &str, raw: &str) -> f64 {
    match numeric_prefix(cleaned).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            if !cleaned.is_empty() {
                log::warn!("Unparsable input value {:?}, using 0", raw);
            }
            0.0
        }
    }
}

/// Longest prefix of `s` shaped like a decimal float literal
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when it carries digits ("1e" reads as 1)
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_planner_start() {
        let inputs = SimulationInputs::default();
        assert_eq!(inputs.pseo_pages, 500.0);
        assert_eq!(inputs.avg_ctr, 3.0);
        assert_eq!(inputs.ramp_up, 6.0);
        assert_eq!(inputs.monthly_expense, 2000.0);
    }

    #[test]
    fn test_get_set_by_field() {
        let mut inputs = SimulationInputs::zeroed();
        for (i, field) in InputField::ALL.iter().enumerate() {
            inputs.set(*field, i as f64 + 1.0);
        }
        for (i, field) in InputField::ALL.iter().enumerate() {
            assert_eq!(inputs.get(*field), i as f64 + 1.0);
        }
        assert_eq!(inputs.cltv, 6.0);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("500"), 500.0);
        assert_eq!(parse_value("1,500"), 1500.0);
        assert_eq!(parse_value(" 2.5 "), 2.5);
        assert_eq!(parse_value("-100"), -100.0);
        assert_eq!(parse_value(".5"), 0.5);
        assert_eq!(parse_value("12abc"), 12.0);
        assert_eq!(parse_value("3e2"), 300.0);
        assert_eq!(parse_value("7e"), 7.0);
    }

    #[test]
    fn test_parse_value_defaults_to_zero() {
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("abc"), 0.0);
        assert_eq!(parse_value("-"), 0.0);
        assert_eq!(parse_value("."), 0.0);
        assert_eq!(parse_value("1e999"), 0.0);
    }

    #[test]
    fn test_parse_param_stops_at_comma() {
        assert_eq!(parse_param("1,500"), 1.0);
        assert_eq!(parse_param(" 2.5 "), 2.5);
        assert_eq!(parse_param("12abc"), 12.0);
        assert_eq!(parse_param(",5"), 0.0);
        assert_eq!(parse_param(""), 0.0);
    }

    #[test]
    fn test_json_uses_wire_names_and_defaults() {
        let inputs: SimulationInputs =
            serde_json::from_str(r#"{"pSEO_pages": 1000, "cltv": 250}"#).unwrap();
        assert_eq!(inputs.pseo_pages, 1000.0);
        assert_eq!(inputs.cltv, 250.0);
        assert_eq!(inputs.avg_msv, 50.0);

        let json = serde_json::to_string(&SimulationInputs::default()).unwrap();
        assert!(json.contains("\"pSEO_pages\":500.0"));
        assert!(json.contains("\"monthly_expense\":2000.0"));
    }
}
