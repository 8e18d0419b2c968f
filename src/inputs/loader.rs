//! Load assumption sets from JSON documents and scenario CSV files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::Reader;
use thiserror::Error;

use super::{parse_value, InputField, SimulationInputs};
use crate::scenario::NamedScenario;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse inputs json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read scenario csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw CSV row of a scenario file.
///
/// Values are read as text so that stray characters go through the same
/// normalization as form input. A missing column or blank cell keeps the default.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "pSEO_pages", default)]
    pseo_pages: Option<String>,
    #[serde(default)]
    avg_msv: Option<String>,
    #[serde(default)]
    avg_ctr: Option<String>,
    #[serde(default)]
    traffic_cr: Option<String>,
    #[serde(default)]
    lead_cr: Option<String>,
    #[serde(default)]
    cltv: Option<String>,
    #[serde(default)]
    ramp_up: Option<String>,
    #[serde(default)]
    monthly_expense: Option<String>,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> NamedScenario {
        let columns = [
            (InputField::PseoPages, self.pseo_pages),
            (InputField::AvgMsv, self.avg_msv),
            (InputField::AvgCtr, self.avg_ctr),
            (InputField::TrafficCr, self.traffic_cr),
            (InputField::LeadCr, self.lead_cr),
            (InputField::Cltv, self.cltv),
            (InputField::RampUp, self.ramp_up),
            (InputField::MonthlyExpense, self.monthly_expense),
        ];

        let mut inputs = SimulationInputs::default();
        for (field, raw) in columns {
            if let Some(raw) = raw {
                inputs.set(field, parse_value(&raw));
            }
        }

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Scenario {}", row_number));

        NamedScenario { name, inputs }
    }
}

/// Load one assumption set from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<SimulationInputs, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_inputs_from_reader(BufReader::new(file))
}

/// Load one assumption set from any JSON reader; absent fields keep their defaults
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<SimulationInputs, InputError> {
    let inputs = serde_json::from_reader(reader)?;
    log::debug!("Loaded inputs: {:?}", inputs);
    Ok(inputs)
}

/// Load named scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_scenarios_from_reader(file)
}

/// Load named scenarios from any CSV reader (header row required)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedScenario>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (i, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(i + 1));
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
