//! SEO Planner CLI
//!
//! Command-line interface for projecting a programmatic SEO strategy.
//! Inputs resolve in layers: built-in defaults, then `--inputs` (JSON),
//! then `--query` (share link), then individual field flags.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use seo_planner::inputs::{load_inputs, load_scenarios, parse_value, InputField};
use seo_planner::report::{self, ProjectionResponse};
use seo_planner::{share, PlannerState, ScenarioRunner, SimulationInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "seo_planner", version, about = "Project 12 months of traffic, revenue and ROI for a programmatic SEO strategy")]
struct Cli {
    /// JSON file with assumptions (missing fields keep defaults)
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// Share-link query string or full URL to read assumptions from
    #[arg(long, value_name = "QUERY")]
    query: Option<String>,

    /// Number of pSEO pages
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    pseo_pages: Option<f64>,

    /// Average monthly search volume per page
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    avg_msv: Option<f64>,

    /// Average click-through rate (%)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    avg_ctr: Option<f64>,

    /// Traffic-to-lead conversion rate (%)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    traffic_cr: Option<f64>,

    /// Lead-to-customer conversion rate (%)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    lead_cr: Option<f64>,

    /// Customer lifetime value ($)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    cltv: Option<f64>,

    /// Ramp-up period (months)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    ramp_up: Option<f64>,

    /// Monthly expense ($)
    #[arg(long, value_parser = lenient_number, allow_negative_numbers = true)]
    monthly_expense: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a share link rooted at this URL
    #[arg(long, value_name = "URL")]
    share_base: Option<String>,

    /// CSV of named scenarios to compare instead of a single projection
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "inputs", "query", "share_base", "pseo_pages", "avg_msv", "avg_ctr",
            "traffic_cr", "lead_cr", "cltv", "ramp_up", "monthly_expense",
        ]
    )]
    scenarios: Option<PathBuf>,
}

impl Cli {
    fn field_overrides(&self) -> [(InputField, Option<f64>); 8] {
        [
            (InputField::PseoPages, self.pseo_pages),
            (InputField::AvgMsv, self.avg_msv),
            (InputField::AvgCtr, self.avg_ctr),
            (InputField::TrafficCr, self.traffic_cr),
            (InputField::LeadCr, self.lead_cr),
            (InputField::Cltv, self.cltv),
            (InputField::RampUp, self.ramp_up),
            (InputField::MonthlyExpense, self.monthly_expense),
        ]
    }

    /// Defaults, then file, then query, then flags
    fn resolve_inputs(&self) -> Result<SimulationInputs> {
        let mut inputs = match &self.inputs {
            Some(path) => load_inputs(path)
                .with_context(|| format!("loading inputs from {}", path.display()))?,
            None => SimulationInputs::default(),
        };

        if let Some(query) = &self.query {
            let applied = share::apply_query(&mut inputs, query);
            log::info!("Applied {} fields from query", applied);
        }

        for (field, value) in self.field_overrides() {
            if let Some(value) = value {
                inputs.set(field, value);
            }
        }

        Ok(inputs)
    }
}

/// Flag values follow form semantics: anything unparsable reads as 0
fn lenient_number(raw: &str) -> Result<f64, std::convert::Infallible> {
    Ok(parse_value(raw))
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn run_single(cli: &Cli) -> Result<()> {
    let state = PlannerState::new(cli.resolve_inputs()?);
    let mut out = open_output(cli.output.as_ref())?;

    match cli.format {
        OutputFormat::Table => {
            let today = chrono::Local::now().date_naive();
            writeln!(out, "{}", report::render_report(state.inputs(), state.results(), today))?;
        }
        OutputFormat::Json => {
            let (inputs, results) = state.clone().into_parts();
            report::write_json(&mut out, &ProjectionResponse::new(inputs, results))?;
        }
        OutputFormat::Csv => report::write_csv(&mut out, state.results())?,
    }
    out.flush()?;
    drop(out);

    if let Some(base) = &cli.share_base {
        println!("\nShare link: {}", share::share_url(base, state.inputs()));
    }
    if let Some(path) = &cli.output {
        println!("Results written to: {}", path.display());
    }

    Ok(())
}

fn run_scenarios(cli: &Cli, path: &Path) -> Result<()> {
    let scenarios = load_scenarios(path)
        .with_context(|| format!("loading scenarios from {}", path.display()))?;
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());

    let outcomes = ScenarioRunner::new().run_batch(&scenarios);
    let mut out = open_output(cli.output.as_ref())?;

    match cli.format {
        OutputFormat::Table => writeln!(out, "\n{}", report::render_scenario_summary(&outcomes))?,
        OutputFormat::Json => report::write_json(&mut out, &outcomes)?,
        OutputFormat::Csv => report::write_scenario_csv(&mut out, &outcomes)?,
    }
    out.flush()?;
    drop(out);

    if let Some(path) = &cli.output {
        println!("Results written to: {}", path.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    match &cli.scenarios {
        Some(path) => run_scenarios(&cli, path),
        None => run_single(&cli),
    }
}
