//! SEO Planner - twelve-month ROI projection for programmatic SEO strategies
//!
//! This library provides:
//! - The assumption set and its loaders (JSON, scenario CSV)
//! - The month-by-month traffic, revenue and profit projection with time to ROI
//! - A planner state container that recomputes on every edit
//! - Shareable-link encoding of assumptions as URL query parameters
//! - Text, CSV and JSON report output
//! - Batch projection of named scenarios

pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod session;
pub mod share;

// Re-export commonly used types
pub use inputs::{InputField, SimulationInputs};
pub use projection::{project, MonthlyData, SimulationResults};
pub use scenario::{NamedScenario, ScenarioOutcome, ScenarioRunner};
pub use session::PlannerState;
