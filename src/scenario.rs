//! Scenario runner for batch projections
//!
//! Projects many named assumption sets in one go, e.g. to compare a
//! conservative and an aggressive content plan side by side.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inputs::SimulationInputs;
use crate::projection::{project, SimulationResults};

/// An assumption set with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub inputs: SimulationInputs,
}

/// Results of one named scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub inputs: SimulationInputs,
    pub results: SimulationResults,
}

/// Batch projection runner
///
/// # Example
/// ```
/// use seo_planner::{NamedScenario, ScenarioRunner, SimulationInputs};
///
/// let runner = ScenarioRunner::new();
/// let outcomes = runner.run_batch(&[NamedScenario {
///     name: "Baseline".to_string(),
///     inputs: SimulationInputs::default(),
/// }]);
/// assert_eq!(outcomes.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Project sequentially instead of on the rayon pool
    sequential: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that stays on the calling thread
    pub fn sequential() -> Self {
        Self { sequential: true }
    }

    /// Run a single projection
    pub fn run(&self, inputs: &SimulationInputs) -> SimulationResults {
        project(inputs)
    }

    /// Run every scenario; output order matches input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        log::debug!("Projecting {} scenarios", scenarios.len());

        let outcome = |scenario: &NamedScenario| ScenarioOutcome {
            name: scenario.name.clone(),
            inputs: scenario.inputs,
            results: self.run(&scenario.inputs),
        };

        if self.sequential {
            scenarios.iter().map(outcome).collect()
        } else {
            scenarios.par_iter().map(outcome).collect()
        }
    }
}

/// Outcome with the highest year-end cumulative profit
pub fn best_by_profit(outcomes: &[ScenarioOutcome]) -> Option<&ScenarioOutcome> {
    outcomes.iter().max_by(|a, b| {
        a.results
            .final_cumulative_profit
            .total_cmp(&b.results.final_cumulative_profit)
    })
}

/// Outcome that reaches ROI soonest; ties go to the earlier scenario
pub fn earliest_roi(outcomes: &[ScenarioOutcome]) -> Option<&ScenarioOutcome> {
    outcomes
        .iter()
        .filter_map(|o| o.results.roi_month.map(|m| (m, o)))
        .min_by_key(|(month, _)| *month)
        .map(|(_, o)| o)
}
