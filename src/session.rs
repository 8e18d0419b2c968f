//! Planner state: the editable assumption set and the results derived from it
//!
//! Every edit recomputes the full projection from month 1; nothing is
//! updated incrementally.

use crate::inputs::{InputField, SimulationInputs};
use crate::projection::{project, SimulationResults};

/// Current inputs together with their up-to-date results
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    inputs: SimulationInputs,
    results: SimulationResults,
}

impl PlannerState {
    /// Start from an assumption set, projecting immediately
    pub fn new(inputs: SimulationInputs) -> Self {
        let results = project(&inputs);
        Self { inputs, results }
    }

    pub fn inputs(&self) -> &SimulationInputs {
        &self.inputs
    }

    pub fn results(&self) -> &SimulationResults {
        &self.results
    }

    /// Change one field and recompute
    pub fn update(&mut self, field: InputField, value: f64) -> &SimulationResults {
        log::debug!("Updating {} to {}", field, value);
        self.inputs.set(field, value);
        self.recompute()
    }

    /// Swap in a whole new assumption set and recompute
    pub fn replace(&mut self, inputs: SimulationInputs) -> &SimulationResults {
        self.inputs = inputs;
        self.recompute()
    }

    fn recompute(&mut self) -> &SimulationResults {
        self.results = project(&self.inputs);
        &self.results
    }

    /// Hand back the owned value objects
    pub fn into_parts(self) -> (SimulationInputs, SimulationResults) {
        (self.inputs, self.results)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new(SimulationInputs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_already_projected() {
        let state = PlannerState::default();
        assert_eq!(state.results().monthly_data.len(), 12);
        assert!(state.results().total_traffic > 0.0);
    }

    #[test]
    fn test_update_recomputes() {
        let mut state = PlannerState::default();
        assert_eq!(state.results().roi_month, None);

        let results = state.update(InputField::MonthlyExpense, 0.0);
        assert_eq!(results.roi_month, Some(1));
        assert_eq!(state.inputs().monthly_expense, 0.0);
    }

    #[test]
    fn test_update_matches_fresh_projection() {
        let mut state = PlannerState::default();
        state.update(InputField::Cltv, 3000.0);
        state.update(InputField::RampUp, 3.0);

        let fresh = PlannerState::new(*state.inputs());
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_replace() {
        let mut state = PlannerState::default();
        state.replace(SimulationInputs::zeroed());
        assert_eq!(state.results().total_traffic, 0.0);
        assert_eq!(state.results().roi_month, Some(1));

        let (inputs, results) = state.into_parts();
        assert_eq!(inputs, SimulationInputs::zeroed());
        assert_eq!(results.final_cumulative_profit, 0.0);
    }
}
