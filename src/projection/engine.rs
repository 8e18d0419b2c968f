//! Core projection engine: twelve months of traffic, revenue and profit

use crate::inputs::SimulationInputs;
use super::state::ProjectionState;
use super::results::{MonthlyData, SimulationResults};

/// Fixed projection horizon in months
pub const HORIZON_MONTHS: u32 = 12;

/// Fully ramped ("run-rate") monthly volumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRate {
    pub traffic: f64,
    pub leads: f64,
    pub customers: f64,
    pub revenue: f64,
}

impl RunRate {
    /// Chain the funnel from pages down to revenue.
    ///
    /// This is the only place percentage inputs become fractions.
    pub fn from_inputs(inputs: &SimulationInputs) -> Self {
        let ctr = percent_to_fraction(inputs.avg_ctr);
        let traffic_cr = percent_to_fraction(inputs.traffic_cr);
        let lead_cr = percent_to_fraction(inputs.lead_cr);

        let search_volume = inputs.pseo_pages * inputs.avg_msv;
        let traffic = search_volume * ctr;
        let leads = traffic * traffic_cr;
        let customers = leads * lead_cr;
        let revenue = customers * inputs.cltv;

        Self { traffic, leads, customers, revenue }
    }

    /// Every volume scaled by the same ramp factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            traffic: self.traffic * factor,
            leads: self.leads * factor,
            customers: self.customers * factor,
            revenue: self.revenue * factor,
        }
    }
}

fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Linear ramp `min(1, month / ramp_up)`.
///
/// A ramp-up of zero, a negative one, or NaN means the strategy runs at
/// full rate from the first month.
pub fn ramp_factor(month: u32, ramp_up: f64) -> f64 {
    if !(ramp_up > 0.0) {
        return 1.0;
    }
    (f64::from(month) / ramp_up).min(1.0)
}

/// Project twelve months for one assumption set
pub fn project(inputs: &SimulationInputs) -> SimulationResults {
    let run_rate = RunRate::from_inputs(inputs);
    log::debug!("Run-rate volumes: {:?}", run_rate);

    if !(inputs.ramp_up > 0.0) {
        log::warn!(
            "Ramp-up of {} months is not positive, projecting at full rate from month 1",
            inputs.ramp_up
        );
    }

    let mut state = ProjectionState::new();
    let mut monthly_data = Vec::with_capacity(HORIZON_MONTHS as usize);

    for _month in 1..=HORIZON_MONTHS {
        let row = calculate_month(inputs, &run_rate, &mut state);
        monthly_data.push(row);
    }

    log::debug!(
        "Projection complete: cumulative profit {:.2}, ROI month {:?}",
        state.cum_profit,
        state.roi_month
    );

    SimulationResults::from_months(monthly_data, state.roi_month)
}

/// Calculate one month and roll the running totals forward
fn calculate_month(inputs: &SimulationInputs, run_rate: &RunRate, state: &mut ProjectionState) -> MonthlyData {
    let month = state.month + 1;
    let factor = ramp_factor(month, inputs.ramp_up);
    let volumes = run_rate.scaled(factor);

    // Spend is flat: no ramp, no growth
    let expense = inputs.monthly_expense;
    let profit = volumes.revenue - expense;

    state.advance_month(volumes.revenue, expense);

    MonthlyData {
        month: format!("Month {}", month),
        index: month,
        ramp_factor: factor,
        traffic: volumes.traffic,
        leads: volumes.leads,
        customers: volumes.customers,
        revenue: volumes.revenue,
        expense,
        profit,
        cum_revenue: state.cum_revenue,
        cum_expense: state.cum_expense,
        cum_profit: state.cum_profit,
    }
}
