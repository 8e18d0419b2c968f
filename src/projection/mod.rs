//! Twelve-month projection of a programmatic SEO strategy

mod state;
mod engine;
mod results;

pub use state::ProjectionState;
pub use engine::{project, ramp_factor, RunRate, HORIZON_MONTHS};
pub use results::{MonthlyData, SimulationResults};
