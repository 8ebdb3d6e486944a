//! Application handlers.
//!
//! Command and query handlers that orchestrate the planning engine and the
//! storage ports.

mod confirm_heat;
mod plan_litter;
mod refresh_plan;

pub use confirm_heat::{ConfirmHeatCommand, ConfirmHeatError, ConfirmHeatHandler, ConfirmHeatResult};
pub use plan_litter::{PlanLitterCommand, PlanLitterError, PlanLitterHandler, PlanLitterResult};
pub use refresh_plan::{
    Freshness, RefreshBreedingPlanHandler, RefreshBreedingPlanQuery, RefreshError, RefreshOutcome,
};
