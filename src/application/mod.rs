//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Reads go through `RefreshBreedingPlanHandler`; writes (confirm, plan)
//! go through command handlers and are picked up by the next refresh.

pub mod handlers;
pub mod retry;

pub use handlers::{
    ConfirmHeatCommand, ConfirmHeatError, ConfirmHeatHandler, ConfirmHeatResult, Freshness,
    PlanLitterCommand, PlanLitterError, PlanLitterHandler, PlanLitterResult,
    RefreshBreedingPlanHandler, RefreshBreedingPlanQuery, RefreshError, RefreshOutcome,
};
pub use retry::RetryPolicy;
