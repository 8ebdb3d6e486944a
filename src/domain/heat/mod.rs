//! Heat Module - cycle prediction and breeding planning engine.
//!
//! All functions are pure and synchronous. They take a snapshot of animals
//! and records plus a planning date and return computed results; acquiring
//! and persisting data is the application layer's job.
//!
//! # Components
//!
//! - `IntervalEstimator` - per-animal cycle interval from history
//! - `ConfidenceScorer` - trust rating of the estimate
//! - `PredictionGenerator` - bounded, self-correcting multi-year projection
//! - `StatusResolver` - ordered rules assigning each slot its status
//! - `BreedingPlanner` - runs the pipeline for a whole snapshot

mod confidence;
mod diagnostics;
mod generator;
mod interval_estimator;
mod parameters;
mod planner;
mod prediction;
mod status_resolver;

pub use confidence::{Confidence, ConfidenceScorer};
pub use diagnostics::PlanningDiagnostic;
pub use generator::{GeneratedSchedule, PredictionGenerator};
pub use interval_estimator::{DataQualityWarning, IntervalEstimate, IntervalEstimator, IntervalSource};
pub use parameters::{PlanningParameters, BASELINE_INTERVAL_DAYS, HIGH_CONFIDENCE_MIN_GAPS};
pub use planner::{AnimalPlan, BreedingPlan, BreedingPlanner};
pub use prediction::{HeatPrediction, HeatStatus};
pub use status_resolver::{
    apply_rules, confirmation_reach, Resolution, SlotFacts, StatusResolver, RESOLUTION_ORDER,
};
