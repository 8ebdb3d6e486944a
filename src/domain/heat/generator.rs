//! Prediction Generator - projects future heat slots for one animal.
//!
//! Starting from the most recent manually logged heat, the interval is added slot by
//! slot until the projected date passes the horizon. Each slot goes through
//! the [`StatusResolver`]; when a confirmed cycle claims a slot its actual date
//! replaces the projection and later slots are re-based from it, so drift
//! never compounds across years.
//!
//! An animal without logged heats starts from its earliest confirmed cycle,
//! emitted as a confirmed first slot, and otherwise from `today`.
//!
//! The loop is bounded by `max_projection_iterations` independently of the
//! horizon check.

use chrono::{Duration, NaiveDate};

use super::confidence::Confidence;
use super::interval_estimator::IntervalEstimate;
use super::parameters::PlanningParameters;
use super::prediction::HeatPrediction;
use super::status_resolver::{Resolution, StatusResolver};
use crate::domain::animal::Animal;
use crate::domain::foundation::PredictionId;
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter};

/// Projected slots for one animal plus what went wrong along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchedule {
    pub predictions: Vec<HeatPrediction>,
    /// The iteration cap stopped the loop before the horizon did.
    pub hit_iteration_cap: bool,
    /// At least one slot could not be given an age.
    pub age_unavailable: bool,
    /// Confirmed cycles of the animal no slot claimed.
    pub unmatched_confirmed: usize,
    /// Planned litters of the animal no slot claimed.
    pub unmatched_planned: usize,
}

/// Generates ordered predictions for an animal.
pub struct PredictionGenerator<'p> {
    params: &'p PlanningParameters,
}

impl<'p> PredictionGenerator<'p> {
    pub fn new(params: &'p PlanningParameters) -> Self {
        Self { params }
    }

    /// Projects slots from the anchor heat (or `today` without history) up to
    /// the horizon end.
    ///
    /// Output dates are strictly increasing; the same inputs always produce
    /// the same output.
    pub fn generate(
        &self,
        animal: &Animal,
        estimate: &IntervalEstimate,
        confidence: Confidence,
        confirmed: &[ConfirmedHeatCycle],
        planned: &[PlannedLitter],
        today: NaiveDate,
    ) -> GeneratedSchedule {
        let horizon_end = self.params.horizon_end(today);
        let interval = Duration::days(estimate.interval_days.max(1));
        let mut resolver = StatusResolver::for_animal(
            &animal.id,
            confirmed,
            planned,
            today,
            self.params.match_tolerance_days,
        );

        let mut predictions = Vec::new();
        let mut cursor = match animal.projection_anchor() {
            Some(anchor) => {
                resolver.settle_through(anchor);
                anchor
            }
            None => match resolver.resolve_first_confirmed(horizon_end) {
                Some(resolution) => {
                    resolver.settle_through(resolution.date);
                    predictions.push(slot(
                        animal,
                        0,
                        resolution.date,
                        estimate.interval_days.max(1),
                        &resolution,
                        confidence,
                    ));
                    resolution.date
                }
                None => animal.latest_heat().unwrap_or(today),
            },
        };
        let mut reached_horizon = false;

        for index in predictions.len()..self.params.max_projection_iterations {
            let projected = match cursor.checked_add_signed(interval) {
                Some(date) if date <= horizon_end => date,
                _ => {
                    reached_horizon = true;
                    break;
                }
            };

            let resolution = resolver.resolve(projected, cursor);
            let interval_days = (resolution.date - cursor).num_days();
            predictions.push(slot(animal, index, projected, interval_days, &resolution, confidence));
            cursor = resolution.date;
        }

        GeneratedSchedule {
            hit_iteration_cap: !reached_horizon,
            age_unavailable: predictions.iter().any(|p| p.age_at_heat.is_none()),
            unmatched_confirmed: resolver.unclaimed_confirmed(),
            unmatched_planned: resolver.unclaimed_planned(),
            predictions,
        }
    }
}

fn slot(
    animal: &Animal,
    index: usize,
    projected: NaiveDate,
    interval_days: i64,
    resolution: &Resolution<'_>,
    confidence: Confidence,
) -> HeatPrediction {
    HeatPrediction {
        id: PredictionId::derive(&animal.id, index),
        animal_id: animal.id,
        animal_name: animal.name.clone(),
        index,
        date: resolution.date,
        projected_date: projected,
        year: HeatPrediction::year_of(resolution.date),
        status: resolution.status,
        confidence,
        interval_days,
        age_at_heat: animal.age_on(resolution.date),
        has_planned_litter: resolution.planned.is_some(),
        notes: resolution.notes(),
    }
}
