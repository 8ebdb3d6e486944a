//! Breeding Planner - the pure pipeline from snapshot to plan.
//!
//! ```text
//! KennelSnapshot ─► IntervalEstimator ─► ConfidenceScorer ─► PredictionGenerator
//!                                                         (StatusResolver per slot)
//!                ─► PredictionView + FertileDog list ─► ReminderBridge
//! ```
//!
//! No I/O and no shared state: every call recomputes the full plan from the
//! snapshot it is given.

use chrono::NaiveDate;
use serde::Serialize;

use super::confidence::{Confidence, ConfidenceScorer};
use super::diagnostics::PlanningDiagnostic;
use super::generator::PredictionGenerator;
use super::interval_estimator::{IntervalEstimate, IntervalEstimator};
use super::parameters::PlanningParameters;
use super::prediction::HeatPrediction;
use crate::domain::animal::{Animal, FertileDog};
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter};
use crate::domain::reminders::{Reminder, ReminderBridge};
use crate::domain::snapshot::KennelSnapshot;
use crate::domain::view::PredictionView;

/// Everything computed for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingPlan {
    pub generated_for: NaiveDate,
    pub predictions: PredictionView,
    pub fertile_dogs: Vec<FertileDog>,
    pub reminders: Vec<Reminder>,
    pub diagnostics: Vec<PlanningDiagnostic>,
}

/// Plan for a single animal.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalPlan {
    pub estimate: IntervalEstimate,
    pub confidence: Confidence,
    pub predictions: Vec<HeatPrediction>,
    pub diagnostics: Vec<PlanningDiagnostic>,
}

/// Runs the whole engine over a snapshot.
#[derive(Debug, Clone)]
pub struct BreedingPlanner {
    params: PlanningParameters,
    estimator: IntervalEstimator,
    scorer: ConfidenceScorer,
    reminders: ReminderBridge,
}

impl BreedingPlanner {
    pub fn new(params: PlanningParameters) -> Self {
        Self {
            estimator: IntervalEstimator::new(params.default_interval_days),
            scorer: ConfidenceScorer::new(params.high_confidence_max_cv),
            reminders: ReminderBridge::new(params.near_term_reminder_days),
            params,
        }
    }

    pub fn parameters(&self) -> &PlanningParameters {
        &self.params
    }

    /// Computes predictions, fertile dogs and reminders for every
    /// breeding-eligible animal in the snapshot.
    pub fn plan(&self, snapshot: &KennelSnapshot, today: NaiveDate) -> BreedingPlan {
        let mut predictions = PredictionView::new();
        let mut fertile_dogs = Vec::new();
        let mut diagnostics = Vec::new();

        for animal in snapshot.animals.iter().filter(|a| a.is_breeding_eligible()) {
            let plan = self.plan_animal(
                animal,
                &snapshot.confirmed_cycles,
                &snapshot.planned_litters,
                today,
            );

            fertile_dogs.push(FertileDog::assess(
                animal,
                plan.estimate.interval_days,
                plan.confidence,
                &plan.predictions,
                today,
                self.params.breeding_age_warning_years,
            ));
            diagnostics.extend(plan.diagnostics);
            predictions.insert_animal(animal.id, plan.predictions);
        }

        fertile_dogs.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.animal_id.cmp(&b.animal_id))
        });

        let reminders = self.reminders.reminders(predictions.iter(), today);

        BreedingPlan {
            generated_for: today,
            predictions,
            fertile_dogs,
            reminders,
            diagnostics,
        }
    }

    /// Estimates, scores and projects one animal.
    pub fn plan_animal(
        &self,
        animal: &Animal,
        confirmed: &[ConfirmedHeatCycle],
        planned: &[PlannedLitter],
        today: NaiveDate,
    ) -> AnimalPlan {
        let estimate = self
            .estimator
            .estimate(&animal.heat_history, animal.interval_override_days);
        let confidence = self.scorer.score(&estimate);

        let schedule = PredictionGenerator::new(&self.params).generate(
            animal,
            &estimate,
            confidence,
            confirmed,
            planned,
            today,
        );

        let mut diagnostics: Vec<PlanningDiagnostic> = estimate
            .warnings
            .iter()
            .cloned()
            .map(|warning| PlanningDiagnostic::DataQuality {
                animal_id: animal.id,
                animal_name: animal.name.clone(),
                warning,
            })
            .collect();

        if schedule.age_unavailable {
            diagnostics.push(PlanningDiagnostic::MissingField {
                animal_id: animal.id,
                animal_name: animal.name.clone(),
                field: "birthdate".to_string(),
            });
        }

        if schedule.hit_iteration_cap {
            diagnostics.push(PlanningDiagnostic::IterationCapReached {
                animal_id: animal.id,
                animal_name: animal.name.clone(),
                cap: self.params.max_projection_iterations,
            });
        }

        if schedule.unmatched_confirmed > 0 || schedule.unmatched_planned > 0 {
            diagnostics.push(PlanningDiagnostic::UnmatchedRecords {
                animal_id: animal.id,
                animal_name: animal.name.clone(),
                confirmed: schedule.unmatched_confirmed,
                planned: schedule.unmatched_planned,
            });
        }

        AnimalPlan {
            estimate,
            confidence,
            predictions: schedule.predictions,
            diagnostics,
        }
    }
}

impl Default for BreedingPlanner {
    fn default() -> Self {
        Self::new(PlanningParameters::default())
    }
}
