//! Property tests for the heat prediction engine.
//!
//! Histories, overrides and records are generated as day offsets from a fixed
//! base date, including duplicate and out-of-order entries.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use breeding_planner::domain::animal::{Animal, HeatHistoryEntry, Sex};
use breeding_planner::domain::foundation::StateMachine;
use breeding_planner::domain::heat::{
    BreedingPlanner, Confidence, ConfidenceScorer, HeatStatus, IntervalEstimator,
    PlanningParameters,
};
use breeding_planner::domain::records::{ConfirmedHeatCycle, PlannedLitter};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
}

fn day(offset: i64) -> NaiveDate {
    base() + Duration::days(offset)
}

fn animal(history: &[i64], override_days: Option<i64>) -> Animal {
    let mut animal = Animal::new("Bella", Sex::Female)
        .unwrap()
        .with_birthdate(base());
    for offset in history {
        animal = animal.with_heat(HeatHistoryEntry::manual(day(*offset)));
    }
    if let Some(days) = override_days {
        animal = animal.with_interval_override(days);
    }
    animal
}

fn history_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..2500, 0..8)
}

fn override_strategy() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(-30i64..400)
}

fn status_strategy() -> impl Strategy<Value = HeatStatus> {
    prop_oneof![
        Just(HeatStatus::Predicted),
        Just(HeatStatus::Overdue),
        Just(HeatStatus::Planned),
        Just(HeatStatus::Confirmed),
    ]
}

fn params(cap: usize) -> PlanningParameters {
    PlanningParameters::default().with_max_projection_iterations(cap)
}

proptest! {
    #[test]
    fn estimated_interval_is_always_positive(
        history in prop::collection::vec(0i64..2500, 2..10),
        override_days in override_strategy(),
    ) {
        let animal = animal(&history, override_days);
        let estimate = IntervalEstimator::new(180)
            .estimate(&animal.heat_history, animal.interval_override_days);
        prop_assert!(estimate.interval_days > 0);
    }

    #[test]
    fn single_entry_is_never_high_confidence(
        offset in 0i64..2500,
        override_days in override_strategy(),
    ) {
        let animal = animal(&[offset], override_days);
        let estimate = IntervalEstimator::new(180)
            .estimate(&animal.heat_history, animal.interval_override_days);
        prop_assert_ne!(ConfidenceScorer::new(0.15).score(&estimate), Confidence::High);
    }

    #[test]
    fn predictions_are_strictly_increasing_and_bounded(
        history in history_strategy(),
        override_days in override_strategy(),
        confirmed in prop::collection::vec(0i64..3500, 0..6),
        planned in prop::collection::vec(0i64..3500, 0..6),
        today in 0i64..3000,
        cap in 1usize..150,
    ) {
        let animal = animal(&history, override_days);
        let confirmed: Vec<ConfirmedHeatCycle> = confirmed
            .iter()
            .map(|o| ConfirmedHeatCycle::new(animal.id, day(*o), None))
            .collect();
        let planned: Vec<PlannedLitter> = planned
            .iter()
            .map(|o| PlannedLitter::new(animal.id, day(*o), None))
            .collect();

        let plan = BreedingPlanner::new(params(cap))
            .plan_animal(&animal, &confirmed, &planned, day(today));

        prop_assert!(plan.predictions.len() <= cap);
        for pair in plan.predictions.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
        for p in &plan.predictions {
            prop_assert!(p.interval_days > 0);
        }
    }

    #[test]
    fn generation_is_deterministic(
        history in history_strategy(),
        override_days in override_strategy(),
        confirmed in prop::collection::vec(0i64..3500, 0..6),
        today in 0i64..3000,
    ) {
        let animal = animal(&history, override_days);
        let confirmed: Vec<ConfirmedHeatCycle> = confirmed
            .iter()
            .map(|o| ConfirmedHeatCycle::new(animal.id, day(*o), None))
            .collect();
        let planner = BreedingPlanner::default();

        let first = planner.plan_animal(&animal, &confirmed, &[], day(today));
        let second = planner.plan_animal(&animal, &confirmed, &[], day(today));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unmatched_past_slots_are_overdue(
        history in history_strategy(),
        today in 0i64..3000,
    ) {
        let animal = animal(&history, None);
        let today = day(today);

        let plan = BreedingPlanner::default().plan_animal(&animal, &[], &[], today);

        for p in &plan.predictions {
            let expected = if p.date < today { HeatStatus::Overdue } else { HeatStatus::Predicted };
            prop_assert_eq!(p.status, expected);
        }
    }

    #[test]
    fn records_are_claimed_at_most_once(
        history in history_strategy(),
        confirmed in prop::collection::vec(0i64..3500, 0..8),
        planned in prop::collection::vec(0i64..3500, 0..8),
        tolerance in 0i64..60,
        today in 0i64..3000,
    ) {
        let animal = animal(&history, None);
        let confirmed: Vec<ConfirmedHeatCycle> = confirmed
            .iter()
            .enumerate()
            .map(|(i, o)| ConfirmedHeatCycle::new(animal.id, day(*o), Some(format!("c{}", i))))
            .collect();
        let planned: Vec<PlannedLitter> = planned
            .iter()
            .enumerate()
            .map(|(i, o)| PlannedLitter::new(animal.id, day(*o), Some(format!("p{}", i))))
            .collect();
        let params = PlanningParameters::default().with_match_tolerance_days(tolerance);

        let plan = BreedingPlanner::new(params)
            .plan_animal(&animal, &confirmed, &planned, day(today));

        let mut seen = HashSet::new();
        for p in &plan.predictions {
            if matches!(p.status, HeatStatus::Confirmed | HeatStatus::Planned) {
                let note = p.notes.clone().unwrap_or_default();
                prop_assert!(seen.insert(note.clone()), "record {} claimed twice", note);
            }
        }
        let planned_slots = plan.predictions.iter().filter(|p| p.has_planned_litter).count();
        prop_assert!(planned_slots <= planned.len());
    }

    #[test]
    fn confirmation_only_moves_open_slots(status in status_strategy()) {
        match status.transition_to(HeatStatus::Confirmed) {
            Ok(next) => {
                prop_assert_ne!(status, HeatStatus::Confirmed);
                prop_assert_eq!(next, HeatStatus::Confirmed);
            }
            Err(_) => prop_assert_eq!(status, HeatStatus::Confirmed),
        }
    }
}
