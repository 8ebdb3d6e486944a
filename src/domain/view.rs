//! Prediction View - groups generated predictions for display and search.
//!
//! Built once per plan. Grouping and filtering only borrow from the
//! generated set; nothing here recomputes predictions.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::animal::FertileDog;
use crate::domain::foundation::AnimalId;
use crate::domain::heat::HeatPrediction;

/// Predictions keyed by animal, each list in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionView {
    by_animal: BTreeMap<AnimalId, Vec<HeatPrediction>>,
}

impl PredictionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups a flat list of predictions by animal.
    pub fn from_predictions(predictions: impl IntoIterator<Item = HeatPrediction>) -> Self {
        let mut view = Self::new();
        for prediction in predictions {
            view.by_animal
                .entry(prediction.animal_id)
                .or_default()
                .push(prediction);
        }
        for list in view.by_animal.values_mut() {
            list.sort_by_key(|p| p.date);
        }
        view
    }

    /// Replaces an animal's predictions.
    pub fn insert_animal(&mut self, animal_id: AnimalId, mut predictions: Vec<HeatPrediction>) {
        predictions.sort_by_key(|p| p.date);
        self.by_animal.insert(animal_id, predictions);
    }

    pub fn by_animal(&self) -> &BTreeMap<AnimalId, Vec<HeatPrediction>> {
        &self.by_animal
    }

    /// Predictions of one animal; empty if the animal is unknown.
    pub fn for_animal(&self, animal_id: &AnimalId) -> &[HeatPrediction] {
        self.by_animal
            .get(animal_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeatPrediction> {
        self.by_animal.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_animal.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Year buckets for multi-year display, ordered by date then animal name.
    pub fn by_year(&self) -> BTreeMap<i32, Vec<&HeatPrediction>> {
        let mut buckets: BTreeMap<i32, Vec<&HeatPrediction>> = BTreeMap::new();
        for prediction in self.iter() {
            buckets.entry(prediction.year).or_default().push(prediction);
        }
        for bucket in buckets.values_mut() {
            bucket.sort_by(|a, b| {
                a.date
                    .cmp(&b.date)
                    .then_with(|| a.animal_name.cmp(&b.animal_name))
            });
        }
        buckets
    }

    /// Years that have at least one prediction, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.by_year().into_keys().collect()
    }

    /// Dogs whose name contains `query`, each paired with its full prediction list.
    pub fn filter_by_name<'a>(
        &'a self,
        dogs: &'a [FertileDog],
        query: &str,
    ) -> Vec<(&'a FertileDog, &'a [HeatPrediction])> {
        dogs.iter()
            .filter(|dog| dog.matches_name(query))
            .map(|dog| (dog, self.for_animal(&dog.animal_id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animal::{Animal, Sex};
    use crate::domain::foundation::PredictionId;
    use crate::domain::heat::{Confidence, HeatStatus};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(animal: &Animal, index: usize, on: NaiveDate) -> HeatPrediction {
        HeatPrediction {
            id: PredictionId::derive(&animal.id, index),
            animal_id: animal.id,
            animal_name: animal.name.clone(),
            index,
            date: on,
            projected_date: on,
            year: HeatPrediction::year_of(on),
            status: HeatStatus::Predicted,
            confidence: Confidence::Medium,
            interval_days: 180,
            age_at_heat: None,
            has_planned_litter: false,
            notes: None,
        }
    }

    fn dog(animal: &Animal) -> FertileDog {
        FertileDog::assess(animal, 180, Confidence::Medium, &[], date(2025, 1, 1), 8)
    }

    #[test]
    fn groups_by_animal_in_date_order() {
        let bella = Animal::new("Bella", Sex::Female).unwrap();
        let luna = Animal::new("Luna", Sex::Female).unwrap();
        let view = PredictionView::from_predictions(vec![
            slot(&bella, 1, date(2025, 12, 1)),
            slot(&luna, 0, date(2025, 3, 1)),
            slot(&bella, 0, date(2025, 6, 1)),
        ]);

        let dates: Vec<NaiveDate> = view.for_animal(&bella.id).iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2025, 6, 1), date(2025, 12, 1)]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn unknown_animal_has_no_predictions() {
        let view = PredictionView::new();
        assert!(view.for_animal(&AnimalId::new()).is_empty());
        assert!(view.is_empty());
    }

    #[test]
    fn year_buckets_are_chronological() {
        let bella = Animal::new("Bella", Sex::Female).unwrap();
        let luna = Animal::new("Luna", Sex::Female).unwrap();
        let view = PredictionView::from_predictions(vec![
            slot(&luna, 0, date(2025, 8, 1)),
            slot(&bella, 0, date(2025, 2, 1)),
            slot(&bella, 1, date(2026, 1, 15)),
        ]);

        let years = view.by_year();
        assert_eq!(view.years(), vec![2025, 2026]);
        let names: Vec<&str> = years[&2025].iter().map(|p| p.animal_name.as_str()).collect();
        assert_eq!(names, vec!["Bella", "Luna"]);
        assert_eq!(years[&2026].len(), 1);
    }

    #[test]
    fn name_filter_keeps_full_prediction_list() {
        let bella = Animal::new("Bella", Sex::Female).unwrap();
        let max = Animal::new("Max", Sex::Female).unwrap();
        let view = PredictionView::from_predictions(vec![
            slot(&bella, 0, date(2025, 6, 1)),
            slot(&bella, 1, date(2025, 12, 1)),
            slot(&max, 0, date(2025, 7, 1)),
        ]);
        let dogs = vec![dog(&bella), dog(&max)];

        let filtered = view.filter_by_name(&dogs, "bell");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].0.name, "Bella");
        assert_eq!(filtered[0].1, view.for_animal(&bella.id));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn blank_filter_returns_everyone() {
        let bella = Animal::new("Bella", Sex::Female).unwrap();
        let max = Animal::new("Max", Sex::Female).unwrap();
        let view = PredictionView::new();
        let dogs = vec![dog(&bella), dog(&max)];

        assert_eq!(view.filter_by_name(&dogs, "   ").len(), 2);
    }
}
