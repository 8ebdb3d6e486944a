//! Breeding-eligible females with their planning summary.

use chrono::NaiveDate;
use serde::Serialize;

use super::animal::Animal;
use crate::domain::foundation::{Age, AnimalId};
use crate::domain::heat::{Confidence, HeatPrediction, HeatStatus};

/// Reasons a fertile dog should be reviewed before planning a litter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BreedingWarning {
    ExceedsBreedingAge { age_years: u32, threshold_years: u32 },
    OverdueHeat { since: NaiveDate },
}

/// Projection of an eligible female for calendar and table display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FertileDog {
    pub animal_id: AnimalId,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub age: Option<Age>,
    pub interval_days: i64,
    pub confidence: Confidence,
    /// First upcoming slot that is not confirmed.
    pub next_heat: Option<NaiveDate>,
    pub warnings: Vec<BreedingWarning>,
    pub needs_warning: bool,
}

impl FertileDog {
    /// Summarizes an eligible animal from its already generated predictions.
    pub fn assess(
        animal: &Animal,
        interval_days: i64,
        confidence: Confidence,
        predictions: &[HeatPrediction],
        today: NaiveDate,
        warning_age_years: u32,
    ) -> Self {
        let age = animal.age_on(today);
        let mut warnings = Vec::new();

        if let Some(age) = age {
            if age.years >= warning_age_years {
                warnings.push(BreedingWarning::ExceedsBreedingAge {
                    age_years: age.years,
                    threshold_years: warning_age_years,
                });
            }
        }

        if let Some(first_overdue) = predictions
            .iter()
            .find(|p| p.status == HeatStatus::Overdue)
        {
            warnings.push(BreedingWarning::OverdueHeat {
                since: first_overdue.date,
            });
        }

        let next_heat = predictions
            .iter()
            .find(|p| p.is_upcoming(today))
            .map(|p| p.date);

        Self {
            animal_id: animal.id,
            name: animal.name.clone(),
            birthdate: animal.birthdate,
            age,
            interval_days,
            confidence,
            next_heat,
            needs_warning: !warnings.is_empty(),
            warnings,
        }
    }

    /// Case-insensitive substring match on the name; a blank query matches.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
