//! Animal profile as seen by the planning engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Age, AnimalId, ValidationError};

/// Biological sex of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        };
        write!(f, "{}", s)
    }
}

/// Where a heat history entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeatProvenance {
    /// Logged by hand on the animal's profile.
    #[default]
    Manual,
    /// Appended when a projected slot was confirmed.
    ConfirmedPrediction,
}

/// A single recorded heat in an animal's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatHistoryEntry {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub provenance: HeatProvenance,
}

impl HeatHistoryEntry {
    /// Creates a manually logged entry.
    pub fn manual(date: NaiveDate) -> Self {
        Self {
            date,
            notes: None,
            provenance: HeatProvenance::Manual,
        }
    }

    /// Creates an entry derived from a confirmed prediction.
    pub fn confirmed(date: NaiveDate, notes: Option<String>) -> Self {
        Self {
            date,
            notes,
            provenance: HeatProvenance::ConfirmedPrediction,
        }
    }

    /// Attaches notes to the entry.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Animal profile with its heat history.
///
/// History order is the order the entries were recorded in; the estimator
/// treats out-of-order entries as data-quality problems rather than sorting
/// them away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub sex: Sex,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub heat_history: Vec<HeatHistoryEntry>,
    /// Manually configured cycle length in days.
    #[serde(default)]
    pub interval_override_days: Option<i64>,
    #[serde(default)]
    pub retired_from_breeding: bool,
}

impl Animal {
    /// Creates an animal with no history, returning error if the name is blank.
    pub fn new(name: impl Into<String>, sex: Sex) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id: AnimalId::new(),
            name,
            sex,
            birthdate: None,
            heat_history: Vec::new(),
            interval_override_days: None,
            retired_from_breeding: false,
        })
    }

    pub fn with_id(mut self, id: AnimalId) -> Self {
        self.id = id;
        self
    }

    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn with_heat(mut self, entry: HeatHistoryEntry) -> Self {
        self.heat_history.push(entry);
        self
    }

    pub fn with_interval_override(mut self, days: i64) -> Self {
        self.interval_override_days = Some(days);
        self
    }

    pub fn retired(mut self) -> Self {
        self.retired_from_breeding = true;
        self
    }

    /// Heat the projection chain starts from: the latest manually logged heat.
    ///
    /// Entries written back by confirmations refine the interval estimate but
    /// do not move the anchor. The confirmed cycles themselves re-base the
    /// chain when their slots are resolved.
    pub fn projection_anchor(&self) -> Option<NaiveDate> {
        self.heat_history
            .iter()
            .filter(|entry| entry.provenance == HeatProvenance::Manual)
            .map(|entry| entry.date)
            .max()
    }

    /// Latest heat of any provenance.
    pub fn latest_heat(&self) -> Option<NaiveDate> {
        self.heat_history.iter().map(|entry| entry.date).max()
    }

    /// Females that have not been retired are planned for.
    pub fn is_breeding_eligible(&self) -> bool {
        self.sex == Sex::Female && !self.retired_from_breeding
    }

    /// Age on a given date, if the birthdate is known and not after it.
    pub fn age_on(&self, date: NaiveDate) -> Option<Age> {
        self.birthdate.and_then(|birthdate| Age::between(birthdate, date))
    }

    /// Appends a heat entry after a successful confirmation write.
    pub fn record_heat(&mut self, entry: HeatHistoryEntry) {
        self.heat_history.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_rejects_blank_name() {
        assert_eq!(
            Animal::new("  ", Sex::Female).unwrap_err(),
            ValidationError::empty_field("name")
        );
    }

    #[test]
    fn anchor_ignores_recording_order() {
        let animal = Animal::new("Bella", Sex::Female)
            .unwrap()
            .with_heat(HeatHistoryEntry::manual(date(2024, 6, 1)))
            .with_heat(HeatHistoryEntry::manual(date(2023, 12, 1)));
        assert_eq!(animal.projection_anchor(), Some(date(2024, 6, 1)));
    }

    #[test]
    fn anchor_skips_confirmation_entries() {
        let animal = Animal::new("Bella", Sex::Female)
            .unwrap()
            .with_heat(HeatHistoryEntry::manual(date(2024, 1, 1)))
            .with_heat(HeatHistoryEntry::confirmed(date(2024, 7, 2), None));
        assert_eq!(animal.projection_anchor(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn confirmation_only_history_has_no_anchor() {
        let animal = Animal::new("Bella", Sex::Female)
            .unwrap()
            .with_heat(HeatHistoryEntry::confirmed(date(2024, 12, 30), None))
            .with_heat(HeatHistoryEntry::confirmed(date(2024, 7, 2), None));
        assert_eq!(animal.projection_anchor(), None);
        assert_eq!(animal.latest_heat(), Some(date(2024, 12, 30)));
    }

    #[test]
    fn anchor_is_none_without_history() {
        let animal = Animal::new("Bella", Sex::Female).unwrap();
        assert_eq!(animal.projection_anchor(), None);
    }

    #[test]
    fn only_active_females_are_breeding_eligible() {
        let female = Animal::new("Bella", Sex::Female).unwrap();
        let male = Animal::new("Max", Sex::Male).unwrap();
        let retired = Animal::new("Nora", Sex::Female).unwrap().retired();

        assert!(female.is_breeding_eligible());
        assert!(!male.is_breeding_eligible());
        assert!(!retired.is_breeding_eligible());
    }

    #[test]
    fn age_on_requires_birthdate() {
        let animal = Animal::new("Bella", Sex::Female).unwrap();
        assert!(animal.age_on(date(2024, 1, 1)).is_none());

        let animal = animal.with_birthdate(date(2020, 1, 1));
        assert_eq!(
            animal.age_on(date(2024, 7, 1)),
            Some(Age { years: 4, months: 6 })
        );
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let json = r#"{
            "id": "7f1c1a52-3f4e-4c1b-9a7e-3d9b8f0e6a11",
            "name": "Bella",
            "sex": "female",
            "heat_history": [{ "date": "2024-01-01" }]
        }"#;
        let animal: Animal = serde_json::from_str(json).unwrap();
        assert_eq!(animal.birthdate, None);
        assert_eq!(animal.heat_history[0].provenance, HeatProvenance::Manual);
        assert!(!animal.retired_from_breeding);
    }
}
