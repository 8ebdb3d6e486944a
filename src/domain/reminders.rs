//! Reminder Bridge - turns upcoming heat slots into dashboard reminders.
//!
//! Reminder identity is derived from animal id + due date, so recomputing a
//! plan yields the same reminders rather than new ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnimalId, PredictionId, ReminderId};
use crate::domain::heat::{HeatPrediction, HeatStatus};

/// Kind tag understood by the reminder dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    Heat,
}

/// Priority of a reminder; declared most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPriority {
    High,
    Medium,
    Low,
}

/// Generic reminder entry for the dashboard collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    pub animal_id: AnimalId,
    pub prediction_id: PredictionId,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub priority: ReminderPriority,
}

/// Converts predictions into reminders.
#[derive(Debug, Clone, Copy)]
pub struct ReminderBridge {
    near_term_days: i64,
}

impl ReminderBridge {
    pub fn new(near_term_days: i64) -> Self {
        Self { near_term_days }
    }

    /// Priority by distance: near term is high, up to three times that is
    /// medium, anything further is low.
    pub fn priority_for(&self, days_until: i64) -> ReminderPriority {
        if days_until <= self.near_term_days {
            ReminderPriority::High
        } else if days_until <= self.near_term_days.saturating_mul(3) {
            ReminderPriority::Medium
        } else {
            ReminderPriority::Low
        }
    }

    /// Reminders for every upcoming, unconfirmed prediction, ordered by due
    /// date then animal name.
    pub fn reminders<'a>(
        &self,
        predictions: impl IntoIterator<Item = &'a HeatPrediction>,
        today: NaiveDate,
    ) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = predictions
            .into_iter()
            .filter(|p| p.is_upcoming(today))
            .map(|p| self.to_reminder(p, today))
            .collect();

        reminders.sort_by(|a, b| {
            a.due_date
                .cmp(&b.due_date)
                .then_with(|| a.title.cmp(&b.title))
        });
        reminders
    }

    fn to_reminder(&self, prediction: &HeatPrediction, today: NaiveDate) -> Reminder {
        let description = match prediction.status {
            HeatStatus::Planned => format!(
                "{} is expected in heat around {}. A litter is planned for this heat (confidence: {}).",
                prediction.animal_name, prediction.date, prediction.confidence
            ),
            _ => format!(
                "{} is expected in heat around {} (confidence: {}).",
                prediction.animal_name, prediction.date, prediction.confidence
            ),
        };

        Reminder {
            id: ReminderId::derive(&prediction.animal_id, prediction.date),
            animal_id: prediction.animal_id,
            prediction_id: prediction.id,
            title: format!("Heat expected: {}", prediction.animal_name),
            description,
            due_date: prediction.date,
            reminder_type: ReminderType::Heat,
            priority: self.priority_for(prediction.days_until(today)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::heat::Confidence;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(animal_id: AnimalId, name: &str, on: NaiveDate, status: HeatStatus) -> HeatPrediction {
        HeatPrediction {
            id: PredictionId::derive(&animal_id, 0),
            animal_id,
            animal_name: name.to_string(),
            index: 0,
            date: on,
            projected_date: on,
            year: HeatPrediction::year_of(on),
            status,
            confidence: Confidence::Medium,
            interval_days: 180,
            age_at_heat: None,
            has_planned_litter: status == HeatStatus::Planned,
            notes: None,
        }
    }

    #[test]
    fn priority_scales_with_distance() {
        let bridge = ReminderBridge::new(30);
        assert_eq!(bridge.priority_for(0), ReminderPriority::High);
        assert_eq!(bridge.priority_for(30), ReminderPriority::High);
        assert_eq!(bridge.priority_for(31), ReminderPriority::Medium);
        assert_eq!(bridge.priority_for(90), ReminderPriority::Medium);
        assert_eq!(bridge.priority_for(91), ReminderPriority::Low);
    }

    #[test]
    fn skips_past_and_confirmed_slots() {
        let bridge = ReminderBridge::new(30);
        let animal = AnimalId::new();
        let today = date(2025, 6, 1);
        let predictions = vec![
            slot(animal, "Bella", date(2025, 5, 1), HeatStatus::Overdue),
            slot(animal, "Bella", date(2025, 6, 10), HeatStatus::Confirmed),
            slot(animal, "Bella", date(2025, 6, 20), HeatStatus::Predicted),
        ];

        let reminders = bridge.reminders(&predictions, today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].due_date, date(2025, 6, 20));
        assert_eq!(reminders[0].priority, ReminderPriority::High);
        assert_eq!(reminders[0].reminder_type, ReminderType::Heat);
    }

    #[test]
    fn reminder_identity_is_stable_across_runs() {
        let bridge = ReminderBridge::new(30);
        let animal = AnimalId::new();
        let predictions = vec![slot(animal, "Bella", date(2025, 9, 1), HeatStatus::Predicted)];

        let first = bridge.reminders(&predictions, date(2025, 6, 1));
        let second = bridge.reminders(&predictions, date(2025, 6, 2));
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn planned_slot_mentions_litter() {
        let bridge = ReminderBridge::new(30);
        let predictions = vec![slot(AnimalId::new(), "Bella", date(2025, 12, 21), HeatStatus::Planned)];

        let reminders = bridge.reminders(&predictions, date(2025, 6, 1));
        assert!(reminders[0].description.contains("litter is planned"));
        assert_eq!(reminders[0].priority, ReminderPriority::Low);
    }

    #[test]
    fn reminders_are_sorted_by_due_date() {
        let bridge = ReminderBridge::new(30);
        let predictions = vec![
            slot(AnimalId::new(), "Luna", date(2025, 9, 1), HeatStatus::Predicted),
            slot(AnimalId::new(), "Bella", date(2025, 7, 1), HeatStatus::Predicted),
        ];

        let reminders = bridge.reminders(&predictions, date(2025, 6, 1));
        let due: Vec<NaiveDate> = reminders.iter().map(|r| r.due_date).collect();
        assert_eq!(due, vec![date(2025, 7, 1), date(2025, 9, 1)]);
    }

    #[test]
    fn serializes_type_tag_as_heat() {
        let bridge = ReminderBridge::new(30);
        let predictions = vec![slot(AnimalId::new(), "Bella", date(2025, 7, 1), HeatStatus::Predicted)];
        let reminders = bridge.reminders(&predictions, date(2025, 6, 1));

        let json = serde_json::to_value(&reminders[0]).unwrap();
        assert_eq!(json["type"], "heat");
        assert_eq!(json["priority"], "high");
    }
}
