//! Projected heat slots and their lifecycle status.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;
use super::status_resolver::confirmation_reach;
use crate::domain::foundation::{Age, AnimalId, PredictionId, StateMachine};

/// Lifecycle status of a projected slot.
///
/// `Predicted → Overdue` happens as time passes; only a confirmation moves an
/// overdue slot on. `Planned` is a declared intent. `Confirmed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeatStatus {
    #[default]
    Predicted,
    Overdue,
    Planned,
    Confirmed,
}

impl HeatStatus {
    /// Returns true if the slot still expects a real-world outcome.
    pub fn is_open(&self) -> bool {
        !matches!(self, HeatStatus::Confirmed)
    }
}

impl StateMachine for HeatStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use HeatStatus::*;
        matches!(
            (self, target),
            (Predicted, Overdue)
                | (Predicted, Planned)
                | (Overdue, Planned)
                | (Predicted, Confirmed)
                | (Overdue, Confirmed)
                | (Planned, Confirmed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use HeatStatus::*;
        match self {
            Predicted => vec![Overdue, Planned, Confirmed],
            Overdue => vec![Planned, Confirmed],
            Planned => vec![Confirmed],
            Confirmed => vec![],
        }
    }
}

impl fmt::Display for HeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeatStatus::Predicted => "Predicted",
            HeatStatus::Overdue => "Overdue",
            HeatStatus::Planned => "Planned",
            HeatStatus::Confirmed => "Confirmed",
        };
        write!(f, "{}", s)
    }
}

/// One projected heat slot. Computed from a snapshot, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatPrediction {
    pub id: PredictionId,
    pub animal_id: AnimalId,
    pub animal_name: String,
    /// Sequence index of the slot, counted from the anchor heat.
    pub index: usize,
    /// Slot date; the confirmed date once a confirmation matched.
    pub date: NaiveDate,
    /// Date the interval projected before any correction.
    pub projected_date: NaiveDate,
    pub year: i32,
    pub status: HeatStatus,
    pub confidence: Confidence,
    /// Days since the previous slot (or the anchor heat for the first slot).
    pub interval_days: i64,
    pub age_at_heat: Option<Age>,
    pub has_planned_litter: bool,
    pub notes: Option<String>,
}

impl HeatPrediction {
    /// Year bucket of a slot date.
    pub fn year_of(date: NaiveDate) -> i32 {
        date.year()
    }

    /// Days from `today` until the slot; negative when it lies in the past.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }

    /// True if the slot is today or later and not yet confirmed.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today && self.status.is_open()
    }

    /// True if a heat on `actual` would be matched to this slot on the next
    /// refresh.
    pub fn accepts_confirmation(&self, actual: NaiveDate, tolerance_days: i64) -> bool {
        let reach = confirmation_reach(self.interval_days, tolerance_days);
        (actual - self.projected_date).num_days().abs() <= reach
    }
}
