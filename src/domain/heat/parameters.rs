//! Tunable parameters of the planning engine.
//!
//! Values are supplied by the caller (see `config::PlanningConfig`); the
//! engine's functions never read configuration on their own.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Interval used when history gives nothing to estimate from.
pub const BASELINE_INTERVAL_DAYS: i64 = 180;

/// Minimum number of usable gaps before an estimate can be rated `high`.
pub const HIGH_CONFIDENCE_MIN_GAPS: usize = 4;

/// Parameters that shape estimation, projection, matching and reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningParameters {
    /// Number of years past `today` to project.
    pub horizon_years: u32,
    /// Interval for an animal with a single recorded heat.
    pub default_interval_days: i64,
    /// Half-width of the window in which a planned litter can claim a slot,
    /// and the least half-width for a confirmed cycle.
    pub match_tolerance_days: i64,
    /// Reminders due within this many days are `high` priority.
    pub near_term_reminder_days: i64,
    /// Age from which a fertile dog is flagged for review.
    pub breeding_age_warning_years: u32,
    /// Largest coefficient of variation still rated `high`.
    pub high_confidence_max_cv: f64,
    /// Hard cap on projected slots per animal.
    pub max_projection_iterations: usize,
}

impl Default for PlanningParameters {
    fn default() -> Self {
        Self {
            horizon_years: 2,
            default_interval_days: BASELINE_INTERVAL_DAYS,
            match_tolerance_days: 14,
            near_term_reminder_days: 30,
            breeding_age_warning_years: 8,
            high_confidence_max_cv: 0.15,
            max_projection_iterations: 120,
        }
    }
}

impl PlanningParameters {
    pub fn with_horizon_years(mut self, years: u32) -> Self {
        self.horizon_years = years;
        self
    }

    pub fn with_match_tolerance_days(mut self, days: i64) -> Self {
        self.match_tolerance_days = days;
        self
    }

    pub fn with_max_projection_iterations(mut self, cap: usize) -> Self {
        self.max_projection_iterations = cap;
        self
    }

    /// Last date (inclusive) a projected slot may fall on.
    pub fn horizon_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_months(Months::new(self.horizon_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX)
    }
}
