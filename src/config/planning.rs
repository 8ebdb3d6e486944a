//! Planning engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::heat::PlanningParameters;

const MAX_HORIZON_YEARS: u32 = 20;

/// Planning configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningConfig {
    /// Years past today to project
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Interval for a single-entry history
    #[serde(default = "default_interval_days")]
    pub default_interval_days: i64,

    /// Window (±days) for matching confirmed and planned records
    #[serde(default = "default_match_tolerance_days")]
    pub match_tolerance_days: i64,

    /// High-priority reminder threshold
    #[serde(default = "default_near_term_reminder_days")]
    pub near_term_reminder_days: i64,

    /// Age that triggers a fertile-dog warning
    #[serde(default = "default_breeding_age_warning_years")]
    pub breeding_age_warning_years: u32,

    /// Coefficient-of-variation threshold for high confidence
    #[serde(default = "default_high_confidence_max_cv")]
    pub high_confidence_max_cv: f64,

    /// Hard cap on projected slots per animal
    #[serde(default = "default_max_projection_iterations")]
    pub max_projection_iterations: usize,
}

impl PlanningConfig {
    /// Convert into the parameters the engine runs with
    pub fn to_parameters(&self) -> PlanningParameters {
        PlanningParameters {
            horizon_years: self.horizon_years,
            default_interval_days: self.default_interval_days,
            match_tolerance_days: self.match_tolerance_days,
            near_term_reminder_days: self.near_term_reminder_days,
            breeding_age_warning_years: self.breeding_age_warning_years,
            high_confidence_max_cv: self.high_confidence_max_cv,
            max_projection_iterations: self.max_projection_iterations,
        }
    }

    /// Validate planning configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.horizon_years == 0 || self.horizon_years > MAX_HORIZON_YEARS {
            return Err(ValidationError::InvalidHorizon);
        }
        if self.default_interval_days <= 0 {
            return Err(ValidationError::InvalidDefaultInterval);
        }
        if self.match_tolerance_days < 0 || self.match_tolerance_days >= self.default_interval_days
        {
            return Err(ValidationError::InvalidMatchTolerance);
        }
        if self.near_term_reminder_days <= 0 {
            return Err(ValidationError::InvalidReminderWindow);
        }
        if self.max_projection_iterations == 0 {
            return Err(ValidationError::InvalidIterationCap);
        }
        if !(self.high_confidence_max_cv > 0.0 && self.high_confidence_max_cv <= 1.0) {
            return Err(ValidationError::InvalidConfidenceThreshold);
        }
        Ok(())
    }
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            horizon_years: default_horizon_years(),
            default_interval_days: default_interval_days(),
            match_tolerance_days: default_match_tolerance_days(),
            near_term_reminder_days: default_near_term_reminder_days(),
            breeding_age_warning_years: default_breeding_age_warning_years(),
            high_confidence_max_cv: default_high_confidence_max_cv(),
            max_projection_iterations: default_max_projection_iterations(),
        }
    }
}

fn default_horizon_years() -> u32 {
    2
}

fn default_interval_days() -> i64 {
    180
}

fn default_match_tolerance_days() -> i64 {
    14
}

fn default_near_term_reminder_days() -> i64 {
    30
}

fn default_breeding_age_warning_years() -> u32 {
    8
}

fn default_high_confidence_max_cv() -> f64 {
    0.15
}

fn default_max_projection_iterations() -> usize {
    120
}
