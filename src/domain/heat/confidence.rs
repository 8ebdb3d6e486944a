//! Confidence Scorer - how far history supports an interval estimate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::interval_estimator::{IntervalEstimate, IntervalSource};
use super::parameters::HIGH_CONFIDENCE_MIN_GAPS;

/// Qualitative rating of an interval estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// One level lower, saturating at `Low`.
    pub fn downgraded(self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rates interval estimates. Pure: the same estimate always gets the same rating.
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceScorer {
    high_max_cv: f64,
}

impl ConfidenceScorer {
    pub fn new(high_max_cv: f64) -> Self {
        Self { high_max_cv }
    }

    /// Rates an estimate; any data-quality warning costs one level.
    pub fn score(&self, estimate: &IntervalEstimate) -> Confidence {
        let base = self.base_level(estimate);
        if estimate.warnings.is_empty() {
            base
        } else {
            base.downgraded()
        }
    }

    fn base_level(&self, estimate: &IntervalEstimate) -> Confidence {
        let consistent = estimate
            .coefficient_of_variation
            .map_or(false, |cv| cv < self.high_max_cv);

        if estimate.source == IntervalSource::History
            && estimate.usable_gaps >= HIGH_CONFIDENCE_MIN_GAPS
            && consistent
        {
            Confidence::High
        } else if estimate.usable_gaps >= 1 || estimate.entry_count == 1 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
