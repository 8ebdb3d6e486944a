//! Interval Estimator - per-animal cycle length from heat history.
//!
//! Consecutive gaps are taken in recorded order. Gaps that are zero or
//! negative (duplicates, out-of-order entries) are dropped and reported.
//! The estimate is a trailing-weighted mean: the newest gap weighs most, so a
//! cycle that drifts over the years is followed instead of being held back by
//! an old outlier.

use serde::Serialize;

use super::parameters::BASELINE_INTERVAL_DAYS;
use crate::domain::animal::HeatHistoryEntry;

/// Where the estimated interval came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalSource {
    /// Weighted mean of recorded gaps.
    History,
    /// Manually configured interval on the animal.
    Override,
    /// Configured default for a single recorded heat.
    Default,
    /// Fixed fallback constant.
    Baseline,
}

/// Non-fatal problems found while estimating. They only lower confidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// Zero or negative gaps were dropped.
    DiscardedGaps { count: usize },
    /// The configured override was not positive and was ignored.
    InvalidOverride { days: i64 },
    /// Several entries were recorded but none gave a usable gap.
    NoUsableGaps,
    /// The computed interval was not positive; the baseline was used instead.
    NonPositiveInterval { computed_days: i64 },
}

/// Result of estimating one animal's cycle interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalEstimate {
    /// Always strictly positive.
    pub interval_days: i64,
    pub source: IntervalSource,
    pub entry_count: usize,
    pub usable_gaps: usize,
    /// Population coefficient of variation of the usable gaps.
    pub coefficient_of_variation: Option<f64>,
    pub warnings: Vec<DataQualityWarning>,
}

/// Estimates a cycle interval from an animal's heat history.
#[derive(Debug, Clone, Copy)]
pub struct IntervalEstimator {
    default_interval_days: i64,
}

impl IntervalEstimator {
    pub fn new(default_interval_days: i64) -> Self {
        Self {
            default_interval_days,
        }
    }

    /// Estimates the interval for `history`, honouring a positive override.
    ///
    /// # Edge Cases
    /// - No entries: baseline constant
    /// - One entry: configured default
    /// - Entries but no usable gap: baseline, flagged
    pub fn estimate(&self, history: &[HeatHistoryEntry], override_days: Option<i64>) -> IntervalEstimate {
        let mut warnings = Vec::new();

        let gaps: Vec<i64> = history
            .windows(2)
            .map(|pair| (pair[1].date - pair[0].date).num_days())
            .collect();
        let usable: Vec<i64> = gaps.iter().copied().filter(|gap| *gap > 0).collect();

        let discarded = gaps.len() - usable.len();
        if discarded > 0 {
            warnings.push(DataQualityWarning::DiscardedGaps { count: discarded });
        }

        let override_days = match override_days {
            Some(days) if days > 0 => Some(days),
            Some(days) => {
                warnings.push(DataQualityWarning::InvalidOverride { days });
                None
            }
            None => None,
        };

        let (computed, source) = if let Some(days) = override_days {
            (days, IntervalSource::Override)
        } else if history.is_empty() {
            (BASELINE_INTERVAL_DAYS, IntervalSource::Baseline)
        } else if history.len() == 1 {
            (self.default_interval_days, IntervalSource::Default)
        } else if usable.is_empty() {
            warnings.push(DataQualityWarning::NoUsableGaps);
            (BASELINE_INTERVAL_DAYS, IntervalSource::Baseline)
        } else {
            (trailing_weighted_mean(&usable), IntervalSource::History)
        };

        let (interval_days, source) = if computed > 0 {
            (computed, source)
        } else {
            warnings.push(DataQualityWarning::NonPositiveInterval {
                computed_days: computed,
            });
            (BASELINE_INTERVAL_DAYS, IntervalSource::Baseline)
        };

        IntervalEstimate {
            interval_days,
            source,
            entry_count: history.len(),
            usable_gaps: usable.len(),
            coefficient_of_variation: coefficient_of_variation(&usable),
            warnings,
        }
    }
}

/// Mean with linearly increasing weights, oldest gap first.
fn trailing_weighted_mean(gaps: &[i64]) -> i64 {
    let (weighted_sum, weight_total) = gaps
        .iter()
        .enumerate()
        .fold((0i64, 0i64), |(sum, total), (i, gap)| {
            let weight = i as i64 + 1;
            (sum + gap * weight, total + weight)
        });

    if weight_total == 0 {
        return 0;
    }
    (weighted_sum as f64 / weight_total as f64).round() as i64
}

fn coefficient_of_variation(gaps: &[i64]) -> Option<f64> {
    if gaps.is_empty() {
        return None;
    }
    let n = gaps.len() as f64;
    let mean = gaps.iter().sum::<i64>() as f64 / n;
    if mean <= 0.0 {
        return None;
    }
    let variance = gaps
        .iter()
        .map(|gap| (*gap as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(variance.sqrt() / mean)
}
