//! Non-fatal findings reported alongside a breeding plan.

use serde::Serialize;
use std::fmt;

use super::interval_estimator::DataQualityWarning;
use crate::domain::foundation::AnimalId;

/// Something the engine degraded around instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanningDiagnostic {
    /// History was irregular or degenerate; confidence was lowered.
    DataQuality {
        animal_id: AnimalId,
        animal_name: String,
        warning: DataQualityWarning,
    },
    /// A field could not be computed and was left empty on the output.
    MissingField {
        animal_id: AnimalId,
        animal_name: String,
        field: String,
    },
    /// Projection stopped at the iteration cap before reaching the horizon.
    IterationCapReached {
        animal_id: AnimalId,
        animal_name: String,
        cap: usize,
    },
    /// Records no projected slot fell close enough to.
    UnmatchedRecords {
        animal_id: AnimalId,
        animal_name: String,
        confirmed: usize,
        planned: usize,
    },
}

impl PlanningDiagnostic {
    pub fn animal_id(&self) -> &AnimalId {
        match self {
            PlanningDiagnostic::DataQuality { animal_id, .. }
            | PlanningDiagnostic::MissingField { animal_id, .. }
            | PlanningDiagnostic::IterationCapReached { animal_id, .. }
            | PlanningDiagnostic::UnmatchedRecords { animal_id, .. } => animal_id,
        }
    }
}

impl fmt::Display for PlanningDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningDiagnostic::DataQuality {
                animal_name,
                warning,
                ..
            } => write!(f, "{}: irregular heat history ({:?})", animal_name, warning),
            PlanningDiagnostic::MissingField {
                animal_name, field, ..
            } => write!(f, "{}: {} unavailable", animal_name, field),
            PlanningDiagnostic::IterationCapReached {
                animal_name, cap, ..
            } => write!(f, "{}: projection stopped after {} slots", animal_name, cap),
            PlanningDiagnostic::UnmatchedRecords {
                animal_name,
                confirmed,
                planned,
                ..
            } => write!(
                f,
                "{}: {} confirmed cycle(s) and {} planned litter(s) match no predicted heat",
                animal_name, confirmed, planned
            ),
        }
    }
}
