//! PlanLitterHandler - Command handler for planning a litter on a slot.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::application::retry::RetryPolicy;
use crate::domain::foundation::{DomainError, StateMachine, ValidationError};
use crate::domain::heat::{HeatPrediction, HeatStatus};
use crate::domain::records::PlannedLitter;
use crate::ports::PlannedBreedingRepository;

/// Command to plan a litter around a predicted heat.
#[derive(Debug, Clone)]
pub struct PlanLitterCommand {
    pub prediction: HeatPrediction,
    pub notes: Option<String>,
}

/// Result of a successful plan.
#[derive(Debug, Clone)]
pub struct PlanLitterResult {
    pub litter: PlannedLitter,
    pub new_status: HeatStatus,
}

/// Error type for litter planning.
#[derive(Debug, Clone, Error)]
pub enum PlanLitterError {
    #[error("invalid transition: {0}")]
    InvalidTransition(ValidationError),

    #[error("failed to save planned litter: {0}")]
    Persistence(DomainError),
}

/// Handler for planning litters.
pub struct PlanLitterHandler {
    repository: Arc<dyn PlannedBreedingRepository>,
    retry: RetryPolicy,
}

impl PlanLitterHandler {
    pub fn new(repository: Arc<dyn PlannedBreedingRepository>, retry: RetryPolicy) -> Self {
        Self { repository, retry }
    }

    pub async fn handle(&self, cmd: PlanLitterCommand) -> Result<PlanLitterResult, PlanLitterError> {
        let new_status = cmd
            .prediction
            .status
            .transition_to(HeatStatus::Planned)
            .map_err(PlanLitterError::InvalidTransition)?;

        let animal_id = cmd.prediction.animal_id;
        let expected = cmd.prediction.date;
        let litter = self
            .retry
            .run("save_planned_litter", || {
                self.repository
                    .save_planned_litter(&animal_id, expected, cmd.notes.clone())
            })
            .await
            .map_err(|err| {
                error!(animal_id = %animal_id, error = %err, "Failed to save planned litter");
                PlanLitterError::Persistence(err)
            })?;

        info!(
            animal_id = %animal_id,
            litter_id = %litter.id,
            expected_heat_date = %litter.expected_heat_date,
            "Litter planned"
        );

        Ok(PlanLitterResult { litter, new_status })
    }
}
