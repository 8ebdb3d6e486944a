//! ConfirmHeatHandler - Command handler for confirming a predicted heat.
//!
//! The handler validates the requested transition and that the actual date
//! lies within the slot's matching window, then delegates the write to
//! `ConfirmedCycleRepository`. Nothing is reflected locally: the caller
//! refreshes the plan once the write is reported successful, and on failure
//! the prediction keeps its prior status.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{error, info};

use crate::application::retry::RetryPolicy;
use crate::domain::foundation::{DomainError, StateMachine, ValidationError};
use crate::domain::heat::{confirmation_reach, HeatPrediction, HeatStatus, PlanningParameters};
use crate::domain::records::ConfirmedHeatCycle;
use crate::ports::ConfirmedCycleRepository;

/// Command to confirm that a predicted heat happened.
#[derive(Debug, Clone)]
pub struct ConfirmHeatCommand {
    /// The slot being confirmed, as shown to the user.
    pub prediction: HeatPrediction,
    /// Date the heat actually started.
    pub actual_date: NaiveDate,
    pub notes: Option<String>,
    /// Planning date; a heat cannot be confirmed ahead of it.
    pub today: NaiveDate,
}

/// Result of a successful confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmHeatResult {
    pub cycle: ConfirmedHeatCycle,
    /// Status the slot will carry after the next refresh.
    pub new_status: HeatStatus,
}

/// Error type for heat confirmation.
#[derive(Debug, Clone, Error)]
pub enum ConfirmHeatError {
    /// The slot's current status cannot move to confirmed.
    #[error("invalid transition: {0}")]
    InvalidTransition(ValidationError),

    /// The actual date lies after the planning date.
    #[error("heat date {actual} is in the future (today is {today})")]
    FutureDate { actual: NaiveDate, today: NaiveDate },

    /// The actual date is too far from the slot to be matched to it.
    #[error("heat date {actual} is more than {reach_days} days from the slot projected for {projected}")]
    OutsideSlotWindow {
        actual: NaiveDate,
        projected: NaiveDate,
        reach_days: i64,
    },

    /// The write failed; the prediction is unchanged.
    #[error("failed to record confirmation: {0}")]
    Persistence(DomainError),
}

/// Handler for confirming heats.
pub struct ConfirmHeatHandler {
    repository: Arc<dyn ConfirmedCycleRepository>,
    retry: RetryPolicy,
    match_tolerance_days: i64,
}

impl ConfirmHeatHandler {
    pub fn new(repository: Arc<dyn ConfirmedCycleRepository>, retry: RetryPolicy) -> Self {
        Self {
            repository,
            retry,
            match_tolerance_days: PlanningParameters::default().match_tolerance_days,
        }
    }

    /// Uses the planner's match tolerance when checking the actual date.
    pub fn with_match_tolerance_days(mut self, days: i64) -> Self {
        self.match_tolerance_days = days;
        self
    }

    pub async fn handle(&self, cmd: ConfirmHeatCommand) -> Result<ConfirmHeatResult, ConfirmHeatError> {
        // 1. Validate status transition
        let new_status = cmd
            .prediction
            .status
            .transition_to(HeatStatus::Confirmed)
            .map_err(ConfirmHeatError::InvalidTransition)?;

        // 2. Reject dates that have not happened yet
        if cmd.actual_date > cmd.today {
            return Err(ConfirmHeatError::FutureDate {
                actual: cmd.actual_date,
                today: cmd.today,
            });
        }

        // 3. The next refresh must be able to match the date to this slot
        if !cmd
            .prediction
            .accepts_confirmation(cmd.actual_date, self.match_tolerance_days)
        {
            return Err(ConfirmHeatError::OutsideSlotWindow {
                actual: cmd.actual_date,
                projected: cmd.prediction.projected_date,
                reach_days: confirmation_reach(
                    cmd.prediction.interval_days,
                    self.match_tolerance_days,
                ),
            });
        }

        // 4. Persist; success is reported by the repository, never assumed
        let animal_id = cmd.prediction.animal_id;
        let cycle = self
            .retry
            .run("record_confirmed_heat", || {
                self.repository
                    .record_confirmed_heat(&animal_id, cmd.actual_date, cmd.notes.clone())
            })
            .await
            .map_err(|err| {
                error!(
                    animal_id = %animal_id,
                    prediction_id = %cmd.prediction.id,
                    error = %err,
                    "Failed to record confirmed heat"
                );
                ConfirmHeatError::Persistence(err)
            })?;

        info!(
            animal_id = %animal_id,
            cycle_id = %cycle.id,
            date = %cycle.date,
            "Heat confirmed"
        );

        Ok(ConfirmHeatResult { cycle, new_status })
    }
}
