//! RefreshBreedingPlanHandler - Query handler that recomputes the plan.
//!
//! Fetches animals, confirmed cycles and planned litters concurrently, runs
//! the pure planner over the snapshot and keeps the result as the
//! last-known-good plan. When a later fetch fails, the last good plan is
//! served marked stale instead of failing the caller.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::application::retry::RetryPolicy;
use crate::domain::foundation::DomainError;
use crate::domain::heat::{BreedingPlan, BreedingPlanner};
use crate::domain::snapshot::KennelSnapshot;
use crate::ports::{AnimalRepository, ConfirmedCycleRepository, PlannedBreedingRepository};

/// Query to recompute the breeding plan.
#[derive(Debug, Clone, Copy)]
pub struct RefreshBreedingPlanQuery {
    /// Planning date; slots before it are past.
    pub today: NaiveDate,
}

/// Whether the returned plan reflects the latest repository state.
#[derive(Debug, Clone, PartialEq)]
pub enum Freshness {
    Fresh,
    /// Fetching failed; the plan is the last one computed successfully.
    Stale { error: DomainError },
}

/// Result of a refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub plan: BreedingPlan,
    pub freshness: Freshness,
}

impl RefreshOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self.freshness, Freshness::Stale { .. })
    }
}

/// Error type for plan refresh.
#[derive(Debug, Clone, Error)]
pub enum RefreshError {
    /// Fetching failed and there is no earlier plan to fall back to.
    #[error("failed to fetch kennel data: {0}")]
    Fetch(DomainError),
}

/// Handler for recomputing the breeding plan.
pub struct RefreshBreedingPlanHandler {
    animals: Arc<dyn AnimalRepository>,
    confirmed: Arc<dyn ConfirmedCycleRepository>,
    planned: Arc<dyn PlannedBreedingRepository>,
    planner: BreedingPlanner,
    retry: RetryPolicy,
    last_good: RwLock<Option<BreedingPlan>>,
}

impl RefreshBreedingPlanHandler {
    pub fn new(
        animals: Arc<dyn AnimalRepository>,
        confirmed: Arc<dyn ConfirmedCycleRepository>,
        planned: Arc<dyn PlannedBreedingRepository>,
        planner: BreedingPlanner,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            animals,
            confirmed,
            planned,
            planner,
            retry,
            last_good: RwLock::new(None),
        }
    }

    /// The most recent successfully computed plan, if any.
    pub async fn last_good(&self) -> Option<BreedingPlan> {
        self.last_good.read().await.clone()
    }

    pub async fn handle(
        &self,
        query: RefreshBreedingPlanQuery,
    ) -> Result<RefreshOutcome, RefreshError> {
        let snapshot = match self.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(err) => return self.fall_back(err).await,
        };

        let plan = self.planner.plan(&snapshot, query.today);

        for diagnostic in &plan.diagnostics {
            warn!(
                animal_id = %diagnostic.animal_id(),
                diagnostic = %diagnostic,
                "Planning diagnostic"
            );
        }
        debug!(
            animals = snapshot.animals.len(),
            predictions = plan.predictions.len(),
            reminders = plan.reminders.len(),
            today = %query.today,
            "Breeding plan refreshed"
        );

        *self.last_good.write().await = Some(plan.clone());

        Ok(RefreshOutcome {
            plan,
            freshness: Freshness::Fresh,
        })
    }

    async fn fetch_snapshot(&self) -> Result<KennelSnapshot, DomainError> {
        let (animals, confirmed_cycles, planned_litters) = futures::try_join!(
            self.retry.run("list_animals", || self.animals.list_animals()),
            self.retry.run("list_confirmed", || self.confirmed.list_confirmed()),
            self.retry.run("list_planned", || self.planned.list_planned()),
        )?;

        Ok(KennelSnapshot::new(animals, confirmed_cycles, planned_litters))
    }

    async fn fall_back(&self, err: DomainError) -> Result<RefreshOutcome, RefreshError> {
        match self.last_good.read().await.clone() {
            Some(plan) => {
                warn!(
                    error = %err,
                    generated_for = %plan.generated_for,
                    "Refresh failed, serving last known good plan"
                );
                Ok(RefreshOutcome {
                    plan,
                    freshness: Freshness::Stale { error: err },
                })
            }
            None => {
                error!(error = %err, "Refresh failed with no earlier plan");
                Err(RefreshError::Fetch(err))
            }
        }
    }
}
