//! Confirmed cycle repository port.
//!
//! # Design
//!
//! - **Write reported, never assumed**: `record_confirmed_heat` returns the
//!   persisted record only after the write succeeded. Callers must not
//!   reflect a confirmation locally before that.
//! - **History feedback**: a successful write also appends a
//!   `HeatHistoryEntry` with provenance `ConfirmedPrediction` to the animal,
//!   in the same write.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{AnimalId, DomainError};
use crate::domain::records::ConfirmedHeatCycle;

/// Repository port for confirmed heat cycles.
#[async_trait]
pub trait ConfirmedCycleRepository: Send + Sync {
    /// List all confirmed cycles.
    async fn list_confirmed(&self) -> Result<Vec<ConfirmedHeatCycle>, DomainError>;

    /// Persist a confirmed heat for an animal.
    ///
    /// # Errors
    ///
    /// - `AnimalNotFound` if the animal doesn't exist
    /// - `DatabaseError` / `StorageUnavailable` on persistence failure
    async fn record_confirmed_heat(
        &self,
        animal_id: &AnimalId,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Result<ConfirmedHeatCycle, DomainError>;
}
