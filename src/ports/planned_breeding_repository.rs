//! Planned breeding repository port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{AnimalId, DomainError};
use crate::domain::records::PlannedLitter;

/// Repository port for planned litters.
#[async_trait]
pub trait PlannedBreedingRepository: Send + Sync {
    /// List all planned litters.
    async fn list_planned(&self) -> Result<Vec<PlannedLitter>, DomainError>;

    /// Persist a planned litter around an expected heat date.
    ///
    /// # Errors
    ///
    /// - `AnimalNotFound` if the animal doesn't exist
    /// - `DatabaseError` / `StorageUnavailable` on persistence failure
    async fn save_planned_litter(
        &self,
        animal_id: &AnimalId,
        expected_heat_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<PlannedLitter, DomainError>;
}
