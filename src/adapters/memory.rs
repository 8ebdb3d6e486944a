//! In-memory kennel store.
//!
//! Implements all three repository ports over a single `KennelSnapshot`.
//! Used by tests and local development; supports failure injection so
//! retry and stale-plan behavior can be exercised.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::animal::{Animal, HeatHistoryEntry};
use crate::domain::foundation::{AnimalId, DomainError, ErrorCode};
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter};
use crate::domain::snapshot::KennelSnapshot;
use crate::ports::{AnimalRepository, ConfirmedCycleRepository, PlannedBreedingRepository};

#[derive(Debug, Default)]
struct FailureInjection {
    reads: Option<ErrorCode>,
    writes: Option<ErrorCode>,
}

/// Kennel data held in memory.
#[derive(Debug, Default)]
pub struct InMemoryKennelStore {
    data: RwLock<KennelSnapshot>,
    failures: RwLock<FailureInjection>,
}

impl InMemoryKennelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with a snapshot.
    pub fn with_snapshot(snapshot: KennelSnapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
            failures: RwLock::default(),
        }
    }

    /// Adds an animal.
    pub fn insert_animal(&self, animal: Animal) -> Result<(), DomainError> {
        self.write_data()?.animals.push(animal);
        Ok(())
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Result<KennelSnapshot, DomainError> {
        Ok(self.read_data()?.clone())
    }

    /// Makes every subsequent read fail with `code` (or succeed with `None`).
    pub fn fail_reads(&self, code: Option<ErrorCode>) {
        if let Ok(mut failures) = self.failures.write() {
            failures.reads = code;
        }
    }

    /// Makes every subsequent write fail with `code` (or succeed with `None`).
    pub fn fail_writes(&self, code: Option<ErrorCode>) {
        if let Ok(mut failures) = self.failures.write() {
            failures.writes = code;
        }
    }

    fn check(&self, write: bool) -> Result<(), DomainError> {
        let failures = self
            .failures
            .read()
            .map_err(|_| poisoned())?;
        let injected = if write { failures.writes } else { failures.reads };
        match injected {
            Some(code) => Err(DomainError::new(code, "Injected storage failure")),
            None => Ok(()),
        }
    }

    fn read_data(&self) -> Result<RwLockReadGuard<'_, KennelSnapshot>, DomainError> {
        self.data.read().map_err(|_| poisoned())
    }

    fn write_data(&self) -> Result<RwLockWriteGuard<'_, KennelSnapshot>, DomainError> {
        self.data.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Kennel store lock poisoned")
}

#[async_trait]
impl AnimalRepository for InMemoryKennelStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, DomainError> {
        self.check(false)?;
        Ok(self.read_data()?.animals.clone())
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError> {
        self.check(false)?;
        Ok(self.read_data()?.animal(id).cloned())
    }
}

#[async_trait]
impl ConfirmedCycleRepository for InMemoryKennelStore {
    async fn list_confirmed(&self) -> Result<Vec<ConfirmedHeatCycle>, DomainError> {
        self.check(false)?;
        Ok(self.read_data()?.confirmed_cycles.clone())
    }

    async fn record_confirmed_heat(
        &self,
        animal_id: &AnimalId,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Result<ConfirmedHeatCycle, DomainError> {
        self.check(true)?;
        let mut data = self.write_data()?;

        let animal = data.animal_mut(animal_id).ok_or_else(|| {
            DomainError::new(ErrorCode::AnimalNotFound, "Animal not found")
                .with_detail("animal_id", animal_id.to_string())
        })?;
        animal.record_heat(HeatHistoryEntry::confirmed(date, notes.clone()));

        let cycle = ConfirmedHeatCycle::new(*animal_id, date, notes);
        data.confirmed_cycles.push(cycle.clone());
        Ok(cycle)
    }
}

#[async_trait]
impl PlannedBreedingRepository for InMemoryKennelStore {
    async fn list_planned(&self) -> Result<Vec<PlannedLitter>, DomainError> {
        self.check(false)?;
        Ok(self.read_data()?.planned_litters.clone())
    }

    async fn save_planned_litter(
        &self,
        animal_id: &AnimalId,
        expected_heat_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<PlannedLitter, DomainError> {
        self.check(true)?;
        let mut data = self.write_data()?;

        if data.animal(animal_id).is_none() {
            return Err(DomainError::new(ErrorCode::AnimalNotFound, "Animal not found")
                .with_detail("animal_id", animal_id.to_string()));
        }

        let litter = PlannedLitter::new(*animal_id, expected_heat_date, notes);
        data.planned_litters.push(litter.clone());
        Ok(litter)
    }
}
