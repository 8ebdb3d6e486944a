//! File-backed kennel store.
//!
//! Keeps the whole kennel as one JSON document (`KennelSnapshot`). Writes go
//! to a sibling temp file that is then renamed over the document, so a
//! failed write never leaves a half-written file behind. A missing file is
//! an empty kennel.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::animal::{Animal, HeatHistoryEntry};
use crate::domain::foundation::{AnimalId, DomainError, ErrorCode};
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter};
use crate::domain::snapshot::KennelSnapshot;
use crate::ports::{AnimalRepository, ConfirmedCycleRepository, PlannedBreedingRepository};

/// Kennel data stored in a JSON file.
#[derive(Debug)]
pub struct JsonFileKennelStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileKennelStore {
    /// Create a store backed by the file at `path`.
    ///
    /// # Example
    /// ```ignore
    /// let store = JsonFileKennelStore::new("./data/kennel.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "kennel.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Reads the document; a missing file yields an empty kennel.
    pub async fn load(&self) -> Result<KennelSnapshot, DomainError> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Kennel file missing, starting empty");
                return Ok(KennelSnapshot::default());
            }
            Err(e) => return Err(io_error("read", &self.path, e)),
        };

        serde_json::from_str(&json).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, "Kennel file is not valid JSON")
                .with_detail("path", self.path.display().to_string())
                .with_detail("reason", e.to_string())
        })
    }

    /// Writes the whole document atomically.
    pub async fn save(&self, snapshot: &KennelSnapshot) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, "Failed to serialize kennel")
                .with_detail("reason", e.to_string())
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error("create directory", parent, e))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| io_error("write", &temp, e))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error("rename", &self.path, e))?;

        debug!(path = %self.path.display(), "Kennel file saved");
        Ok(())
    }

    async fn modify<T>(
        &self,
        change: impl FnOnce(&mut KennelSnapshot) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut snapshot = self.load().await?;
        let value = change(&mut snapshot)?;
        self.save(&snapshot).await?;
        Ok(value)
    }
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::new(
        ErrorCode::StorageUnavailable,
        format!("Failed to {} kennel file", action),
    )
    .with_detail("path", path.display().to_string())
    .with_detail("reason", err.to_string())
}

fn animal_not_found(id: &AnimalId) -> DomainError {
    DomainError::new(ErrorCode::AnimalNotFound, "Animal not found")
        .with_detail("animal_id", id.to_string())
}

#[async_trait]
impl AnimalRepository for JsonFileKennelStore {
    async fn list_animals(&self) -> Result<Vec<Animal>, DomainError> {
        Ok(self.load().await?.animals)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError> {
        Ok(self.load().await?.animal(id).cloned())
    }
}

#[async_trait]
impl ConfirmedCycleRepository for JsonFileKennelStore {
    async fn list_confirmed(&self) -> Result<Vec<ConfirmedHeatCycle>, DomainError> {
        Ok(self.load().await?.confirmed_cycles)
    }

    async fn record_confirmed_heat(
        &self,
        animal_id: &AnimalId,
        date: NaiveDate,
        notes: Option<String>,
    ) -> Result<ConfirmedHeatCycle, DomainError> {
        self.modify(|snapshot| {
            snapshot
                .animal_mut(animal_id)
                .ok_or_else(|| animal_not_found(animal_id))?
                .record_heat(HeatHistoryEntry::confirmed(date, notes.clone()));

            let cycle = ConfirmedHeatCycle::new(*animal_id, date, notes);
            snapshot.confirmed_cycles.push(cycle.clone());
            Ok(cycle)
        })
        .await
    }
}

#[async_trait]
impl PlannedBreedingRepository for JsonFileKennelStore {
    async fn list_planned(&self) -> Result<Vec<PlannedLitter>, DomainError> {
        Ok(self.load().await?.planned_litters)
    }

    async fn save_planned_litter(
        &self,
        animal_id: &AnimalId,
        expected_heat_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<PlannedLitter, DomainError> {
        self.modify(|snapshot| {
            if snapshot.animal(animal_id).is_none() {
                return Err(animal_not_found(animal_id));
            }
            let litter = PlannedLitter::new(*animal_id, expected_heat_date, notes);
            snapshot.planned_litters.push(litter.clone());
            Ok(litter)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::animal::{HeatProvenance, Sex};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seeded_store(dir: &TempDir) -> (JsonFileKennelStore, AnimalId) {
        let store = JsonFileKennelStore::new(dir.path().join("kennel.json"));
        let bella = Animal::new("Bella", Sex::Female)
            .unwrap()
            .with_birthdate(date(2021, 3, 1))
            .with_heat(HeatHistoryEntry::manual(date(2024, 1, 1)));
        let id = bella.id;
        store
            .save(&KennelSnapshot::new(vec![bella], vec![], vec![]))
            .await
            .unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_kennel() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileKennelStore::new(dir.path().join("absent.json"));

        assert!(store.list_animals().await.unwrap().is_empty());
        assert!(store.list_confirmed().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_preserves_snapshot() {
        let dir = TempDir::new().unwrap();
        let (store, id) = seeded_store(&dir).await;

        let animals = store.list_animals().await.unwrap();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].id, id);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileKennelStore::new(dir.path().join("nested/data/kennel.json"));

        store.save(&KennelSnapshot::default()).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn confirmation_persists_cycle_and_history() {
        let dir = TempDir::new().unwrap();
        let (store, id) = seeded_store(&dir).await;

        store
            .record_confirmed_heat(&id, date(2024, 7, 2), Some("on time".to_string()))
            .await
            .unwrap();

        let reopened = JsonFileKennelStore::new(store.path());
        let animal = reopened.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(animal.heat_history.len(), 2);
        assert_eq!(
            animal.heat_history[1].provenance,
            HeatProvenance::ConfirmedPrediction
        );
        assert_eq!(reopened.list_confirmed().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_animal_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let (store, _) = seeded_store(&dir).await;
        let before = fs::read_to_string(store.path()).await.unwrap();

        let err = store
            .save_planned_litter(&AnimalId::new(), date(2025, 1, 1), None)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::AnimalNotFound);
        assert_eq!(fs::read_to_string(store.path()).await.unwrap(), before);
    }

    #[tokio::test]
    async fn corrupt_file_is_reported_and_not_retryable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kennel.json");
        fs::write(&path, "{ not json").await.unwrap();

        let err = JsonFileKennelStore::new(&path).list_animals().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(!err.is_retryable());
    }
}
