//! Immutable input snapshot for one planning run.

use serde::{Deserialize, Serialize};

use crate::domain::animal::Animal;
use crate::domain::foundation::AnimalId;
use crate::domain::records::{ConfirmedHeatCycle, PlannedLitter};

/// Animals plus the external records the engine reconciles against.
///
/// Also the document format of the JSON file store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KennelSnapshot {
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub confirmed_cycles: Vec<ConfirmedHeatCycle>,
    #[serde(default)]
    pub planned_litters: Vec<PlannedLitter>,
}

impl KennelSnapshot {
    pub fn new(
        animals: Vec<Animal>,
        confirmed_cycles: Vec<ConfirmedHeatCycle>,
        planned_litters: Vec<PlannedLitter>,
    ) -> Self {
        Self {
            animals,
            confirmed_cycles,
            planned_litters,
        }
    }

    pub fn animal(&self, id: &AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|animal| &animal.id == id)
    }

    pub fn animal_mut(&mut self, id: &AnimalId) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|animal| &animal.id == id)
    }
}
