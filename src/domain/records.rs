//! Externally owned records the planning engine reconciles against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnimalId, ConfirmedCycleId, PlannedLitterId};

/// A heat cycle whose actual date the owner has recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedHeatCycle {
    pub id: ConfirmedCycleId,
    pub animal_id: AnimalId,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ConfirmedHeatCycle {
    pub fn new(animal_id: AnimalId, date: NaiveDate, notes: Option<String>) -> Self {
        Self {
            id: ConfirmedCycleId::new(),
            animal_id,
            date,
            notes,
        }
    }
}

/// A declared intent to breed an animal around an expected heat date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedLitter {
    pub id: PlannedLitterId,
    pub animal_id: AnimalId,
    pub expected_heat_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PlannedLitter {
    pub fn new(animal_id: AnimalId, expected_heat_date: NaiveDate, notes: Option<String>) -> Self {
        Self {
            id: PlannedLitterId::new(),
            animal_id,
            expected_heat_date,
            notes,
        }
    }
}

/// Common view over records that can claim a projected slot.
pub(crate) trait SlotClaim {
    fn animal_id(&self) -> &AnimalId;
    fn claim_date(&self) -> NaiveDate;
    fn claim_key(&self) -> uuid::Uuid;
    fn notes(&self) -> Option<&str>;
}

impl SlotClaim for ConfirmedHeatCycle {
    fn animal_id(&self) -> &AnimalId {
        &self.animal_id
    }

    fn claim_date(&self) -> NaiveDate {
        self.date
    }

    fn claim_key(&self) -> uuid::Uuid {
        *self.id.as_uuid()
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl SlotClaim for PlannedLitter {
    fn animal_id(&self) -> &AnimalId {
        &self.animal_id
    }

    fn claim_date(&self) -> NaiveDate {
        self.expected_heat_date
    }

    fn claim_key(&self) -> uuid::Uuid {
        *self.id.as_uuid()
    }

    fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
