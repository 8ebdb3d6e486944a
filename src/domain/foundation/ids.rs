//! Strongly-typed identifier value objects.
//!
//! Persisted records (animals, confirmed cycles, planned litters) carry random
//! v4 identifiers. Computed artifacts (predictions, reminders) derive v5
//! identifiers from their inputs so recomputation reproduces the same ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Namespace for reminder identities derived from animal id + due date.
const REMINDER_NAMESPACE: Uuid = Uuid::from_u128(0x6d2f_41c9_8a3e_4b57_9c0d_e1f2_a3b4_c5d6);

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

macro_rules! random_id {
    ($name:ident) => {
        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for an animal profile.
    AnimalId
);
random_id!(AnimalId);

uuid_id!(
    /// Unique identifier for a persisted confirmed heat cycle.
    ConfirmedCycleId
);
random_id!(ConfirmedCycleId);

uuid_id!(
    /// Unique identifier for a persisted planned litter.
    PlannedLitterId
);
random_id!(PlannedLitterId);

uuid_id!(
    /// Identifier of a projected heat slot.
    ///
    /// Derived from the animal id and the slot's sequence index, so the same
    /// snapshot always yields the same ids.
    PredictionId
);

impl PredictionId {
    /// Derives the id of the `index`-th projected slot of an animal.
    pub fn derive(animal_id: &AnimalId, index: usize) -> Self {
        let name = format!("slot:{}", index);
        Self(Uuid::new_v5(animal_id.as_uuid(), name.as_bytes()))
    }
}

uuid_id!(
    /// Identifier of a heat reminder.
    ///
    /// Derived from the animal id and the due date so repeated recomputation
    /// reproduces the same reminder instead of adding a new one.
    ReminderId
);

impl ReminderId {
    /// Derives the reminder id for an animal's heat due on `due_date`.
    pub fn derive(animal_id: &AnimalId, due_date: NaiveDate) -> Self {
        let name = format!("{}:{}", animal_id, due_date);
        Self(Uuid::new_v5(&REMINDER_NAMESPACE, name.as_bytes()))
    }
}
