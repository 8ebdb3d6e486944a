//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine trait
//! that form the vocabulary of the breeding planner domain.

mod age;
mod errors;
mod ids;
mod state_machine;

pub use age::Age;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AnimalId, ConfirmedCycleId, PlannedLitterId, PredictionId, ReminderId};
pub use state_machine::StateMachine;
