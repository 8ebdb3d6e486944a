//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, age, state machine)
//! - `animal` - Animal profiles, heat history, fertile-dog summaries
//! - `records` - Confirmed heat cycles and planned litters
//! - `snapshot` - Immutable input of a planning run
//! - `heat` - Pure prediction and status-resolution engine
//! - `view` - Per-animal and per-year grouping of predictions
//! - `reminders` - Conversion of upcoming slots into dashboard reminders

pub mod animal;
pub mod foundation;
pub mod heat;
pub mod records;
pub mod reminders;
pub mod snapshot;
pub mod view;
