//! Breeding Planner - heat cycle prediction and breeding planning engine.
//!
//! Estimates each female's cycle interval from her recorded heats, projects
//! future heats over a planning horizon, reconciles them with confirmed
//! cycles and planned litters, and derives fertile-dog summaries and
//! reminders.
//!
//! - `domain` - pure planning engine and its types
//! - `ports` - storage contracts
//! - `application` - refresh, confirm and plan handlers with bounded retry
//! - `adapters` - in-memory and JSON file stores
//! - `config` - environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
