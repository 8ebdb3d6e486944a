//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the planning engine and storage. Adapters implement these ports.
//!
//! - `AnimalRepository` - animal profiles with heat history
//! - `ConfirmedCycleRepository` - confirmed cycles, and the confirmation write
//! - `PlannedBreedingRepository` - planned litters, and the plan write

mod animal_repository;
mod confirmed_cycle_repository;
mod planned_breeding_repository;

pub use animal_repository::AnimalRepository;
pub use confirmed_cycle_repository::ConfirmedCycleRepository;
pub use planned_breeding_repository::PlannedBreedingRepository;
