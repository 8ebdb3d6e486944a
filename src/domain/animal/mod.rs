//! Animal module - profiles, heat history and fertile-dog summaries.

mod animal;
mod fertile_dog;

pub use animal::{Animal, HeatHistoryEntry, HeatProvenance, Sex};
pub use fertile_dog::{BreedingWarning, FertileDog};
