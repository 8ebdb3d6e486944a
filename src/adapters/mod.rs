//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory kennel store for tests and development
//! - `json_file` - kennel persisted as a single JSON document

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileKennelStore;
pub use memory::InMemoryKennelStore;
