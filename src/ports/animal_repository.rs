//! Animal repository port (read side).
//!
//! Supplies animal profiles with sex, birthdate and heat history. Profile
//! editing lives outside the planning engine.

use async_trait::async_trait;

use crate::domain::animal::Animal;
use crate::domain::foundation::{AnimalId, DomainError};

/// Repository port for animal profiles.
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// List every animal of the kennel.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` / `StorageUnavailable` on fetch failure
    async fn list_animals(&self) -> Result<Vec<Animal>, DomainError>;

    /// Find an animal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AnimalRepository) {}
    }
}
