use super::domain::{Property, PropertyId};

/// Storage abstraction for the property catalog, so the service can be exercised
/// without a live document store.
pub trait PropertyRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Property>, RepositoryError>;
    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError>;
    fn insert(&self, property: Property) -> Result<Property, RepositoryError>;
    fn update(&self, property: Property) -> Result<(), RepositoryError>;
    fn delete(&self, id: &PropertyId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("property already exists")]
    Conflict,
    #[error("property not found")]
    NotFound,
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),
}
