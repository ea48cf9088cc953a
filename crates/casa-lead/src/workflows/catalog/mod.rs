//! Property catalog maintained by the broker and read by the simulator.

pub mod domain;
pub mod import;
pub mod media;
pub mod repository;
pub mod router;
pub mod sample;
pub mod service;

pub use domain::{Property, PropertyDraft, PropertyId, PropertyPatch, PropertyType};
pub use import::{CatalogCsvImporter, CatalogImportError};
pub use media::{MediaError, MediaUpload, MediaUploadPolicy, StoredMediaKey};
pub use repository::{PropertyRepository, RepositoryError};
pub use router::catalog_router;
pub use sample::sample_catalog;
pub use service::{CatalogService, CatalogServiceError};
