use std::io::Read;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{Property, PropertyDraft, PropertyId, PropertyPatch, PLACEHOLDER_IMAGE_URL};
use super::import::{CatalogCsvImporter, CatalogImportError};
use super::media::{upload_suffix, MediaError, MediaUpload, MediaUploadPolicy, StoredMediaKey};
use super::repository::{PropertyRepository, RepositoryError};
use super::sample::sample_catalog;

/// Service backing both the broker's catalog editor and the simulation flow.
pub struct CatalogService<R> {
    repository: Arc<R>,
    media: MediaUploadPolicy,
}

impl<R> CatalogService<R>
where
    R: PropertyRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_media_policy(repository, MediaUploadPolicy::default())
    }

    pub fn with_media_policy(repository: Arc<R>, media: MediaUploadPolicy) -> Self {
        Self { repository, media }
    }

    /// Every listing, cheapest first; equal prices fall back to id order.
    pub fn list(&self) -> Result<Vec<Property>, CatalogServiceError> {
        let mut properties = self.repository.list()?;
        properties.sort_by(|a, b| a.price.total_cmp(&b.price).then_with(|| a.id.cmp(&b.id)));
        Ok(properties)
    }

    pub fn get(&self, id: &PropertyId) -> Result<Property, CatalogServiceError> {
        let property = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(property)
    }

    /// Register a listing under a freshly generated id.
    pub fn add(&self, mut draft: PropertyDraft) -> Result<Property, CatalogServiceError> {
        if draft.images.is_empty() {
            draft.images.push(PLACEHOLDER_IMAGE_URL.to_string());
        }

        let property = Property::from_draft(PropertyId::generate(), draft);
        let stored = self.repository.insert(property)?;
        info!(property_id = %stored.id, price = stored.price, "catalog listing added");
        Ok(stored)
    }

    pub fn update(
        &self,
        id: &PropertyId,
        patch: PropertyPatch,
    ) -> Result<Property, CatalogServiceError> {
        let mut property = self.get(id)?;
        property.apply(patch);
        self.repository.update(property.clone())?;
        info!(property_id = %id, "catalog listing updated");
        Ok(property)
    }

    pub fn delete(&self, id: &PropertyId) -> Result<(), CatalogServiceError> {
        self.repository.delete(id)?;
        info!(property_id = %id, "catalog listing removed");
        Ok(())
    }

    /// Catalog handed to the simulator.
    ///
    /// An empty or unreachable store falls back to the built-in sample listings.
    pub fn simulation_catalog(&self) -> Vec<Property> {
        match self.list() {
            Ok(properties) if !properties.is_empty() => properties,
            Ok(_) => {
                warn!("catalog store is empty, using sample listings");
                sample_catalog()
            }
            Err(err) => {
                warn!(error = %err, "catalog store unavailable, using sample listings");
                sample_catalog()
            }
        }
    }

    /// Add every row of a CSV export; returns the listings created.
    pub fn import_csv<Rd: Read>(&self, reader: Rd) -> Result<Vec<Property>, CatalogServiceError> {
        let drafts = CatalogCsvImporter::from_reader(reader)?;
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            created.push(self.add(draft)?);
        }
        info!(count = created.len(), "catalog import finished");
        Ok(created)
    }

    pub fn prepare_upload(&self, upload: &MediaUpload) -> Result<StoredMediaKey, CatalogServiceError> {
        let stored = self.media.prepare(upload, Utc::now(), &upload_suffix())?;
        Ok(stored)
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Import(#[from] CatalogImportError),
    #[error(transparent)]
    Media(#[from] MediaError),
}
