#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use casa_lead::workflows::catalog::{
    CatalogService, Property, PropertyDraft, PropertyId, PropertyRepository, PropertyType,
    RepositoryError,
};

#[derive(Default)]
pub struct MemoryCatalog {
    properties: Mutex<BTreeMap<PropertyId, Property>>,
}

impl PropertyRepository for MemoryCatalog {
    fn list(&self) -> Result<Vec<Property>, RepositoryError> {
        let guard = self.properties.lock().expect("catalog mutex");
        Ok(guard.values().cloned().collect())
    }

    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        let guard = self.properties.lock().expect("catalog mutex");
        Ok(guard.get(id).cloned())
    }

    fn insert(&self, property: Property) -> Result<Property, RepositoryError> {
        let mut guard = self.properties.lock().expect("catalog mutex");
        if guard.contains_key(&property.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    fn update(&self, property: Property) -> Result<(), RepositoryError> {
        let mut guard = self.properties.lock().expect("catalog mutex");
        match guard.get_mut(&property.id) {
            Some(slot) => {
                *slot = property;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, id: &PropertyId) -> Result<(), RepositoryError> {
        let mut guard = self.properties.lock().expect("catalog mutex");
        guard
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct OfflineCatalog;

impl PropertyRepository for OfflineCatalog {
    fn list(&self) -> Result<Vec<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn insert(&self, _property: Property) -> Result<Property, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _property: Property) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn delete(&self, _id: &PropertyId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub fn draft(title: &str, price: f64) -> PropertyDraft {
    PropertyDraft {
        title: title.to_string(),
        price,
        property_type: PropertyType::Apartment,
        location: "Fortaleza - CE".to_string(),
        images: vec![format!("https://img.example/{}.jpg", title.to_lowercase())],
        bedrooms: 2,
        bathrooms: 1,
        size: 44.0,
        youtube_video_id: None,
        google_maps_link: None,
        description: None,
    }
}

pub fn seeded_service(prices: &[(&str, f64)]) -> Arc<CatalogService<MemoryCatalog>> {
    let service = Arc::new(CatalogService::new(Arc::new(MemoryCatalog::default())));
    for (title, price) in prices {
        service.add(draft(title, *price)).expect("seed listing");
    }
    service
}
