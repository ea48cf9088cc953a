use serde::{Deserialize, Serialize};
use std::fmt;

use crate::workflows::financing::PricedListing;

/// Image shown for listings registered without any photo.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl PropertyId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Apartment, Self::House, Self::Studio]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartamento",
            Self::House => "Casa",
            Self::Studio => "Studio",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::House => "house",
            Self::Studio => "studio",
        }
    }

    /// Accepts either the snake-case key or the display label.
    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ordered().into_iter().find(|kind| {
            needle.eq_ignore_ascii_case(kind.key()) || needle.eq_ignore_ascii_case(kind.label())
        })
    }
}

/// Listing record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Private area in square meters.
    pub size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    pub fn from_draft(id: PropertyId, draft: PropertyDraft) -> Self {
        let PropertyDraft {
            title,
            price,
            property_type,
            location,
            images,
            bedrooms,
            bathrooms,
            size,
            youtube_video_id,
            google_maps_link,
            description,
        } = draft;

        Self {
            id,
            title,
            price,
            property_type,
            location,
            images,
            bedrooms,
            bathrooms,
            size,
            youtube_video_id,
            google_maps_link,
            description,
        }
    }

    /// Apply the fields present in a patch.
    ///
    /// Images are only replaced by a non-empty list.
    pub fn apply(&mut self, patch: PropertyPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(property_type) = patch.property_type {
            self.property_type = property_type;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(images) = patch.images.filter(|images| !images.is_empty()) {
            self.images = images;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(video) = patch.youtube_video_id {
            self.youtube_video_id = Some(video);
        }
        if let Some(link) = patch.google_maps_link {
            self.google_maps_link = Some(link);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl PricedListing for Property {
    fn listing_id(&self) -> &str {
        self.id.as_str()
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// Listing payload submitted by the catalog editor before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub youtube_video_id: Option<String>,
    #[serde(default)]
    pub google_maps_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "type")]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub youtube_video_id: Option<String>,
    #[serde(default)]
    pub google_maps_link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
