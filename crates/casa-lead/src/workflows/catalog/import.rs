use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::domain::{PropertyDraft, PropertyType};

const IMAGE_SEPARATOR: char = '|';

#[derive(Debug)]
pub enum CatalogImportError {
    Csv(csv::Error),
    UnknownPropertyType { line: u64, value: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::UnknownPropertyType { line, value } => write!(
                f,
                "unknown property type '{}' on line {}",
                value, line
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::UnknownPropertyType { .. } => None,
        }
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads listing drafts from a spreadsheet export.
pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyDraft>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut drafts = Vec::new();

        for record in csv_reader.deserialize::<CatalogRow>() {
            let row = record?;
            // header is line 1
            let line = drafts.len() as u64 + 2;
            drafts.push(row.into_draft(line)?);
        }

        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    title: String,
    price: f64,
    #[serde(rename = "type")]
    property_type: String,
    location: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    images: Option<String>,
    #[serde(default)]
    bedrooms: u32,
    #[serde(default)]
    bathrooms: u32,
    #[serde(default)]
    size: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    youtube_video_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    google_maps_link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl CatalogRow {
    fn into_draft(self, line: u64) -> Result<PropertyDraft, CatalogImportError> {
        let property_type = PropertyType::parse(&self.property_type).ok_or_else(|| {
            CatalogImportError::UnknownPropertyType {
                line,
                value: self.property_type.clone(),
            }
        })?;

        let images = self
            .images
            .as_deref()
            .map(split_images)
            .unwrap_or_default();

        Ok(PropertyDraft {
            title: self.title,
            price: self.price,
            property_type,
            location: self.location,
            images,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            size: self.size,
            youtube_video_id: self.youtube_video_id,
            google_maps_link: self.google_maps_link,
            description: self.description,
        })
    }
}

fn split_images(raw: &str) -> Vec<String> {
    raw.split(IMAGE_SEPARATOR)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
