use super::domain::{Property, PropertyId, PropertyType};

/// Built-in listing used when the catalog store is empty or offline.
pub fn sample_catalog() -> Vec<Property> {
    vec![Property {
        id: PropertyId("gran-village-sol-1".to_string()),
        title: "Gran Village do Sol I".to_string(),
        price: 210_000.0,
        property_type: PropertyType::Apartment,
        location: "Lagoa Redonda, Fortaleza - CE".to_string(),
        images: vec![
            "https://images.unsplash.com/photo-1574362848149-11496d93a7c7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80".to_string(),
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80".to_string(),
            "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80".to_string(),
        ],
        bedrooms: 2,
        bathrooms: 1,
        size: 41.0,
        youtube_video_id: None,
        google_maps_link: Some("https://maps.app.goo.gl/example".to_string()),
        description: Some(
            "Condomínio fechado com piscinas adulto e infantil, salão de festas, beach tennis, churrasqueira e playground. Elegível ao subsídio habitacional."
                .to_string(),
        ),
    }]
}
