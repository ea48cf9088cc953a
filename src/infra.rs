use casa_lead::config::AppConfig;
use casa_lead::error::AppError;
use casa_lead::workflows::catalog::{
    CatalogService, Property, PropertyId, PropertyRepository, RepositoryError,
};
use casa_lead::workflows::financing::{FinancingSimulator, SimulationPolicy};
use casa_lead::workflows::leads::{ContactLinkBuilder, LeadSimulationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryPropertyRepository {
    properties: Arc<Mutex<BTreeMap<PropertyId, Property>>>,
}

impl InMemoryPropertyRepository {
    fn guard(&self) -> Result<MutexGuard<'_, BTreeMap<PropertyId, Property>>, RepositoryError> {
        self.properties
            .lock()
            .map_err(|_| RepositoryError::Unavailable("catalog mutex poisoned".to_string()))
    }
}

impl PropertyRepository for InMemoryPropertyRepository {
    fn list(&self) -> Result<Vec<Property>, RepositoryError> {
        Ok(self.guard()?.values().cloned().collect())
    }

    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn insert(&self, property: Property) -> Result<Property, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&property.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    fn update(&self, property: Property) -> Result<(), RepositoryError> {
        let mut guard = self.guard()?;
        if guard.contains_key(&property.id) {
            guard.insert(property.id.clone(), property);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn delete(&self, id: &PropertyId) -> Result<(), RepositoryError> {
        self.guard()?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub(crate) type Catalog = CatalogService<InMemoryPropertyRepository>;
pub(crate) type Leads = LeadSimulationService<InMemoryPropertyRepository>;

/// Wire the catalog and the lead simulation service from configuration.
///
/// `policy_override` replaces the configured simulation policy when set.
pub(crate) fn build_services(
    config: &AppConfig,
    policy_override: Option<SimulationPolicy>,
    seed_csv: Option<&Path>,
) -> Result<(Arc<Catalog>, Arc<Leads>), AppError> {
    let catalog = Arc::new(CatalogService::new(Arc::new(
        InMemoryPropertyRepository::default(),
    )));

    if let Some(path) = seed_csv {
        let seeded = catalog.import_csv(File::open(path)?)?.len();
        info!(path = %path.display(), seeded, "catalog seeded from CSV export");
    }

    let leads = Arc::new(LeadSimulationService::new(
        catalog.clone(),
        FinancingSimulator::new(policy_override.unwrap_or_else(|| config.simulation.policy())),
        config.simulation.intake_rules(),
        ContactLinkBuilder::new(config.contact.broker_phone.clone()),
    ));

    Ok((catalog, leads))
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_lead::config::{
        AppEnvironment, CatalogConfig, ContactConfig, ServerConfig, SimulationConfig,
        TelemetryConfig, DEFAULT_BROKER_PHONE,
    };
    use casa_lead::workflows::catalog::{PropertyDraft, PropertyType};

    fn config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            simulation: SimulationConfig {
                margin_factor: 1.10,
                minimum_income: 1500.0,
            },
            contact: ContactConfig {
                broker_phone: DEFAULT_BROKER_PHONE.to_string(),
            },
            catalog: CatalogConfig { seed_csv: None },
        }
    }

    fn draft(title: &str, price: f64) -> PropertyDraft {
        PropertyDraft {
            title: title.to_string(),
            price,
            property_type: PropertyType::Studio,
            location: "Fortaleza - CE".to_string(),
            images: Vec::new(),
            bedrooms: 1,
            bathrooms: 1,
            size: 28.0,
            youtube_video_id: None,
            google_maps_link: None,
            description: None,
        }
    }

    #[test]
    fn repository_rejects_duplicate_ids() {
        let repository = InMemoryPropertyRepository::default();
        let property = Property::from_draft(PropertyId("dup".to_string()), draft("Dup", 1.0));

        repository.insert(property.clone()).expect("first insert");
        let second = repository.insert(property);

        assert!(matches!(second, Err(RepositoryError::Conflict)));
    }

    #[test]
    fn repository_update_requires_existing_listing() {
        let repository = InMemoryPropertyRepository::default();
        let property = Property::from_draft(PropertyId("ghost".to_string()), draft("Ghost", 1.0));

        assert!(matches!(
            repository.update(property),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn services_share_one_catalog() {
        let config = config();
        let (catalog, _leads) =
            build_services(&config, None, None).expect("services build");

        catalog.add(draft("Novo", 120_000.0)).expect("listing added");

        assert_eq!(catalog.list().expect("catalog lists").len(), 1);
    }

    #[test]
    fn seed_csv_populates_catalog() {
        let path = std::env::temp_dir().join(format!(
            "casa-lead-seed-{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "title,price,type,location,bedrooms,bathrooms,size,images,youtube_video_id,google_maps_link,description\n\
Jardins,175000,studio,Caucaia - CE,1,1,30,,,,\n\
Aurora,189000,Casa,Maracanaú - CE,2,1,52,,,,\n",
        )
        .expect("seed file written");

        let built = build_services(&config(), None, Some(&path));
        std::fs::remove_file(&path).expect("seed file removed");
        let (catalog, _leads) = built.expect("services build");

        let titles: Vec<String> = catalog
            .list()
            .expect("catalog lists")
            .into_iter()
            .map(|property| property.title)
            .collect();
        assert_eq!(titles, vec!["Jardins", "Aurora"]);
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let path = std::env::temp_dir().join("casa-lead-seed-does-not-exist.csv");

        let built = build_services(&config(), None, Some(&path));

        assert!(matches!(built, Err(AppError::Io(_))));
    }

    #[test]
    fn repository_lists_in_id_order() {
        let repository = InMemoryPropertyRepository::default();
        for id in ["c", "a", "b"] {
            repository
                .insert(Property::from_draft(PropertyId(id.to_string()), draft(id, 1.0)))
                .expect("insert");
        }

        let ids: Vec<String> = repository
            .list()
            .expect("list")
            .into_iter()
            .map(|property| property.id.0)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
