use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::contact::{ContactLink, ContactLinkBuilder};
use super::intake::{LeadIntakeRules, LeadSubmission, LeadValidationError};
use crate::workflows::catalog::{CatalogService, Property, PropertyRepository};
use crate::workflows::financing::{FinancingSimulator, PricedListing, SimulationResult};

/// Response shown to the visitor after a simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSimulation {
    pub result: SimulationResult<Property>,
    pub subsidy: f64,
    pub multiplier: f64,
    pub contact_links: Vec<ContactLink>,
}

/// Service composing intake checks, the simulator, the catalog and broker links.
pub struct LeadSimulationService<R> {
    catalog: Arc<CatalogService<R>>,
    simulator: FinancingSimulator,
    rules: LeadIntakeRules,
    contacts: ContactLinkBuilder,
}

impl<R> LeadSimulationService<R>
where
    R: PropertyRepository + 'static,
{
    pub fn new(
        catalog: Arc<CatalogService<R>>,
        simulator: FinancingSimulator,
        rules: LeadIntakeRules,
        contacts: ContactLinkBuilder,
    ) -> Self {
        Self {
            catalog,
            simulator,
            rules,
            contacts,
        }
    }

    pub fn simulate(&self, submission: LeadSubmission) -> Result<LeadSimulation, LeadServiceError> {
        let lead = self.rules.validate(submission)?;
        let request = lead.simulation_request();
        let catalog = self.catalog.simulation_catalog();

        let quote = self.simulator.quote(&request);
        let result = self.simulator.assemble(&request, &quote, &catalog);
        debug!(
            scenario = ?quote.scenario,
            financing = quote.financing,
            margin_factor = self.simulator.policy().margin_factor,
            eligible = ?result
                .eligible_properties
                .iter()
                .map(|property| property.listing_id())
                .collect::<Vec<_>>(),
            "simulation computed"
        );

        let contact_links = result
            .eligible_properties
            .iter()
            .map(|property| self.contacts.link(&lead, property))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LeadSimulation {
            result,
            subsidy: quote.subsidy,
            multiplier: quote.multiplier,
            contact_links,
        })
    }
}

/// Error raised by the lead simulation service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error("could not build broker contact link: {0}")]
    ContactLink(#[from] url::ParseError),
}
