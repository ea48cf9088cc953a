//! Visitor intake, simulation responses, and broker hand-off links.

pub mod contact;
pub mod intake;
pub mod router;
pub mod service;

pub use contact::{ContactLink, ContactLinkBuilder};
pub use intake::{LeadIntakeRules, LeadSubmission, LeadValidationError, DEFAULT_MINIMUM_INCOME};
pub use router::lead_router;
pub use service::{LeadServiceError, LeadSimulation, LeadSimulationService};
