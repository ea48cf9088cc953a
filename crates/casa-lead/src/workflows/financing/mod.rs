//! Financing capacity and property matching for the subsidized housing program.
//!
//! The affordability stage turns income (and an optional target price) into a
//! quote; the eligibility stage filters and orders a caller-supplied catalog
//! against that quote. Both stages are pure.

mod affordability;
mod eligibility;
mod simulation;
mod tiers;

pub use affordability::{
    quote, AffordabilityQuote, SimulationRequest, SimulationScenario, INCOME_COMMITMENT_RATIO,
};
pub use eligibility::{
    select_eligible, PricedListing, FALLBACK_SUGGESTIONS, TARGET_BAND_CEILING, TARGET_BAND_FLOOR,
};
pub use simulation::{
    simulate, FinancingSimulator, SimulationPolicy, SimulationResult, DEFAULT_MARGIN_FACTOR,
};
pub use tiers::{tier_for_income, SubsidyTier, SUBSIDY_TIERS};
