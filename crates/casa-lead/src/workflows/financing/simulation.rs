use serde::{Deserialize, Serialize};

use super::affordability::{quote, AffordabilityQuote, SimulationRequest};
use super::eligibility::{select_eligible, PricedListing};

/// Tolerance above nominal buying power for potential simulations.
pub const DEFAULT_MARGIN_FACTOR: f64 = 1.10;

/// Tunable knobs of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationPolicy {
    pub margin_factor: f64,
}

impl Default for SimulationPolicy {
    fn default() -> Self {
        Self {
            margin_factor: DEFAULT_MARGIN_FACTOR,
        }
    }
}

/// Outcome returned to the visitor for one simulation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult<P> {
    pub max_financing: f64,
    pub max_installment: f64,
    pub eligible_properties: Vec<P>,
    pub is_specific_simulation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_property_value: Option<f64>,
}

/// Stateless simulator that applies a policy to requests and catalogs.
#[derive(Debug, Clone, Default)]
pub struct FinancingSimulator {
    policy: SimulationPolicy,
}

impl FinancingSimulator {
    pub fn new(policy: SimulationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &SimulationPolicy {
        &self.policy
    }

    pub fn quote(&self, request: &SimulationRequest) -> AffordabilityQuote {
        quote(request)
    }

    pub fn simulate<P>(&self, request: &SimulationRequest, catalog: &[P]) -> SimulationResult<P>
    where
        P: PricedListing + Clone,
    {
        let quote = self.quote(request);
        self.assemble(request, &quote, catalog)
    }

    /// Run the eligibility stage for an already computed quote.
    pub fn assemble<P>(
        &self,
        request: &SimulationRequest,
        quote: &AffordabilityQuote,
        catalog: &[P],
    ) -> SimulationResult<P>
    where
        P: PricedListing + Clone,
    {
        let eligible_properties = select_eligible(quote, catalog, self.policy.margin_factor);

        SimulationResult {
            max_financing: quote.financing,
            max_installment: quote.installment,
            eligible_properties,
            is_specific_simulation: quote.scenario.is_specific(),
            target_property_value: request.property_value,
        }
    }
}

/// Simulate with an explicit policy; the catalog is always passed in.
pub fn simulate<P>(
    request: &SimulationRequest,
    catalog: &[P],
    policy: &SimulationPolicy,
) -> SimulationResult<P>
where
    P: PricedListing + Clone,
{
    FinancingSimulator::new(*policy).simulate(request, catalog)
}
