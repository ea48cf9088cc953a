use serde::{Deserialize, Serialize};

use super::tiers::tier_for_income;

/// Share of gross monthly income that may be committed to the installment.
pub const INCOME_COMMITMENT_RATIO: f64 = 0.30;

/// Numeric input of a simulation: declared income and optional target price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_value: Option<f64>,
}

impl SimulationRequest {
    pub fn potential(income: f64) -> Self {
        Self {
            income,
            property_value: None,
        }
    }

    pub fn targeting(income: f64, property_value: f64) -> Self {
        Self {
            income,
            property_value: Some(property_value),
        }
    }

    /// Target price that drives a specific simulation.
    ///
    /// Zero, negative and NaN prices count as "not supplied".
    pub fn target_price(&self) -> Option<f64> {
        self.property_value.filter(|value| *value > 0.0)
    }
}

/// Which question the simulation answers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SimulationScenario {
    /// How much of a chosen price can be financed.
    Specific { target_price: f64 },
    /// How much can be bought at all.
    Potential,
}

impl SimulationScenario {
    pub fn is_specific(&self) -> bool {
        matches!(self, Self::Specific { .. })
    }
}

/// Output of the affordability stage, consumed by the eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffordabilityQuote {
    pub scenario: SimulationScenario,
    pub financing: f64,
    pub installment: f64,
    pub subsidy: f64,
    pub multiplier: f64,
}

impl AffordabilityQuote {
    /// Nominal purchasing power: financing plus subsidy, no extra down payment.
    pub fn buying_power(&self) -> f64 {
        self.financing + self.subsidy
    }
}

/// Derive financing capacity and installment for a request.
///
/// Total over every numeric input: negative or zero incomes, or targets below
/// the subsidy, produce degenerate (possibly negative) amounts rather than
/// errors.
pub fn quote(request: &SimulationRequest) -> AffordabilityQuote {
    let tier = tier_for_income(request.income);
    let max_income_installment = request.income * INCOME_COMMITMENT_RATIO;
    let max_financing_by_income = max_income_installment * tier.multiplier;

    match request.target_price() {
        Some(target_price) => {
            let financing_needed = target_price - tier.subsidy;
            let financing = financing_needed.min(max_financing_by_income);
            AffordabilityQuote {
                scenario: SimulationScenario::Specific { target_price },
                financing,
                installment: financing / tier.multiplier,
                subsidy: tier.subsidy,
                multiplier: tier.multiplier,
            }
        }
        None => AffordabilityQuote {
            scenario: SimulationScenario::Potential,
            financing: max_financing_by_income,
            installment: max_income_installment,
            subsidy: tier.subsidy,
            multiplier: tier.multiplier,
        },
    }
}
