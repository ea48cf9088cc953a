use serde::{Deserialize, Serialize};

use crate::workflows::financing::SimulationRequest;

/// Lowest gross monthly income the simulator accepts from visitors.
pub const DEFAULT_MINIMUM_INCOME: f64 = 1500.0;

/// Form submitted by a visitor asking for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub phone: String,
    pub income: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_value: Option<f64>,
}

impl LeadSubmission {
    pub fn simulation_request(&self) -> SimulationRequest {
        SimulationRequest {
            income: self.income,
            property_value: self.property_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadIntakeRules {
    pub minimum_income: f64,
}

impl Default for LeadIntakeRules {
    fn default() -> Self {
        Self {
            minimum_income: DEFAULT_MINIMUM_INCOME,
        }
    }
}

impl LeadIntakeRules {
    /// Check the form fields; returns the submission with trimmed contact data.
    pub fn validate(&self, submission: LeadSubmission) -> Result<LeadSubmission, LeadValidationError> {
        let name = submission.name.trim().to_string();
        let phone = submission.phone.trim().to_string();

        if name.is_empty() {
            return Err(LeadValidationError::MissingName);
        }
        if phone.is_empty() {
            return Err(LeadValidationError::MissingPhone);
        }
        if submission.income.is_nan() || submission.income < self.minimum_income {
            return Err(LeadValidationError::IncomeBelowMinimum {
                income: submission.income,
                minimum: self.minimum_income,
            });
        }

        Ok(LeadSubmission {
            name,
            phone,
            ..submission
        })
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LeadValidationError {
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
    #[error("income {income:.2} is below the required minimum of {minimum:.2}")]
    IncomeBelowMinimum { income: f64, minimum: f64 },
}
