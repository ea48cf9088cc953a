use serde::Serialize;

/// Income bracket of the subsidized housing program.
///
/// Brackets are matched against their ceiling only, in ascending order, so the
/// first bracket whose ceiling is at or above the declared income wins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubsidyTier {
    /// Inclusive income ceiling (`None` = no ceiling).
    pub income_ceiling: Option<f64>,
    /// Converts a monthly installment ceiling into a financeable principal.
    pub multiplier: f64,
    /// Flat program contribution deducted from the amount to finance.
    pub subsidy: f64,
}

impl SubsidyTier {
    pub fn admits(&self, income: f64) -> bool {
        match self.income_ceiling {
            Some(ceiling) => income <= ceiling,
            None => true,
        }
    }
}

pub const SUBSIDY_TIERS: [SubsidyTier; 4] = [
    SubsidyTier {
        income_ceiling: Some(2000.0),
        multiplier: 330.0,
        subsidy: 55000.0,
    },
    SubsidyTier {
        income_ceiling: Some(2640.0),
        multiplier: 280.0,
        subsidy: 35000.0,
    },
    SubsidyTier {
        income_ceiling: Some(4400.0),
        multiplier: 220.0,
        subsidy: 15000.0,
    },
    SubsidyTier {
        income_ceiling: None,
        multiplier: 160.0,
        subsidy: 0.0,
    },
];

/// Resolve the bracket for a monthly gross income.
///
/// NaN income admits no ceiling, so it lands in the open-ended bracket.
pub fn tier_for_income(income: f64) -> SubsidyTier {
    SUBSIDY_TIERS
        .iter()
        .copied()
        .find(|tier| tier.admits(income))
        .unwrap_or(SUBSIDY_TIERS[SUBSIDY_TIERS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_incomes_stay_in_lower_bracket() {
        assert_eq!(tier_for_income(2000.0).multiplier, 330.0);
        assert_eq!(tier_for_income(2000.01).multiplier, 280.0);
        assert_eq!(tier_for_income(2640.0).subsidy, 35000.0);
        assert_eq!(tier_for_income(2640.01).subsidy, 15000.0);
        assert_eq!(tier_for_income(4400.0).multiplier, 220.0);
        assert_eq!(tier_for_income(4400.01).multiplier, 160.0);
    }

    #[test]
    fn degenerate_incomes_resolve_to_a_bracket() {
        assert_eq!(tier_for_income(0.0).subsidy, 55000.0);
        assert_eq!(tier_for_income(-500.0).multiplier, 330.0);
        assert_eq!(tier_for_income(f64::NAN).subsidy, 0.0);
    }
}
