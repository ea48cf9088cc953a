use crate::infra::build_services;
use casa_lead::config::{parse_margin_factor, AppConfig};
use casa_lead::error::AppError;
use casa_lead::formatting::{format_brl, format_phone_number, parse_currency_input};
use casa_lead::workflows::financing::SimulationPolicy;
use casa_lead::workflows::leads::{LeadSimulation, LeadSubmission};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Gross monthly household income, e.g. 2500 or "R$ 2.500,00"
    #[arg(long, value_parser = parse_amount)]
    pub(crate) income: f64,
    /// Price of the property the lead has in mind (omit for a potential simulation)
    #[arg(long, value_parser = parse_amount)]
    pub(crate) property_value: Option<f64>,
    /// Lead name used in the broker message
    #[arg(long, default_value = "Visitante")]
    pub(crate) name: String,
    /// Lead phone number
    #[arg(long, default_value = "00000000000")]
    pub(crate) phone: String,
    /// CSV export loaded as the catalog (defaults to APP_CATALOG_CSV, then the sample listing)
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Override the tolerance applied above buying power
    #[arg(long, value_parser = parse_margin_factor)]
    pub(crate) margin_factor: Option<f64>,
}

/// Accepts plain numbers or masked currency input.
fn parse_amount(raw: &str) -> Result<f64, String> {
    if let Ok(value) = raw.trim().parse::<f64>() {
        return Ok(value);
    }
    if raw.chars().any(|ch| ch.is_ascii_digit()) {
        return Ok(parse_currency_input(raw));
    }
    Err(format!("'{raw}' is not an amount"))
}

pub(crate) fn run_simulation(args: SimulateArgs) -> Result<(), AppError> {
    let SimulateArgs {
        income,
        property_value,
        name,
        phone,
        catalog_csv,
        margin_factor,
    } = args;

    let config = AppConfig::load()?;
    let policy_override = margin_factor.map(|margin_factor| SimulationPolicy { margin_factor });
    let seed_csv = catalog_csv.or_else(|| config.catalog.seed_csv.clone());

    let (_catalog, leads) = build_services(&config, policy_override, seed_csv.as_deref())?;
    let lead = LeadSubmission {
        name,
        phone,
        income,
        property_value,
    };
    let simulation = leads.simulate(lead.clone())?;

    for line in render_simulation(&simulation, &lead) {
        println!("{line}");
    }
    Ok(())
}

fn render_simulation(simulation: &LeadSimulation, lead: &LeadSubmission) -> Vec<String> {
    let result = &simulation.result;
    let mut lines = Vec::new();

    lines.push(format!(
        "Lead: {} ({}), declared income {}",
        lead.name.trim(),
        format_phone_number(lead.phone.trim()),
        format_brl(lead.income)
    ));
    match result.target_property_value {
        Some(target) if result.is_specific_simulation => {
            lines.push(format!("Scenario: specific property at {}", format_brl(target)))
        }
        _ => lines.push("Scenario: buying potential".to_string()),
    }
    lines.push(format!(
        "Tier: multiplier {}, subsidy {}",
        simulation.multiplier,
        format_brl(simulation.subsidy)
    ));
    lines.push(format!("Max financing: {}", format_brl(result.max_financing)));
    lines.push(format!(
        "Max installment: {}",
        format_brl(result.max_installment)
    ));

    if result.eligible_properties.is_empty() {
        lines.push("No listings in the catalog.".to_string());
        return lines;
    }

    lines.push(format!(
        "Eligible listings ({}):",
        result.eligible_properties.len()
    ));
    for (property, link) in result
        .eligible_properties
        .iter()
        .zip(simulation.contact_links.iter())
    {
        lines.push(format!(
            "  - {} | {} | {} | {}",
            property.title,
            property.property_type.label(),
            property.location,
            format_brl(property.price)
        ));
        if let Some(photo) = property.cover_image() {
            lines.push(format!("    photo: {photo}"));
        }
        lines.push(format!("    {}", link.url));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use casa_lead::workflows::catalog::sample_catalog;
    use casa_lead::workflows::financing::{FinancingSimulator, SimulationRequest};
    use casa_lead::workflows::leads::ContactLinkBuilder;

    #[test]
    fn amounts_accept_plain_and_masked_input() {
        assert_eq!(parse_amount("2500"), Ok(2500.0));
        assert_eq!(parse_amount("R$ 2.500,00"), Ok(2500.0));
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn render_lists_tier_and_links() {
        let catalog = sample_catalog();
        let lead = LeadSubmission {
            name: "Ana".to_string(),
            phone: "85911112222".to_string(),
            income: 1800.0,
            property_value: None,
        };
        let simulator = FinancingSimulator::default();
        let request = SimulationRequest::potential(1800.0);
        let quote = simulator.quote(&request);
        let result = simulator.assemble(&request, &quote, &catalog);
        let contact = ContactLinkBuilder::new("5585981211819")
            .link(&lead, &catalog[0])
            .expect("link builds");
        let simulation = LeadSimulation {
            result,
            subsidy: quote.subsidy,
            multiplier: quote.multiplier,
            contact_links: vec![contact],
        };

        let lines = render_simulation(&simulation, &lead);

        assert_eq!(
            lines[0],
            "Lead: Ana ((85) 91111-2222), declared income R$\u{a0}1.800,00"
        );
        assert_eq!(lines[1], "Scenario: buying potential");
        assert_eq!(lines[2], "Tier: multiplier 330, subsidy R$\u{a0}55.000,00");
        assert_eq!(lines[3], "Max financing: R$\u{a0}178.200,00");
        assert!(lines
            .iter()
            .any(|line| line.contains("Gran Village do Sol I")));
        assert!(lines
            .last()
            .map(|line| line.trim_start().starts_with("https://wa.me/5585981211819"))
            .unwrap_or(false));
    }
}
