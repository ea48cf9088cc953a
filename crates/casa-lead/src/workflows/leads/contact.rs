use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::Url;

use super::intake::LeadSubmission;
use crate::formatting::format_brl;
use crate::workflows::catalog::Property;

const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Characters left bare by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Pre-filled broker chat link for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub property_id: String,
    pub url: String,
}

/// Builds messaging links that route a lead to the broker.
#[derive(Debug, Clone)]
pub struct ContactLinkBuilder {
    broker_phone: String,
}

impl ContactLinkBuilder {
    pub fn new(broker_phone: impl Into<String>) -> Self {
        Self {
            broker_phone: broker_phone.into(),
        }
    }

    pub fn message(&self, lead: &LeadSubmission, property: &Property) -> String {
        format!(
            "Olá, sou {} e tenho interesse no imóvel *{}* (Ref: {}).\n\nMinha renda bruta declarada é {}.\n\nPodemos conversar sobre o financiamento?",
            lead.name,
            property.title,
            property.id,
            format_brl(lead.income)
        )
    }

    pub fn link(&self, lead: &LeadSubmission, property: &Property) -> Result<ContactLink, url::ParseError> {
        let base = format!("{MESSAGING_BASE_URL}/{}", self.broker_phone);
        let mut url = Url::parse(&base)?;
        let text = utf8_percent_encode(&self.message(lead, property), URI_COMPONENT).to_string();
        url.set_query(Some(&format!("text={text}")));

        Ok(ContactLink {
            property_id: property.id.to_string(),
            url: url.into(),
        })
    }
}
