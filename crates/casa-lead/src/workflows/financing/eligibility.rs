use super::affordability::{AffordabilityQuote, SimulationScenario};

/// Lower edge of the band around a target price.
pub const TARGET_BAND_FLOOR: f64 = 0.8;
/// Upper edge of the band around a target price.
pub const TARGET_BAND_CEILING: f64 = 1.2;
/// Number of cheapest listings suggested when nothing matches.
pub const FALLBACK_SUGGESTIONS: usize = 2;

/// Read access the matcher needs from a catalog entry.
pub trait PricedListing {
    fn listing_id(&self) -> &str;
    fn price(&self) -> f64;
}

/// Pick and order the listings that suit a quote.
///
/// Never returns an empty set for a non-empty catalog: when no listing
/// matches, the two cheapest catalog entries are suggested instead.
pub fn select_eligible<P>(quote: &AffordabilityQuote, catalog: &[P], margin_factor: f64) -> Vec<P>
where
    P: PricedListing + Clone,
{
    let eligible = match quote.scenario {
        SimulationScenario::Specific { target_price } => near_target(catalog, target_price),
        SimulationScenario::Potential => {
            within_budget(catalog, quote.buying_power() * margin_factor)
        }
    };

    if eligible.is_empty() && !catalog.is_empty() {
        return cheapest(catalog, FALLBACK_SUGGESTIONS);
    }

    eligible
}

fn near_target<P>(catalog: &[P], target_price: f64) -> Vec<P>
where
    P: PricedListing + Clone,
{
    let min_price = target_price * TARGET_BAND_FLOOR;
    let max_price = target_price * TARGET_BAND_CEILING;

    let mut matches: Vec<P> = catalog
        .iter()
        .filter(|listing| listing.price() >= min_price && listing.price() <= max_price)
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        let distance_a = (a.price() - target_price).abs();
        let distance_b = (b.price() - target_price).abs();
        distance_a.total_cmp(&distance_b)
    });
    matches
}

fn within_budget<P>(catalog: &[P], ceiling: f64) -> Vec<P>
where
    P: PricedListing + Clone,
{
    let mut matches: Vec<P> = catalog
        .iter()
        .filter(|listing| listing.price() <= ceiling)
        .cloned()
        .collect();
    sort_by_price(&mut matches);
    matches
}

fn cheapest<P>(catalog: &[P], count: usize) -> Vec<P>
where
    P: PricedListing + Clone,
{
    let mut sorted = catalog.to_vec();
    sort_by_price(&mut sorted);
    sorted.truncate(count);
    sorted
}

fn sort_by_price<P: PricedListing>(listings: &mut [P]) {
    listings.sort_by(|a, b| a.price().total_cmp(&b.price()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::financing::affordability::{quote, SimulationRequest};

    #[derive(Debug, Clone, PartialEq)]
    struct Listing(&'static str, f64);

    impl PricedListing for Listing {
        fn listing_id(&self) -> &str {
            self.0
        }

        fn price(&self) -> f64 {
            self.1
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&'static str> {
        listings.iter().map(|listing| listing.0).collect()
    }

    #[test]
    fn band_is_inclusive_on_both_edges() {
        let catalog = vec![
            Listing("low-edge", 160_000.0),
            Listing("below", 159_999.0),
            Listing("high-edge", 240_000.0),
            Listing("above", 240_001.0),
        ];
        let quote = quote(&SimulationRequest::targeting(3000.0, 200_000.0));

        let eligible = select_eligible(&quote, &catalog, 1.10);

        assert_eq!(ids(&eligible), vec!["low-edge", "high-edge"]);
    }

    #[test]
    fn equal_distances_keep_catalog_order() {
        let catalog = vec![
            Listing("over", 210_000.0),
            Listing("under", 190_000.0),
            Listing("exact", 200_000.0),
        ];
        let quote = quote(&SimulationRequest::targeting(3000.0, 200_000.0));

        let eligible = select_eligible(&quote, &catalog, 1.10);

        assert_eq!(ids(&eligible), vec!["exact", "over", "under"]);
    }

    #[test]
    fn budget_ceiling_applies_margin() {
        let catalog = vec![
            Listing("stretch", 250_000.0),
            Listing("cheap", 120_000.0),
            Listing("too-much", 260_000.0),
        ];
        let quote = quote(&SimulationRequest::potential(1800.0));

        let eligible = select_eligible(&quote, &catalog, 1.10);

        assert_eq!(ids(&eligible), vec!["cheap", "stretch"]);
    }

    #[test]
    fn fallback_with_single_listing_returns_it() {
        let catalog = vec![Listing("only", 900_000.0)];
        let quote = quote(&SimulationRequest::potential(1800.0));

        let eligible = select_eligible(&quote, &catalog, 1.10);

        assert_eq!(ids(&eligible), vec!["only"]);
    }

    #[test]
    fn empty_catalog_stays_empty() {
        let quote = quote(&SimulationRequest::targeting(1800.0, 200_000.0));

        let eligible = select_eligible::<Listing>(&quote, &[], 1.10);

        assert!(eligible.is_empty());
    }
}
