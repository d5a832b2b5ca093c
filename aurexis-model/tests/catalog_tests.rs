use aurexis_model::catalog;
use aurexis_model::{PricingPageId, ServiceDetailContent};
use std::collections::HashSet;

#[test]
fn every_pricing_page_has_content() {
    let pages = catalog::pricing_pages();
    for id in PricingPageId::ALL {
        let page = pages.get(&id).expect("missing pricing page");
        assert!(page.hero.title.is_some(), "{id} has no hero title");
        assert!(!page.plans.is_empty(), "{id} has no plans");
    }
    assert_eq!(pages.len(), PricingPageId::ALL.len());
}

#[test]
fn every_service_has_a_detail() {
    let details = catalog::service_details();
    for service in catalog::services() {
        let detail: &ServiceDetailContent = &details[&service.id];
        assert_eq!(detail.title, service.title);
    }
}

#[test]
fn catalog_ids_are_unique() {
    let ids: HashSet<_> = catalog::services().into_iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), catalog::services().len());
    let ids: HashSet<_> = catalog::pricing_tiers().into_iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), catalog::pricing_tiers().len());
}

#[test]
fn pricing_page_ids_round_trip_through_keys() {
    for id in PricingPageId::ALL {
        assert_eq!(id.as_str().parse::<PricingPageId>().unwrap(), id);
    }
    assert!("unknown".parse::<PricingPageId>().is_err());
}

#[test]
fn singleton_defaults_match_catalog() {
    assert_eq!(aurexis_model::SocialLinks::default(), catalog::social_links());
    assert_eq!(aurexis_model::AboutPageSettings::default(), catalog::about_page_settings());
}
