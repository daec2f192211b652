//! Unit tests for the service catalog and its configuration seed.

use crate::ontology::domain::{OntologyDomainError, OntologyError, ServiceId};
use crate::ontology::{
    AIGENTS_RSS_FEEDER_ID, OntologyConfig, ServiceEntry, ServiceOntology, TEXT_SUMMARIZER_ID,
};
use rstest::rstest;

fn feed_entry(id: &str) -> ServiceEntry {
    ServiceEntry {
        id: id.to_owned(),
        display_name: "Feed Service".to_owned(),
        category: "feed".to_owned(),
        input_kinds: vec!["rss_feed".to_owned()],
        features: Vec::new(),
    }
}

#[rstest]
fn builtin_catalog_knows_shipped_services() {
    let ontology = ServiceOntology::builtin().expect("builtin catalog should build");

    for id in [AIGENTS_RSS_FEEDER_ID, TEXT_SUMMARIZER_ID] {
        let service_id = ServiceId::new(id).expect("valid id");
        assert!(ontology.contains(&service_id), "missing {id}");
    }
    assert_eq!(ontology.len(), 2);
    assert!(!ontology.is_empty());
}

#[rstest]
fn get_service_is_idempotent() {
    let ontology = ServiceOntology::builtin().expect("builtin catalog should build");
    let service_id = ServiceId::new(AIGENTS_RSS_FEEDER_ID).expect("valid id");

    let first = ontology.get_service(&service_id).expect("known service");
    let second = ontology.get_service(&service_id).expect("known service");

    assert_eq!(first, second);
    assert_eq!(first.display_name(), "Aigents RSS Feeder");
    assert!(first.capabilities().accepts_input_kind("rss_feed"));
}

#[rstest]
fn unknown_service_lookup_fails() {
    let ontology = ServiceOntology::builtin().expect("builtin catalog should build");
    let service_id = ServiceId::new("never_registered").expect("valid id");

    let result = ontology.get_service(&service_id);

    assert!(matches!(result, Err(OntologyError::UnknownService(id)) if id == service_id));
}

#[rstest]
fn empty_catalog_is_rejected() {
    let config = OntologyConfig {
        services: Vec::new(),
    };

    let result = ServiceOntology::from_config(config);

    assert!(matches!(result, Err(OntologyError::Configuration(_))));
}

#[rstest]
fn duplicate_identifier_in_catalog_is_rejected() {
    let config = OntologyConfig {
        services: vec![feed_entry("feed_service"), feed_entry("feed_service")],
    };

    let result = ServiceOntology::from_config(config);

    assert!(matches!(result, Err(OntologyError::Configuration(_))));
}

#[rstest]
fn invalid_entry_identifier_is_rejected() {
    let config = OntologyConfig {
        services: vec![feed_entry("feed-service")],
    };

    let result = ServiceOntology::from_config(config);

    assert!(matches!(
        result,
        Err(OntologyError::Domain(
            OntologyDomainError::InvalidServiceId(_)
        ))
    ));
}

#[rstest]
fn catalog_round_trips_through_json() {
    let raw = r#"{
        "services": [
            {
                "id": "feed_service",
                "display_name": "Feed Service",
                "category": "feed",
                "input_kinds": ["rss_feed"]
            }
        ]
    }"#;

    let config = OntologyConfig::from_json(raw).expect("valid catalog JSON");
    let ontology = ServiceOntology::from_config(config).expect("valid catalog");

    let service_id = ServiceId::new("feed_service").expect("valid id");
    let service = ontology.get_service(&service_id).expect("known service");
    assert_eq!(service.capabilities().category(), "feed");
    assert!(service.capabilities().features().is_empty());
}

#[rstest]
#[case("not json at all")]
#[case(r#"{"services": "nope"}"#)]
fn malformed_catalog_json_is_rejected(#[case] raw: &str) {
    let result = OntologyConfig::from_json(raw);
    assert!(matches!(result, Err(OntologyError::Configuration(_))));
}
