//! Unit tests for ontology domain types.

use crate::ontology::domain::{OntologyDomainError, Service, ServiceCapabilities, ServiceId};
use rstest::rstest;

// ── ServiceId validation ───────────────────────────────────────────

#[rstest]
#[case("aigents_rss_feeder")]
#[case("text_summarizer")]
#[case("mnist_classifier_v2")]
#[case("a")]
fn valid_service_ids_are_accepted(#[case] input: &str) {
    let id = ServiceId::new(input);
    assert!(id.is_ok(), "expected '{input}' to be valid");
    assert_eq!(id.expect("valid id").as_str(), input);
}

#[rstest]
fn service_id_is_trimmed_and_lowercased() {
    let id = ServiceId::new("  Aigents_RSS_Feeder  ").expect("should accept after trim+lowercase");
    assert_eq!(id.as_str(), "aigents_rss_feeder");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_or_whitespace_service_id_is_rejected(#[case] input: &str) {
    let result = ServiceId::new(input);
    assert!(matches!(result, Err(OntologyDomainError::EmptyServiceId)));
}

#[rstest]
#[case("rss-feeder")]
#[case("feeder.v2")]
#[case("feeder/v2")]
#[case("feeder v2")]
fn invalid_characters_in_service_id_rejected(#[case] input: &str) {
    let result = ServiceId::new(input);
    assert!(matches!(
        result,
        Err(OntologyDomainError::InvalidServiceId(_))
    ));
}

#[rstest]
#[case(100, true)]
#[case(101, false)]
fn service_id_length_boundary(#[case] length: usize, #[case] expected_ok: bool) {
    let id = "a".repeat(length);
    let result = ServiceId::new(&id);
    if expected_ok {
        assert!(result.is_ok(), "expected length {length} to be accepted");
    } else {
        assert!(
            matches!(result, Err(OntologyDomainError::ServiceIdTooLong(_))),
            "expected length {length} to be rejected"
        );
    }
}

// ── ServiceCapabilities ────────────────────────────────────────────

#[rstest]
fn capabilities_carry_input_kinds_and_features() {
    let capabilities = ServiceCapabilities::new("feed")
        .expect("valid category")
        .with_input_kinds(vec!["rss_feed".to_owned()])
        .with_features(vec!["push".to_owned()]);

    assert_eq!(capabilities.category(), "feed");
    assert!(capabilities.accepts_input_kind("rss_feed"));
    assert!(!capabilities.accepts_input_kind("text"));
    assert_eq!(capabilities.features(), ["push".to_owned()]);
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_category_is_rejected(#[case] input: &str) {
    let result = ServiceCapabilities::new(input);
    assert!(matches!(result, Err(OntologyDomainError::EmptyCategory)));
}

// ── Service ────────────────────────────────────────────────────────

#[rstest]
fn valid_service_is_accepted() {
    let id = ServiceId::new("aigents_rss_feeder").expect("valid id");
    let capabilities = ServiceCapabilities::new("feed").expect("valid category");
    let service = Service::new(id.clone(), "  Aigents RSS Feeder  ", capabilities)
        .expect("valid service");

    assert_eq!(service.id(), &id);
    assert_eq!(service.display_name(), "Aigents RSS Feeder");
}

#[rstest]
fn empty_display_name_is_rejected() {
    let id = ServiceId::new("aigents_rss_feeder").expect("valid id");
    let capabilities = ServiceCapabilities::new("feed").expect("valid category");
    let result = Service::new(id, "   ", capabilities);

    assert!(matches!(result, Err(OntologyDomainError::EmptyDisplayName)));
}
