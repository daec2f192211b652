//! Unit tests for job domain types and the execution state machine.

use crate::job::{
    InputData, InputMode, JobDescriptor, JobDomainError, JobItem, JobState, OutputMode, QosClass,
    ServiceDescriptor,
};
use crate::ontology::domain::ServiceId;
use rstest::rstest;
use serde_json::json;

fn feed_item() -> JobItem {
    JobItem::new(
        InputMode::Attached,
        InputData::RssFeed(json!({"area": "test"})),
        OutputMode::Attached,
    )
}

fn descriptor_for(raw_id: &str) -> ServiceDescriptor {
    let service_id = ServiceId::new(raw_id).expect("valid id");
    ServiceDescriptor::new(service_id)
}

// ── JobDescriptor invariants ───────────────────────────────────────

#[rstest]
fn job_requires_at_least_one_item() {
    let result = JobDescriptor::new(descriptor_for("feed_service"), Vec::new());
    assert!(matches!(result, Err(JobDomainError::EmptyJobItems)));
}

#[rstest]
fn job_preserves_item_order() {
    let first = feed_item();
    let second = JobItem::new(
        InputMode::Attached,
        InputData::RssFeed(json!({"area": "news"})),
        OutputMode::Attached,
    );
    let job = JobDescriptor::new(descriptor_for("feed_service"), vec![first.clone(), second.clone()])
        .expect("valid job");

    assert_eq!(job.items(), [first, second]);
}

#[rstest]
fn jobs_get_distinct_identifiers() {
    let a = JobDescriptor::new(descriptor_for("feed_service"), vec![feed_item()])
        .expect("valid job");
    let b = JobDescriptor::new(descriptor_for("feed_service"), vec![feed_item()])
        .expect("valid job");

    assert_ne!(a.id(), b.id());
}

// ── ServiceDescriptor options ──────────────────────────────────────

#[rstest]
fn descriptor_defaults_to_standard_qos() {
    let descriptor = descriptor_for("feed_service");
    assert_eq!(descriptor.qos(), QosClass::Standard);
    assert!(descriptor.input_format().is_none());
    assert!(descriptor.output_format().is_none());
}

#[rstest]
fn descriptor_carries_negotiated_options() {
    let descriptor = descriptor_for("feed_service")
        .with_qos(QosClass::Expedited)
        .with_input_format("xml")
        .with_output_format("json");

    assert_eq!(descriptor.qos(), QosClass::Expedited);
    assert_eq!(descriptor.input_format(), Some("xml"));
    assert_eq!(descriptor.output_format(), Some("json"));
}

// ── Mode parsing round-trips ───────────────────────────────────────

#[rstest]
#[case(InputMode::Attached, "attached")]
#[case(InputMode::Referenced, "referenced")]
fn input_mode_as_str_round_trip(#[case] mode: InputMode, #[case] expected: &str) {
    assert_eq!(mode.as_str(), expected);
    let parsed = InputMode::try_from(expected).expect("should parse");
    assert_eq!(parsed, mode);
}

#[rstest]
#[case(OutputMode::Attached, "attached")]
#[case(OutputMode::Referenced, "referenced")]
fn output_mode_as_str_round_trip(#[case] mode: OutputMode, #[case] expected: &str) {
    assert_eq!(mode.as_str(), expected);
    let parsed = OutputMode::try_from(expected).expect("should parse");
    assert_eq!(parsed, mode);
}

#[rstest]
fn unknown_modes_are_rejected() {
    assert!(matches!(
        InputMode::try_from("inline"),
        Err(JobDomainError::UnknownInputMode(_))
    ));
    assert!(matches!(
        OutputMode::try_from("inline"),
        Err(JobDomainError::UnknownOutputMode(_))
    ));
    assert!(matches!(
        QosClass::try_from("platinum"),
        Err(JobDomainError::UnknownQosClass(_))
    ));
}

// ── JobState machine ───────────────────────────────────────────────

#[rstest]
#[case(JobState::Received, JobState::Validating)]
#[case(JobState::Validating, JobState::Executing)]
#[case(JobState::Validating, JobState::Rejected)]
#[case(JobState::Executing, JobState::Completed)]
#[case(JobState::Executing, JobState::Failed)]
fn allowed_transitions_advance(#[case] from: JobState, #[case] to: JobState) {
    assert_eq!(from.advance(to), Ok(to));
}

#[rstest]
#[case(JobState::Received, JobState::Executing)]
#[case(JobState::Received, JobState::Completed)]
#[case(JobState::Validating, JobState::Completed)]
#[case(JobState::Completed, JobState::Failed)]
#[case(JobState::Rejected, JobState::Validating)]
#[case(JobState::Failed, JobState::Executing)]
fn disallowed_transitions_are_rejected(#[case] from: JobState, #[case] to: JobState) {
    assert_eq!(
        from.advance(to),
        Err(JobDomainError::InvalidJobTransition { from, to })
    );
}

#[rstest]
#[case(JobState::Received, false)]
#[case(JobState::Validating, false)]
#[case(JobState::Executing, false)]
#[case(JobState::Completed, true)]
#[case(JobState::Rejected, true)]
#[case(JobState::Failed, true)]
fn terminal_states_are_flagged(#[case] state: JobState, #[case] expected: bool) {
    assert_eq!(state.is_terminal(), expected);
}
