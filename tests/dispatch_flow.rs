//! End-to-end dispatch tests through the public API.
//!
//! Each test builds an isolated ontology, transport, and service manager,
//! registers the Aigents feeder adapter, and drives jobs through
//! `ServiceManager::dispatch` the way an embedding application would.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use switchyard::dispatch::adapters::{
    AigentsFeederAdapter, InMemoryFeedTransport, StaticAdapterSource,
};
use switchyard::dispatch::ports::ServiceAdapter;
use switchyard::dispatch::services::{DispatchError, ServiceManager};
use switchyard::job::{
    InputData, InputMode, JobDescriptor, JobItem, OutputMode, ServiceDescriptor,
};
use switchyard::ontology::domain::ServiceId;
use switchyard::ontology::{AIGENTS_RSS_FEEDER_ID, ServiceOntology, TEXT_SUMMARIZER_ID};

struct Deployment {
    ontology: Arc<ServiceOntology>,
    transport: Arc<InMemoryFeedTransport>,
    manager: ServiceManager<DefaultClock>,
}

async fn deploy_with(
    ontology: Arc<ServiceOntology>,
    transport: Arc<InMemoryFeedTransport>,
) -> ServiceManager<DefaultClock> {
    let adapter = AigentsFeederAdapter::from_ontology(&ontology, Arc::clone(&transport) as _)
        .expect("aigents service should be in the catalog");
    let source = StaticAdapterSource::empty();
    let (manager, report) = ServiceManager::setup(
        ontology,
        &source,
        vec![Arc::new(adapter) as Arc<dyn ServiceAdapter>],
        Arc::new(DefaultClock),
    )
    .await
    .expect("setup should succeed");
    assert!(report.is_clean());
    manager
}

#[fixture]
async fn deployment() -> Deployment {
    let ontology = Arc::new(ServiceOntology::builtin().expect("builtin catalog should build"));
    let transport = Arc::new(InMemoryFeedTransport::new());
    let manager = deploy_with(Arc::clone(&ontology), Arc::clone(&transport)).await;
    Deployment {
        ontology,
        transport,
        manager,
    }
}

fn aigents_id() -> ServiceId {
    ServiceId::new(AIGENTS_RSS_FEEDER_ID).expect("valid id")
}

fn rss_job(service_id: ServiceId, areas: &[&str]) -> JobDescriptor {
    let items = areas
        .iter()
        .map(|area| {
            JobItem::new(
                InputMode::Attached,
                InputData::RssFeed(json!({"area": area})),
                OutputMode::Attached,
            )
        })
        .collect();
    JobDescriptor::new(ServiceDescriptor::new(service_id), items).expect("valid job")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feeder_job_round_trips(#[future(awt)] deployment: Deployment) {
    let job = rss_job(aigents_id(), &["test"]);

    let results = deployment
        .manager
        .dispatch(&job)
        .await
        .expect("dispatch should succeed");

    assert_eq!(results.len(), 1);
    let result = results.first().expect("one result");
    assert_eq!(result.adapter_type(), "aigents");
    assert_eq!(
        result.response_data().as_success(),
        Some(&Value::String("Ok.".to_owned()))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_item_job_keeps_order(#[future(awt)] deployment: Deployment) {
    let job = rss_job(aigents_id(), &["news", "weather"]);

    let results = deployment
        .manager
        .dispatch(&job)
        .await
        .expect("dispatch should succeed");

    assert_eq!(results.len(), 2);
    for result in &results {
        assert_eq!(result.adapter_type(), "aigents");
        assert!(!result.response_data().is_failure());
    }
    let pushed = deployment.transport.pushed_feeds().expect("transport state");
    let areas: Vec<&str> = pushed.iter().map(|request| request.area()).collect();
    assert_eq!(areas, ["news", "weather"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregistered_service_yields_no_results(#[future(awt)] deployment: Deployment) {
    let absent_id = ServiceId::new(TEXT_SUMMARIZER_ID).expect("valid id");
    let job = rss_job(absent_id.clone(), &["test"]);

    let result = deployment.manager.dispatch(&job).await;

    assert!(matches!(
        result,
        Err(DispatchError::ServiceNotAvailable(id)) if id == absent_id
    ));
    assert!(deployment.transport.pushed_feeds().expect("transport state").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_setup_instance_answers_dispatches(#[future(awt)] deployment: Deployment) {
    // A second setup cycle with a fresh adapter instance under the same
    // identifier: the newly deployed manager answers with the new instance.
    let replacement_transport = Arc::new(InMemoryFeedTransport::new());
    let manager = deploy_with(
        Arc::clone(&deployment.ontology),
        Arc::clone(&replacement_transport),
    )
    .await;

    manager
        .dispatch(&rss_job(aigents_id(), &["test"]))
        .await
        .expect("dispatch should succeed");

    assert_eq!(
        replacement_transport.pushed_feeds().expect("transport state").len(),
        1
    );
    assert!(deployment.transport.pushed_feeds().expect("transport state").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacement_registration_takes_over(#[future(awt)] deployment: Deployment) {
    let replacement_transport = Arc::new(InMemoryFeedTransport::new());
    let replacement = AigentsFeederAdapter::from_ontology(
        &deployment.ontology,
        Arc::clone(&replacement_transport) as _,
    )
    .expect("aigents service should be in the catalog");

    let conflict = deployment
        .manager
        .register_adapter(Arc::new(replacement))
        .await
        .expect("registration should succeed");
    assert!(conflict.is_some());

    deployment
        .manager
        .dispatch(&rss_job(aigents_id(), &["test"]))
        .await
        .expect("dispatch should succeed");

    assert!(deployment.transport.pushed_feeds().expect("transport state").is_empty());
    assert_eq!(
        replacement_transport.pushed_feeds().expect("transport state").len(),
        1
    );
}
