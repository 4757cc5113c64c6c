//! Producer, processor and consumer wired together over real sockets.
use std::time::Duration;

use assert_json_diff::assert_json_eq;
use pipeline_common::types::{ErrorBody, ProcessedValue};
use pipeline_consumer::fetch::FetchResult;
use pipeline_consumer::handlers;
use pipeline_consumer::poller::Poller;
use pipeline_producer::handlers::data::{FixedValue, RandomValues};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;
use common::{fetch_client, spawn_app, upstream};

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn fixed_value_is_doubled_end_to_end() {
    let producer = spawn_app(pipeline_producer::handlers::app(FixedValue(42), None)).await;
    let processor = spawn_app(pipeline_processor::handlers::app(upstream(producer), None)).await;
    let consumer = spawn_app(handlers::app(fetch_client(processor), None)).await;

    let client = reqwest::Client::new();
    for _ in 0..5 {
        let response = client
            .get(format!("http://{consumer}/consume"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_json_eq!(body, json!({"original": 42, "processed": 84}));
    }

    let poller = Poller::new(
        fetch_client(processor),
        Duration::ZERO,
        Duration::from_millis(10),
    );
    assert_eq!(
        poller.poll_once().await,
        FetchResult::Success {
            original: 42,
            processed: 84
        }
    );
}

#[tokio::test]
async fn random_values_are_doubled_end_to_end() {
    let producer = spawn_app(pipeline_producer::handlers::app(RandomValues, None)).await;
    let processor = spawn_app(pipeline_processor::handlers::app(upstream(producer), None)).await;
    let consumer = spawn_app(handlers::app(fetch_client(processor), None)).await;

    let client = reqwest::Client::new();
    for _ in 0..20 {
        let body: ProcessedValue = client
            .get(format!("http://{consumer}/consume"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!((1..=100).contains(&body.original));
        assert_eq!(body.processed, 2 * body.original);
    }
}

#[tokio::test]
async fn producer_down_surfaces_as_a_consumer_error() {
    let producer = format!("127.0.0.1:{}", free_port()).parse().unwrap();
    let processor = spawn_app(pipeline_processor::handlers::app(upstream(producer), None)).await;
    let consumer = spawn_app(handlers::app(fetch_client(processor), None)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{consumer}/consume"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(body.error.starts_with("Failed to call Processor service"));

    // Liveness of every service is independent of its upstream.
    for service in [processor, consumer] {
        let response = client
            .get(format!("http://{service}/health"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
