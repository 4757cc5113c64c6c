use axum::{routing, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use pipeline_common::health::health_route;
use pipeline_common::metrics::add_metrics_routes;
use tower_http::trace::TraceLayer;

use super::consume;
use crate::fetch::FetchClient;

pub const SERVICE_NAME: &str = "consumer";

pub fn app(fetcher: FetchClient, metrics: Option<PrometheusHandle>) -> Router {
    let router = Router::new()
        .route("/", routing::get(index))
        .route("/consume", routing::get(consume::get).with_state(fetcher))
        .route("/health", health_route(SERVICE_NAME));

    add_metrics_routes(router, metrics).layer(TraceLayer::new_for_http())
}

pub async fn index() -> &'static str {
    "pipeline consumer"
}
