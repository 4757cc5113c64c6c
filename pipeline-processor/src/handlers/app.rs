use axum::{routing, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use pipeline_common::health::health_route;
use pipeline_common::metrics::add_metrics_routes;
use pipeline_common::upstream::UpstreamClient;
use tower_http::trace::TraceLayer;

use super::process;

pub const SERVICE_NAME: &str = "processor";

pub fn app(producer: UpstreamClient, metrics: Option<PrometheusHandle>) -> Router {
    let router = Router::new()
        .route("/", routing::get(index))
        .route("/process", routing::get(process::get).with_state(producer))
        .route("/health", health_route(SERVICE_NAME));

    add_metrics_routes(router, metrics).layer(TraceLayer::new_for_http())
}

pub async fn index() -> &'static str {
    "pipeline processor"
}
