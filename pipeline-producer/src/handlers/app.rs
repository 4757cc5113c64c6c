use std::sync::Arc;

use axum::{routing, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use pipeline_common::health::health_route;
use pipeline_common::metrics::add_metrics_routes;
use tower_http::trace::TraceLayer;

use super::data::{self, ValueSource};

pub const SERVICE_NAME: &str = "producer";

pub fn app<V>(values: V, metrics: Option<PrometheusHandle>) -> Router
where
    V: ValueSource + Send + Sync + 'static,
{
    let values: data::SharedValueSource = Arc::new(values);

    let router = Router::new()
        .route("/", routing::get(index))
        .route("/data", routing::get(data::get).with_state(values))
        .route("/health", health_route(SERVICE_NAME));

    add_metrics_routes(router, metrics).layer(TraceLayer::new_for_http())
}

pub async fn index() -> &'static str {
    "pipeline producer"
}
