use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Static liveness report for a service.
///
/// The report never looks at upstream services: if the process can answer HTTP,
/// it is alive. Checking upstream reachability would make this a readiness probe,
/// which none of the pipeline services expose.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
}

impl HealthReport {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_owned(),
            service: service.to_owned(),
        }
    }
}

impl IntoResponse for HealthReport {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Route answering health checks on behalf of `service`.
pub fn health_route<S>(service: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    get(move || std::future::ready(HealthReport::healthy(service)))
}
