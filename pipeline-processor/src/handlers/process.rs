use axum::{extract::State, http::StatusCode, Json};
use pipeline_common::types::{ErrorBody, ProcessedValue, ProducedValue};
use pipeline_common::upstream::UpstreamClient;
use tracing::{error, info};

const PRODUCER_ERROR: &str = "Failed to call Producer service";

pub type ProcessResponse = Result<Json<ProcessedValue>, (StatusCode, Json<ErrorBody>)>;

/// Multiply by two. `None` on overflow.
pub fn transform(value: i64) -> Option<i64> {
    value.checked_mul(2)
}

pub async fn get(State(producer): State<UpstreamClient>) -> ProcessResponse {
    let produced: ProducedValue = producer.get_json("/data").await.map_err(|error| {
        metrics::counter!("processor_upstream_errors_total", "kind" => error.kind()).increment(1);
        error!("could not reach producer: {}", error);
        internal_error(PRODUCER_ERROR)
    })?;

    let Some(processed) = transform(produced.value) else {
        error!("cannot process {}: result out of range", produced.value);
        return Err(internal_error("processed value out of range"));
    };

    metrics::counter!("processor_values_processed_total").increment(1);
    info!("Received: {}, Processed: {}", produced.value, processed);

    Ok(Json(ProcessedValue {
        original: produced.value,
        processed,
    }))
}

fn internal_error(message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(message)),
    )
}
