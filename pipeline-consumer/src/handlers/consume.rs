use axum::{extract::State, http::StatusCode, Json};
use pipeline_common::types::{ErrorBody, ProcessedValue};
use tracing::{error, info};

use crate::fetch::{FetchClient, FetchResult};

/// Run the poller's fetch on demand and hand the result back to the caller.
pub async fn get(
    State(fetcher): State<FetchClient>,
) -> Result<Json<ProcessedValue>, (StatusCode, Json<ErrorBody>)> {
    info!("[MANUAL] Consume endpoint called");
    metrics::counter!("consumer_manual_triggers_total").increment(1);

    match fetcher.fetch().await {
        FetchResult::Success {
            original,
            processed,
        } => {
            info!("[MANUAL] Original: {}, Processed: {}", original, processed);
            Ok(Json(ProcessedValue {
                original,
                processed,
            }))
        }
        FetchResult::Failure { reason } => {
            error!("[MANUAL] {}", reason);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(reason)),
            ))
        }
    }
}
