use pipeline_common::types::ProcessedValue;
use pipeline_common::upstream::UpstreamClient;
use url::Url;

pub const PROCESS_PATH: &str = "/process";

/// Outcome of a single call to the processor.
///
/// Transport and protocol failures are not told apart here: callers only need a
/// reason to log or to hand back to their own caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success { original: i64, processed: i64 },
    Failure { reason: String },
}

impl From<ProcessedValue> for FetchResult {
    fn from(value: ProcessedValue) -> Self {
        FetchResult::Success {
            original: value.original,
            processed: value.processed,
        }
    }
}

/// Calls `GET /process` on the processor. No retries: what to do with a failure is
/// up to the caller.
#[derive(Clone, Debug)]
pub struct FetchClient {
    upstream: UpstreamClient,
}

impl FetchClient {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    pub fn upstream_url(&self) -> &Url {
        self.upstream.base_url()
    }

    pub async fn fetch(&self) -> FetchResult {
        match self
            .upstream
            .get_json::<ProcessedValue>(PROCESS_PATH)
            .await
        {
            Ok(value) => value.into(),
            Err(error) => {
                metrics::counter!("consumer_fetch_errors_total", "kind" => error.kind())
                    .increment(1);

                FetchResult::Failure {
                    reason: format!("Failed to call Processor service: {}", error),
                }
            }
        }
    }
}
