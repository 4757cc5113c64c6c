use std::time;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

/// Enumeration of errors when calling an upstream service.
///
/// `Timeout`, `Connect` and `Request` are transport failures: no usable response arrived.
/// `Status` and `Decode` are protocol failures: a response arrived but it was not what we expect.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("failed to build http client: {0}")]
    ClientError(reqwest::Error),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error("invalid upstream path: {0}")]
    InvalidPath(#[from] url::ParseError),
    #[error("request to {url} timed out")]
    Timeout { url: Url },
    #[error("could not connect to {url}")]
    Connect { url: Url, source: reqwest::Error },
    #[error("request to {url} failed: {source}")]
    Request { url: Url, source: reqwest::Error },
    #[error("{url} responded with status {status}")]
    Status { url: Url, status: StatusCode },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: Url,
        source: serde_json::Error,
    },
}

impl UpstreamError {
    /// Short label for this error, used to tag metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::ClientError(_) | UpstreamError::ZeroTimeout => "client",
            UpstreamError::InvalidPath(_) => "path",
            UpstreamError::Timeout { .. } => "timeout",
            UpstreamError::Connect { .. } => "connect",
            UpstreamError::Request { .. } => "request",
            UpstreamError::Status { .. } => "status",
            UpstreamError::Decode { .. } => "decode",
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            UpstreamError::Timeout { .. }
                | UpstreamError::Connect { .. }
                | UpstreamError::Request { .. }
        )
    }
}

/// An HTTP client bound to a single upstream service.
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its connection pool,
/// so every caller can hold its own copy and requests never wait on each other.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    base_url: Url,
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(
        base_url: Url,
        request_timeout: time::Duration,
        user_agent: &str,
    ) -> Result<Self, UpstreamError> {
        if request_timeout.is_zero() {
            return Err(UpstreamError::ZeroTimeout);
        }

        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_owned())
            .timeout(request_timeout)
            .build()
            .map_err(UpstreamError::ClientError)?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a GET request to `path` on the upstream and decode its JSON body.
    ///
    /// Only a 200 response is accepted. The request is bounded by the client timeout,
    /// which covers reading the body too.
    pub async fn get_json<T>(&self, path: &str) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| transport_error(&url, error))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| transport_error(&url, error))?;

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { url, source })
    }
}

fn transport_error(url: &Url, error: reqwest::Error) -> UpstreamError {
    let url = url.clone();

    if error.is_timeout() {
        UpstreamError::Timeout { url }
    } else if error.is_connect() {
        UpstreamError::Connect { url, source: error }
    } else {
        UpstreamError::Request { url, source: error }
    }
}
