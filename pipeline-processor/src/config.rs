use std::num::NonZeroU16;

use envconfig::Envconfig;
use pipeline_common::config::{upstream_url, EnvMsDuration, UpstreamUrlError};
use url::Url;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "BIND_HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "8081")]
    pub port: NonZeroU16,

    #[envconfig(default = "producer")]
    pub producer_host: String,

    #[envconfig(default = "8080")]
    pub producer_port: NonZeroU16,

    #[envconfig(from = "REQUEST_TIMEOUT_MS", default = "5000")]
    pub request_timeout: EnvMsDuration,

    #[envconfig(default = "true")]
    pub export_prometheus: bool,
}

impl Config {
    /// Produce a host:port address for binding a TcpListener.
    pub fn bind(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn producer_url(&self) -> Result<Url, UpstreamUrlError> {
        upstream_url(&self.producer_host, self.producer_port.get())
    }
}
