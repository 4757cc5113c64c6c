use std::num::NonZeroU16;

use envconfig::Envconfig;
use pipeline_common::config::{
    upstream_url, EnvMsDuration, EnvSecsDuration, UpstreamUrlError,
};
use url::Url;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "BIND_HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "8082")]
    pub port: NonZeroU16,

    #[envconfig(default = "processor")]
    pub processor_host: String,

    #[envconfig(default = "8081")]
    pub processor_port: NonZeroU16,

    #[envconfig(from = "POLL_INTERVAL_SECONDS", default = "5")]
    pub poll_interval: EnvSecsDuration,

    #[envconfig(from = "REQUEST_TIMEOUT_MS", default = "5000")]
    pub request_timeout: EnvMsDuration,

    // Only there so the first poll lines come after the listening banner.
    #[envconfig(from = "STARTUP_DELAY_MS", default = "1000")]
    pub startup_delay: EnvMsDuration,

    #[envconfig(default = "true")]
    pub export_prometheus: bool,
}

impl Config {
    /// Produce a host:port address for binding a TcpListener.
    pub fn bind(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn processor_url(&self) -> Result<Url, UpstreamUrlError> {
        upstream_url(&self.processor_host, self.processor_port.get())
    }
}
