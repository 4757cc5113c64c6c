use std::str::FromStr;
use std::time;

use thiserror::Error;
use url::Url;

/// A duration read from the environment as a number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvMsDuration(pub time::Duration);

#[derive(Debug, PartialEq, Eq)]
pub struct ParseEnvMsDurationError;

impl FromStr for EnvMsDuration {
    type Err = ParseEnvMsDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ms = s.parse::<u64>().map_err(|_| ParseEnvMsDurationError)?;

        Ok(EnvMsDuration(time::Duration::from_millis(ms)))
    }
}

/// A strictly positive duration read from the environment as a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvSecsDuration(pub time::Duration);

#[derive(Debug, PartialEq, Eq)]
pub enum ParseEnvSecsDurationError {
    NotANumber,
    Zero,
}

impl FromStr for EnvSecsDuration {
    type Err = ParseEnvSecsDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let secs = s
            .parse::<u64>()
            .map_err(|_| ParseEnvSecsDurationError::NotANumber)?;

        if secs == 0 {
            return Err(ParseEnvSecsDurationError::Zero);
        }

        Ok(EnvSecsDuration(time::Duration::from_secs(secs)))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UpstreamUrlError {
    #[error("invalid upstream host {host:?}: {source}")]
    InvalidHost {
        host: String,
        source: url::ParseError,
    },
    #[error("upstream host {0:?} must be a bare host name")]
    NotABareHost(String),
}

/// Build the base URL of an upstream service from its host and port.
///
/// `host` must be a bare host name or IP address: anything carrying a port, path, query or
/// userinfo is rejected.
pub fn upstream_url(host: &str, port: u16) -> Result<Url, UpstreamUrlError> {
    let not_a_bare_host = || UpstreamUrlError::NotABareHost(host.to_owned());
    let invalid_host = |source| UpstreamUrlError::InvalidHost {
        host: host.to_owned(),
        source,
    };

    let mut url = Url::parse("http://localhost/").map_err(invalid_host)?;
    url.set_host(Some(host)).map_err(invalid_host)?;
    url.set_port(Some(port)).map_err(|_| not_a_bare_host())?;

    let same_host = url
        .host_str()
        .is_some_and(|parsed| parsed.eq_ignore_ascii_case(host));
    if !same_host
        || url.port_or_known_default() != Some(port)
        || !url.username().is_empty()
        || url.password().is_some()
        || url.path() != "/"
        || url.query().is_some()
    {
        return Err(not_a_bare_host());
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ms_duration() {
        assert_eq!(
            "1500".parse::<EnvMsDuration>(),
            Ok(EnvMsDuration(time::Duration::from_millis(1500)))
        );
        assert_eq!(
            "0".parse::<EnvMsDuration>(),
            Ok(EnvMsDuration(time::Duration::ZERO))
        );
        assert_eq!(
            "soon".parse::<EnvMsDuration>(),
            Err(ParseEnvMsDurationError)
        );
    }

    #[test]
    fn test_parse_secs_duration() {
        assert_eq!(
            "5".parse::<EnvSecsDuration>(),
            Ok(EnvSecsDuration(time::Duration::from_secs(5)))
        );
        assert_eq!(
            "0".parse::<EnvSecsDuration>(),
            Err(ParseEnvSecsDurationError::Zero)
        );
        assert_eq!(
            "-1".parse::<EnvSecsDuration>(),
            Err(ParseEnvSecsDurationError::NotANumber)
        );
    }

    #[test]
    fn test_upstream_url() {
        let url = upstream_url("processor", 8081).unwrap();
        assert_eq!(url.as_str(), "http://processor:8081/");
        assert_eq!(url.join("/process").unwrap().as_str(), "http://processor:8081/process");

        let url = upstream_url("127.0.0.1", 3000).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/");

        for host in [
            "not a host",
            "",
            "processor/api",
            "processor?x",
            "user@processor",
            "processor:9000",
            "processor#frag",
        ] {
            assert!(
                upstream_url(host, 8081).is_err(),
                "{host:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_upstream_url_keeps_the_port() {
        // Port 80 is the scheme default and would vanish from the serialized URL.
        let url = upstream_url("processor", 80).unwrap();
        assert_eq!(url.port_or_known_default(), Some(80));
        assert_eq!(url.join("/process").unwrap().as_str(), "http://processor/process");
    }
}
