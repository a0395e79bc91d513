//! Client configuration.

use std::time::Duration;

use clap::ValueEnum;

use common::{GrpcClientConfig, HttpClientConfig};

/// Transport used to reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Grpc,
    Rest,
}

/// Client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub mode: Mode,
    pub grpc: GrpcClientConfig,
    pub rest: HttpClientConfig,
}

impl ClientConfig {
    /// Build a configuration from command line values. `timeout` bounds each
    /// request on either transport.
    pub fn new(mode: Mode, grpc_addr: String, rest_addr: String, timeout: Duration) -> Self {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        let grpc = GrpcClientConfig {
            endpoint: grpc_addr,
            request_timeout_ms: timeout_ms,
            ..Default::default()
        };
        let rest = HttpClientConfig {
            base_url: rest_addr,
            request_timeout_ms: timeout_ms,
        };
        Self { mode, grpc, rest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.mode, Mode::Grpc);
        assert_eq!(config.grpc.endpoint, "http://localhost:9090");
        assert_eq!(config.rest.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_timeout_applies_to_both_transports() {
        let config = ClientConfig::new(
            Mode::Rest,
            "http://grpc:1".to_string(),
            "http://rest:2".to_string(),
            Duration::from_secs(3),
        );
        assert_eq!(config.grpc.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.rest.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.grpc.connect_timeout(), Duration::from_secs(5));
    }
}
