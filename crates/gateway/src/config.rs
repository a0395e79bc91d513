//! Gateway configuration.

use common::ServiceConfig;

const SERVICE_NAME: &str = "registry-rest";
const DEFAULT_REST_HOST: &str = "0.0.0.0";
const DEFAULT_REST_PORT: u16 = 8080;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// REST listening address
    pub rest: ServiceConfig,
}

impl GatewayConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            rest: ServiceConfig::new(SERVICE_NAME, host, port),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REST_HOST, DEFAULT_REST_PORT)
    }
}
