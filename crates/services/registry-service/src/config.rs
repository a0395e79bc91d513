//! Registry service configuration.

use common::ServiceConfig;

const SERVICE_NAME: &str = "registry-grpc";
const DEFAULT_GRPC_HOST: &str = "0.0.0.0";
const DEFAULT_GRPC_PORT: u16 = 9090;

/// Registry service configuration.
///
/// The binaries fill it from their `GRPC_HOST` / `GRPC_PORT` arguments.
#[derive(Debug, Clone)]
pub struct RegistryServiceConfig {
    /// gRPC listening address
    pub grpc: ServiceConfig,
}

impl RegistryServiceConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            grpc: ServiceConfig::new(SERVICE_NAME, host, port),
        }
    }
}

impl Default for RegistryServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRPC_HOST, DEFAULT_GRPC_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_given_address() {
        let config = RegistryServiceConfig::new("127.0.0.1", 50051);
        assert_eq!(config.grpc.service_name, "registry-grpc");
        assert_eq!(config.grpc.socket_addr().unwrap().to_string(), "127.0.0.1:50051");
    }

    #[test]
    fn test_default_listens_on_all_interfaces() {
        let config = RegistryServiceConfig::default();
        assert_eq!(config.grpc.host, "0.0.0.0");
        assert_eq!(config.grpc.port, 9090);
    }
}
