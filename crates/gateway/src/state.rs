//! Application state for dependency injection.

use std::sync::Arc;

use registry_service_lib::service::{ProductService, UserService};

use crate::config::GatewayConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub products: Arc<dyn ProductService>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        users: Arc<dyn UserService>,
        products: Arc<dyn ProductService>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            users,
            products,
            config,
        }
    }
}
