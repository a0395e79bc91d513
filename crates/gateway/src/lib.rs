//! REST Gateway Library
//!
//! This crate exposes the registry services over HTTP. Handlers call the
//! service traits directly, so a gateway embedded next to the gRPC server
//! shares its stores.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use registry_service_lib::service::{ProductManager, ProductService, UserManager, UserService};
use registry_service_lib::BoxError;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the traced application router.
pub fn app(
    users: Arc<dyn UserService>,
    products: Arc<dyn ProductService>,
    config: GatewayConfig,
) -> Router {
    create_router(AppState::new(users, products, config)).layer(TraceLayer::new_for_http())
}

/// Run the gateway with its own fresh stores until Ctrl-C.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), BoxError> {
    let config = GatewayConfig::new(host, port);

    let users: Arc<dyn UserService> = Arc::new(UserManager::new());
    let products: Arc<dyn ProductService> = Arc::new(ProductManager::new());

    serve(config, users, products, registry_service_lib::shutdown_signal()).await
}

/// Serve the REST API on `config.rest` until `shutdown` resolves.
pub async fn serve<F>(
    config: GatewayConfig,
    users: Arc<dyn UserService>,
    products: Arc<dyn ProductService>,
    shutdown: F,
) -> Result<(), BoxError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = config.rest.socket_addr()?;
    let service = config.rest.service_name.clone();
    let app = app(users, products, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service = %service, "REST server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!(service = %service, "REST server stopped");
    Ok(())
}
