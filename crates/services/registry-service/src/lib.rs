//! Registry Service Library
//!
//! In-memory user and product registries exposed over gRPC. The stores and
//! their managers live here; the REST gateway and the combined binary share
//! the same [`service::UserManager`] and [`service::ProductManager`]
//! instances through `Arc`.

pub mod config;
pub mod grpc;
pub mod repository;
pub mod service;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tonic::transport::Server;
use tracing::info;

use crate::config::RegistryServiceConfig;
use crate::grpc::{ProductGrpcService, UserGrpcService};
use crate::service::{ProductManager, ProductService, UserManager, UserService};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Run the gRPC server with fresh stores until Ctrl-C.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), BoxError> {
    let config = RegistryServiceConfig::new(host, port);

    let users: Arc<dyn UserService> = Arc::new(UserManager::new());
    let products: Arc<dyn ProductService> = Arc::new(ProductManager::new());

    serve(config, users, products, shutdown_signal()).await
}

/// Serve both gRPC services on `config.grpc` until `shutdown` resolves.
pub async fn serve<F>(
    config: RegistryServiceConfig,
    users: Arc<dyn UserService>,
    products: Arc<dyn ProductService>,
    shutdown: F,
) -> Result<(), BoxError>
where
    F: Future<Output = ()> + Send,
{
    let addr: SocketAddr = config.grpc.socket_addr()?;
    info!(service = %config.grpc.service_name, "gRPC server listening on {}", addr);

    Server::builder()
        .add_service(proto::UserServiceServer::new(UserGrpcService::new(users)))
        .add_service(proto::ProductServiceServer::new(ProductGrpcService::new(
            products,
        )))
        .serve_with_shutdown(addr, shutdown)
        .await?;

    info!(service = %config.grpc.service_name, "gRPC server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
