//! Registry server - REST and gRPC over one shared pair of in-memory stores.

use std::future::Future;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_lib::config::GatewayConfig;
use registry_service_lib::config::RegistryServiceConfig;
use registry_service_lib::service::{ProductManager, ProductService, UserManager, UserService};
use registry_service_lib::BoxError;

#[derive(Parser)]
#[command(name = "registry-server")]
#[command(about = "User and product registry served over REST and gRPC")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST and gRPC servers in one process
    Serve {
        #[arg(long, env = "REST_HOST", default_value = "0.0.0.0")]
        rest_host: String,
        #[arg(long, env = "REST_PORT", default_value = "8080")]
        rest_port: u16,
        #[arg(long, env = "GRPC_HOST", default_value = "0.0.0.0")]
        grpc_host: String,
        #[arg(long, env = "GRPC_PORT", default_value = "9090")]
        grpc_port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            rest_host,
            rest_port,
            grpc_host,
            grpc_port,
        } => {
            let rest = GatewayConfig::new(rest_host, rest_port);
            let grpc = RegistryServiceConfig::new(grpc_host, grpc_port);

            serve(rest, grpc, registry_service_lib::shutdown_signal()).await?;
        }
    }

    Ok(())
}

/// Run both servers until `shutdown` resolves or either one stops.
///
/// Returns the error of the server that stopped first, if any.
async fn serve<S>(
    rest: GatewayConfig,
    grpc: RegistryServiceConfig,
    shutdown: S,
) -> Result<(), BoxError>
where
    S: Future<Output = ()>,
{
    // One pair of stores behind both interfaces
    let users: Arc<dyn UserService> = Arc::new(UserManager::new());
    let products: Arc<dyn ProductService> = Arc::new(ProductManager::new());

    info!("Starting registry server");
    info!("  REST: http://{}:{}/api/v1", rest.rest.host, rest.rest.port);
    info!("  gRPC: {}:{}", grpc.grpc.host, grpc.grpc.port);

    let (stop_tx, stop_rx) = watch::channel(false);

    let mut rest_handle = tokio::spawn(gateway_lib::serve(
        rest,
        users.clone(),
        products.clone(),
        stopped(stop_rx.clone()),
    ));
    let mut grpc_handle = tokio::spawn(registry_service_lib::serve(
        grpc,
        users,
        products,
        stopped(stop_rx),
    ));

    let mut rest_result = None;
    let mut grpc_result = None;
    tokio::select! {
        () = shutdown => {}
        result = &mut rest_handle => {
            warn!("REST server stopped before shutdown");
            rest_result = Some(result);
        }
        result = &mut grpc_handle => {
            warn!("gRPC server stopped before shutdown");
            grpc_result = Some(result);
        }
    }
    let rest_first = rest_result.is_some();

    // Whichever finished first, the other is told to stop too
    let _ = stop_tx.send(true);

    let rest_result = match rest_result {
        Some(result) => result,
        None => rest_handle.await,
    };
    let grpc_result = match grpc_result {
        Some(result) => result,
        None => grpc_handle.await,
    };

    let rest_error = exit_error("REST", rest_result);
    let grpc_error = exit_error("gRPC", grpc_result);
    let first_error = if rest_first {
        rest_error.or(grpc_error)
    } else {
        grpc_error.or(rest_error)
    };

    match first_error {
        Some(e) => Err(e),
        None => {
            info!("Registry server stopped");
            Ok(())
        }
    }
}

/// Resolves once the stop flag is raised or its sender is gone.
async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

fn exit_error(
    name: &str,
    result: Result<Result<(), BoxError>, tokio::task::JoinError>,
) -> Option<BoxError> {
    match result {
        Ok(Ok(())) => None,
        Ok(Err(e)) => {
            error!("{} server failed: {}", name, e);
            Some(e)
        }
        Err(e) => {
            error!("{} server task panicked: {}", name, e);
            Some(format!("{} server task panicked: {}", name, e).into())
        }
    }
}
