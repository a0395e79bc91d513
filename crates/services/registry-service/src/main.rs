//! Registry Service - gRPC server for the user and product registries.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "registry-service")]
#[command(about = "In-memory user and product registry over gRPC")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        #[arg(long, env = "GRPC_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "GRPC_PORT", default_value = "9090")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), registry_service_lib::BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            registry_service_lib::run_embedded(&host, port).await?;
        }
    }

    Ok(())
}
