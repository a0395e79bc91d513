//! Registry Client - command line access to the registry over gRPC or REST.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppResult;
use domain::{CreateProduct, CreateUser, ListUsersQuery, SearchProductsQuery, UpdateUser};
use registry_client::config::{ClientConfig, Mode};
use registry_client::RegistryClient;

#[derive(Parser)]
#[command(name = "registry-client")]
#[command(about = "CLI client for the user and product registry")]
struct Cli {
    /// Transport to use
    #[arg(short, long, value_enum, env = "REGISTRY_MODE", default_value = "grpc", global = true)]
    mode: Mode,
    /// gRPC server address
    #[arg(long, env = "REGISTRY_GRPC_ADDR", default_value = "http://localhost:9090", global = true)]
    grpc_addr: String,
    /// REST server address
    #[arg(long, env = "REGISTRY_REST_ADDR", default_value = "http://localhost:8080", global = true)]
    rest_addr: String,
    /// Request timeout in seconds
    #[arg(long, env = "REGISTRY_TIMEOUT", default_value = "30", global = true)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    #[command(subcommand)]
    User(UserCommands),
    /// Product management commands
    #[command(subcommand)]
    Product(ProductCommands),
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user
    Create {
        username: String,
        email: String,
        full_name: String,
    },
    /// Get a user by ID
    Get { id: String },
    /// Update selected fields of a user
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a user
    Delete { id: String },
    /// List users
    List {
        #[arg(long, default_value = "1")]
        page: i32,
        #[arg(long, default_value = "10")]
        page_size: i32,
        /// username, email, full_name or created_at
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        filter: Option<String>,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Create a new product
    Create {
        name: String,
        description: String,
        price: f64,
        quantity: i32,
        category: String,
    },
    /// Get a product by ID
    Get { id: String },
    /// Search products
    Search {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long, default_value = "1")]
        page: i32,
        #[arg(long, default_value = "10")]
        page_size: i32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::new(
        cli.mode,
        cli.grpc_addr,
        cli.rest_addr,
        Duration::from_secs(cli.timeout),
    );

    let result = match registry_client::connect(&config).await {
        Ok(client) => run(client.as_ref(), cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error [{}] via {:?}: {}", e.code(), config.mode, e.detail());
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &dyn RegistryClient, command: Commands) -> AppResult<()> {
    match command {
        Commands::User(command) => match command {
            UserCommands::Create {
                username,
                email,
                full_name,
            } => print_json(
                &client
                    .create_user(CreateUser::new(username, email, full_name))
                    .await?,
            ),
            UserCommands::Get { id } => print_json(&client.get_user(&id).await?),
            UserCommands::Update {
                id,
                username,
                email,
                full_name,
                active,
            } => {
                let patch = UpdateUser {
                    username,
                    email,
                    full_name,
                    is_active: active,
                };
                print_json(&client.update_user(&id, patch).await?)
            }
            UserCommands::Delete { id } => {
                client.delete_user(&id).await?;
                println!("User {} deleted successfully", id);
                Ok(())
            }
            UserCommands::List {
                page,
                page_size,
                sort_by,
                filter,
            } => print_json(
                &client
                    .list_users(ListUsersQuery {
                        page,
                        page_size,
                        sort_by,
                        filter,
                    })
                    .await?,
            ),
        },
        Commands::Product(command) => match command {
            ProductCommands::Create {
                name,
                description,
                price,
                quantity,
                category,
            } => print_json(
                &client
                    .create_product(CreateProduct {
                        name,
                        description,
                        price,
                        quantity,
                        category,
                    })
                    .await?,
            ),
            ProductCommands::Get { id } => print_json(&client.get_product(&id).await?),
            ProductCommands::Search {
                query,
                category,
                min_price,
                max_price,
                page,
                page_size,
            } => print_json(
                &client
                    .search_products(SearchProductsQuery {
                        query,
                        category,
                        min_price,
                        max_price,
                        page,
                        page_size,
                    })
                    .await?,
            ),
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| common::AppError::internal(format!("failed to encode output: {}", e)))?;
    println!("{}", text);
    Ok(())
}
