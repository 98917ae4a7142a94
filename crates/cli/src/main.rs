//! `category-service` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — run migrations, then start the API server.
//! - `migrate` — run pending database migrations and exit.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "category-service",
    about = "Category CRUD service behind an API key",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
        bind: String,

        /// Shared secret clients send in `X-API-Key`.
        #[arg(long, env = "API_KEY", default_value = "RAHASIA", hide_env_values = true)]
        api_key: String,

        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Run pending database migrations.
    Migrate {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:categories.db")]
    database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 20)]
    max_connections: u32,
}

impl DatabaseArgs {
    async fn connect(&self) -> anyhow::Result<db::DbPool> {
        let pool = db::pool::create_pool(&self.database_url, self.max_connections)
            .await
            .context("failed to connect to database")?;
        db::pool::run_migrations(&pool)
            .await
            .context("migration failed")?;
        Ok(pool)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, api_key, database } => {
            let pool = database.connect().await?;
            info!("Starting API server on {bind}");
            api::serve(&bind, pool, api::ApiConfig::new(api_key), shutdown_signal())
                .await
                .context("server error")?;
            info!("Server stopped");
        }
        Command::Migrate { database } => {
            info!("Running migrations against {}", database.database_url);
            let pool = database.connect().await?;
            pool.close().await;
            info!("Migrations applied successfully");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
