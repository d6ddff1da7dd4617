mod config;
mod employees;
mod error;
mod projects;
mod router;
mod tasks;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crewplan_core::HttpPlanner;
use crewplan_db::config::DbConfig;
use crewplan_db::pool;

#[derive(Parser)]
#[command(name = "crewplan", about = "Team/project backend with LLM-assisted task generation")]
struct Cli {
    /// Database URL (overrides CREWPLAN_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database if needed and run migrations
    DbInit,
    /// Run the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8888)]
        port: u16,
        /// Planner endpoint (overrides CREWPLAN_PLANNER_URL env var)
        #[arg(long)]
        planner_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let db_config = match &cli.database_url {
        Some(url) => DbConfig::new(url.clone()),
        None => DbConfig::from_env(),
    };

    match cli.command {
        Commands::DbInit => {
            pool::ensure_database_exists(&db_config).await?;
            let pool = pool::create_pool(&db_config).await?;
            pool::run_migrations(&pool).await?;
            println!("database initialized at {}", db_config.database_url);
        }
        Commands::Serve {
            bind,
            port,
            planner_url,
        } => {
            let pool = pool::create_pool(&db_config).await?;
            pool::run_migrations(&pool).await?;

            let planner_url = config::resolve_planner_url(planner_url);
            tracing::info!(planner_url, "using task planner endpoint");
            let planner = HttpPlanner::new(planner_url)?;

            router::run_serve(pool, Arc::new(planner), &bind, port).await?;
        }
    }

    Ok(())
}
