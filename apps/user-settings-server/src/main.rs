mod config;
mod logging;
mod router;
mod shutdown;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use local_authn::LocalAuthnModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use user_settings::UserSettingsModule;

use crate::config::{AppConfig, CliOverrides, DatabaseConfig, MOCK_DSN};

/// User Settings Server - per-user settings behind local credential validation
#[derive(Parser)]
#[command(name = "user-settings-server")]
#[command(about = "User Settings Server - per-user settings behind local credential validation")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(CliOverrides {
        port: cli.port,
        verbose: cli.verbose,
        mock: cli.mock,
    })?;

    logging::init_logging(&config.logging);
    tracing::info!("User Settings Server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    config.bind_addr()?;
    LocalAuthnModule::new().init(&config.modules.local_authn)?;
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn connect_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    // Each pooled connection would otherwise open its own private in-memory database.
    let max_connections = if cfg.dsn == MOCK_DSN {
        1
    } else {
        cfg.max_connections
    };
    opts.max_connections(max_connections)
        .connect_timeout(Duration::from_millis(cfg.connect_timeout_ms))
        .acquire_timeout(Duration::from_millis(cfg.acquire_timeout_ms))
        .sqlx_logging(false);

    Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to database '{}'", cfg.dsn))
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Initializing modules...");

    let db = connect_db(&config.database).await?;

    let settings = UserSettingsModule::new();
    settings.migrate(&db).await?;
    settings.init(db, config.modules.user_settings.clone());

    let authn = LocalAuthnModule::new();
    authn.init(&config.modules.local_authn)?;

    let app = router::build_router(&settings, &authn, config.request_timeout())?;

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
