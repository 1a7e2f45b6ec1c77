//! Bawaba login service
//!
//! Entry point with configuration loading, database migrations, and HTTP
//! server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use bawaba_backend::messages::{Locale, MessageCatalog};
use bawaba_backend::state::AppState;

mod cli;
mod config_helpers;
mod tracing_setup;

use cli::CliArgs;
use config_helpers::{database_config_from_config, parse_bind_address};
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.help_requested {
        CliArgs::print_help();
        return Ok(());
    }

    // Resolve config path: CLI > environment variable
    let config_path = args
        .config_path
        .or_else(|| std::env::var("BAWABA_CONFIG_PATH").ok());

    let config = load_config(&config_path)?;
    bawaba_config::validate_config(&config)
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    install_tracing_from_config(&config.logging);

    // Create and migrate database
    let db_cfg = database_config_from_config(&config);
    let db_pool = bawaba_db::create_pool(&db_cfg).await?;
    run_migrations(&config.database.driver, &db_pool).await?;

    tracing::info!(
        db_url = %bawaba_db::utils::sanitize_database_url(&db_cfg.url),
        db_max_connections = %db_cfg.max_connections,
        locale = %config.messages.locale,
        "database and message configuration"
    );

    // Build application state and router
    let locale = Locale::parse(&config.messages.locale).unwrap_or_default();
    let state = AppState::from_pool(db_pool, MessageCatalog::new(locale));
    let app = bawaba_backend::build_router(Arc::new(state));

    // Start server
    let addr = parse_bind_address(&config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Load configuration from file or defaults.
fn load_config(path: &Option<String>) -> anyhow::Result<bawaba_config::Config> {
    match path.as_deref() {
        Some(p) => bawaba_config::load_config(Some(p)).map_err(|e| {
            eprintln!("failed to load configuration: {e}");
            anyhow::anyhow!(e.to_string())
        }),
        None => bawaba_config::load_config::<&std::path::Path>(None).map_err(|e| {
            eprintln!("failed to load configuration: {e}");
            anyhow::anyhow!(e.to_string())
        }),
    }
}

/// Run database migrations based on the configured driver.
async fn run_migrations(driver: &str, db_pool: &bawaba_db::DbPool) -> anyhow::Result<()> {
    let migrate_res = match driver {
        "postgres" => {
            tracing::info!("applying Postgres migrations");
            bawaba_migrations::postgres_migrator().run(db_pool).await
        }
        "mysql" => {
            tracing::info!("applying MySQL migrations");
            bawaba_migrations::mysql_migrator().run(db_pool).await
        }
        _ => {
            tracing::info!("applying SQLite migrations");
            bawaba_migrations::sqlite_migrator().run(db_pool).await
        }
    };

    match migrate_res {
        Ok(_) => {
            tracing::info!("database migrations applied successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(%e, "failed to apply database migrations");
            Err(anyhow::anyhow!("failed to apply database migrations: {e}"))
        }
    }
}
