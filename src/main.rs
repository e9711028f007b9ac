//! Dragonball catalog server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use dragonball_api::{AppState, build_app};
use dragonball_core::config::AppConfig;
use dragonball_core::error::AppError;
use dragonball_database::memory::{MemoryCharacterRepository, MemoryUserRepository};
use dragonball_database::repositories::{CharacterRepository, UserRepository};
use dragonball_database::{CharacterStore, DatabasePool, UserStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("DRAGONBALL_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Loaded configuration (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Stores backing the application, plus the pool to close on shutdown.
struct Stores {
    users: Arc<dyn UserStore>,
    characters: Arc<dyn CharacterStore>,
    pool: Option<DatabasePool>,
}

async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    if config.database.postgres_url().is_none() {
        tracing::warn!("No database URL configured; using in-memory stores");
        return Ok(Stores {
            users: Arc::new(MemoryUserRepository::new()),
            characters: Arc::new(MemoryCharacterRepository::new()),
            pool: None,
        });
    }

    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        dragonball_database::migration::run_migrations(db.pool()).await?;
        tracing::info!("Database migrations complete");
    }

    Ok(Stores {
        users: Arc::new(UserRepository::new(db.pool().clone())),
        characters: Arc::new(CharacterRepository::new(db.pool().clone())),
        pool: Some(db),
    })
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Dragonball catalog v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let seed_enabled = config.seed.enabled;

    let stores = open_stores(&config).await?;
    let state = AppState::new(config, stores.users, stores.characters)?;

    if seed_enabled {
        state.seeder().run().await?;
    }

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Dragonball catalog listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = stores.pool {
        pool.close().await;
    }

    tracing::info!("Server shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
