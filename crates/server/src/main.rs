use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parking_core::{
    load_config, load_default_config, validate_config, Clock, MemoryTicketStore, SystemClock,
    TicketStore,
};
use parking_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("PARKING_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration, falling back to defaults when no file is present
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!(
            "No configuration file at {:?}, using defaults",
            config_path
        );
        load_default_config().context("Failed to load default config")?
    };

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!(
        "Billing: {} per hour",
        config
            .billing
            .hourly_rate_money()
            .with_symbol(&config.billing.currency_symbol)
    );

    let ticket_store: Arc<dyn TicketStore> = Arc::new(MemoryTicketStore::new());
    info!("Ticket store initialized (in memory, not persisted)");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

    let addr = SocketAddr::new(config.server.host, config.server.port);

    let state = Arc::new(AppState::new(config, ticket_store, clock));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down, open tickets discarded");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
