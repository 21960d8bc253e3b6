use std::str::FromStr;

use anyhow::Context;
use tracing::{Level, info, warn};

use advertisement_server::config::AppConfig;
use advertisement_server::state::AppState;
use advertisement_server::{build_router, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load config")?;
    init_tracing(&config.logging.level);

    let db = database::init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    info!("Database connected");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { db, config };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(level: &str) {
    let parsed = Level::from_str(level);
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(*parsed.as_ref().unwrap_or(&Level::INFO))
        .init();

    if parsed.is_err() {
        warn!(%level, "Unknown log level, falling back to info");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
