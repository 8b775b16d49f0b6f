use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tracing::{error, info, warn};

use streakboard_app::presentation::{bootstrap::build_app_state, router};
use streakboard_domain::clock::SystemClock;
use streakboard_infrastructure::logging::{init_console_logger, init_logger};
use streakboard_infrastructure::{AppConfig, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let startup_started_at = Instant::now();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    if let Err(e) = init_logger(&config.log_dir, config.log_level) {
        init_console_logger(config.log_level);
        warn!(
            log_dir = %config.log_dir.display(),
            "File logging unavailable, using console only: {}",
            e
        );
    }

    info!("🚀 Starting streakboard");

    let db_path = config
        .db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    info!("Database path: {}", db_path);

    info!("🔌 Connecting to database...");
    let started_at = Instant::now();
    let database = Database::new(db_path).await?;
    info!(
        "✓ Database connection established ({}ms)",
        started_at.elapsed().as_millis()
    );

    let state = build_app_state(&database, &config, Arc::new(SystemClock)).await?;
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.address))?;

    info!(
        addr = %config.address,
        "✓ Listening ({}ms since start)",
        startup_started_at.elapsed().as_millis()
    );

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for ctrl+c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
