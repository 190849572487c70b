mod api;
mod catalog;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::storage::{DataSource, JsonFileStore};
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    init_logging(&config)?;

    info!("🚀 Starting Restaurant Review API");
    info!("📋 Configuration loaded");
    info!("   - Environment: {}", config.environment);
    info!("   - Data dir: {:?}", config.storage.data_dir);
    info!("   - Reload: {}", config.storage.reload);

    let store = JsonFileStore::new(
        &config.storage.data_dir,
        &config.storage.restaurants_file,
        &config.storage.reviews_file,
    );
    let source = DataSource::open(store, config.storage.reload)
        .await
        .with_context(|| format!("failed to load data from {:?}", config.storage.data_dir))?;
    info!("✅ Data source ready ({})", source.policy());

    let state = AppState {
        source: Arc::new(source),
    };
    let app = api::router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                     - Service banner");
    info!("   GET  /health               - Health check");
    info!("   GET  /api/restaurants      - List restaurants (search, category, minRating, priceRange)");
    info!("   GET  /api/restaurants/{{id}} - Restaurant with reviews");
    info!("   GET  /api/reviews          - List reviews (restaurantId)");
    info!("   GET  /api/stats            - Aggregate statistics");
    info!("");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Pretty output while developing, compact everywhere else
fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if config.is_development() {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    } else {
        tracing::subscriber::set_global_default(builder.compact().finish())
    }
    .context("failed to set tracing subscriber")
}

/// Resolves once the process is asked to stop (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Ctrl-C listener unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "SIGTERM listener unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = first_stop_signal(interrupt, terminate).await;
    info!(signal, "🛑 Stop requested, draining in-flight requests");
}

/// Name of whichever stop future finishes first
async fn first_stop_signal(
    interrupt: impl Future<Output = ()>,
    terminate: impl Future<Output = ()>,
) -> &'static str {
    tokio::select! {
        _ = interrupt => "interrupt",
        _ = terminate => "terminate",
    }
}
