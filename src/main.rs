//! Memory Cache - process entry point
//!
//! Builds a shared cache instance and keeps it alive until shutdown.

use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memorycache::{spawn_stats_reporter, AnyCache, Config};

/// Main entry point for the memory cache process.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache store
/// 4. Start the periodic stats reporter (unless disabled)
/// 5. Wait for SIGINT/SIGTERM, then log final statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memorycache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting memory cache");

    let config = Config::from_env();
    info!(
        "Configuration loaded: shards={}, initial_capacity={}, stats_interval={}s",
        config.shards, config.initial_capacity, config.stats_interval
    );

    let cache = Arc::new(AnyCache::from_config(&config));
    info!(shards = cache.shard_count(), "Cache store initialized");

    let reporter = (config.stats_interval > 0)
        .then(|| spawn_stats_reporter(cache.clone(), config.stats_interval));

    shutdown_signal().await?;

    if let Some(handle) = reporter {
        handle.abort();
        warn!("Stats reporter aborted");
    }

    let stats = serde_json::to_string(&cache.stats())?;
    info!(stats = %stats, "Shutdown complete");

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() -> anyhow::Result<()> {
    let ctrl_c = signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;

        tokio::select! {
            result = ctrl_c => {
                result?;
                info!("Received Ctrl+C, initiating shutdown...");
            }
            _ = terminate.recv() => {
                info!("Received SIGTERM, initiating shutdown...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await?;
        info!("Received Ctrl+C, initiating shutdown...");
    }

    Ok(())
}
