//! Maple API server binary

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maple_api::cache::ResponseCache;
use maple_api::{create_router, spawn_cleanup_task, AppState, Config, MemoryStore};

/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load the document store
/// 4. Set up the response cache and its cleanup task, if enabled
/// 5. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maple_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Maple API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, environment={:?}, data_path={}, cache_enabled={}",
        config.server_port,
        config.environment,
        config.data_path.display(),
        config.cache.enabled
    );

    let store = MemoryStore::load(&config.data_path).await?;
    let mut state = AppState::new(Arc::new(store));
    info!("Registered {} API calls", state.registry.calls().len());

    match &config.cache.endpoint {
        Some(endpoint) => info!("Item - shared cache endpoint {} configured", endpoint),
        None => warn!("Item - REDIS_HOST/REDIS_PORT not set, no shared cache endpoint"),
    }

    let mut cleanup_handle = None;
    if config.cache.enabled {
        let cache = ResponseCache::from_config(&config.cache, config.environment);
        cleanup_handle = Some(spawn_cleanup_task(cache.store(), config.cache.cleanup_interval));
        state = state.with_cache(cache);
        info!(
            "Item response caching enabled: ttl={}s, max_entries={}",
            config.cache.ttl, config.cache.max_entries
        );
    } else {
        info!("Item response caching disabled");
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then stops the cache cleanup task.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cache cleanup task aborted");
    }
}
