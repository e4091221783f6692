use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wardrobe_api::api::{create_router, AppState};
use wardrobe_api::config::Config;
use wardrobe_api::db::{create_redis_client, Cache, DailyCache, MemoryCache, RedisDailyCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wardrobe_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Daily recommendations are memoized in Redis when configured, in-process otherwise
    let (daily_cache, writer_handle) = match &config.redis_url {
        Some(url) => {
            let client = create_redis_client(url)?;
            let (cache, handle) = Cache::new(client).await;
            tracing::info!("Using Redis for daily recommendation cache");
            let cache: Arc<dyn DailyCache> =
                Arc::new(RedisDailyCache::new(cache, config.daily_cache_ttl_secs));
            (cache, Some(handle))
        }
        None => {
            tracing::info!("REDIS_URL not set, using in-process daily recommendation cache");
            let cache: Arc<dyn DailyCache> =
                Arc::new(MemoryCache::new(Duration::from_secs(config.daily_cache_ttl_secs)));
            (cache, None)
        }
    };

    let state = AppState::from_config(&config, daily_cache);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = writer_handle {
        handle.shutdown().await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
