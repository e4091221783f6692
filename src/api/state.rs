use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::db::{DailyCache, MemoryCache};
use crate::services::RecommendationEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
    pub daily_cache: Arc<dyn DailyCache>,
    pub similar_items_limit: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default configuration with an in-process daily cache
    pub fn new() -> Self {
        let config = Config::default();
        let cache = MemoryCache::new(Duration::from_secs(config.daily_cache_ttl_secs));
        Self::from_config(&config, Arc::new(cache))
    }

    pub fn from_config(config: &Config, daily_cache: Arc<dyn DailyCache>) -> Self {
        let engine = RecommendationEngine::default().with_daily_sample_size(config.daily_sample_size);

        Self {
            engine: Arc::new(engine),
            daily_cache,
            similar_items_limit: config.similar_items_limit,
        }
    }
}
