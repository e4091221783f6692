use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Redis connection URL; daily recommendations are memoized in-process when unset
    #[serde(default)]
    pub redis_url: Option<String>,

    /// How long a memoized daily recommendation stays in Redis
    #[serde(default = "default_daily_cache_ttl_secs")]
    pub daily_cache_ttl_secs: u64,

    /// Seeded starting points per daily recommendation when the wardrobe is
    /// too large to score in full
    #[serde(default = "default_daily_sample_size")]
    pub daily_sample_size: usize,

    /// Number of similar items returned when a request does not ask for a count
    #[serde(default = "default_similar_items_limit")]
    pub similar_items_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_daily_cache_ttl_secs() -> u64 {
    86_400
}

fn default_daily_sample_size() -> usize {
    crate::services::recommendations::DEFAULT_DAILY_SAMPLE_SIZE
}

fn default_similar_items_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            redis_url: None,
            daily_cache_ttl_secs: default_daily_cache_ttl_secs(),
            daily_sample_size: default_daily_sample_size(),
            similar_items_limit: default_similar_items_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert!(config.redis_url.is_none());
        assert_eq!(config.daily_cache_ttl_secs, 86_400);
        assert_eq!(config.daily_sample_size, 8);
        assert_eq!(config.similar_items_limit, 5);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("PORT", "8080"),
            ("REDIS_URL", "redis://cache:6379"),
            ("DAILY_SAMPLE_SIZE", "32"),
            ("SIMILAR_ITEMS_LIMIT", "10"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.daily_sample_size, 32);
        assert_eq!(config.similar_items_limit, 10);
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_vars(vars(&[("PORT", "not-a-port")])).is_err());
    }
}
