use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::db::{CacheKey, DailyCache, DailyEntry};
use crate::error::AppResult;

/// In-process daily recommendation memo, used when no Redis is configured
///
/// Expired entries are dropped when they are next read.
pub struct MemoryCache {
    entries: DashMap<String, (Instant, DailyEntry)>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, stored_at: Instant) -> bool {
        stored_at.elapsed() < self.ttl
    }
}

#[async_trait]
impl DailyCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<DailyEntry>> {
        let key = key.to_string();
        let expired = match self.entries.get(&key) {
            Some(entry) if self.is_fresh(entry.0) => return Ok(Some(entry.1.clone())),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.entries
                .remove_if(&key, |_, (stored_at, _)| !self.is_fresh(*stored_at));
        }
        Ok(None)
    }

    fn put(&self, key: &CacheKey, entry: &DailyEntry) {
        self.entries
            .insert(key.to_string(), (Instant::now(), entry.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, DailyRecommendation};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn key(user_id: &str) -> CacheKey {
        CacheKey::DailyRecommendation {
            user_id: user_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    fn entry(fingerprint: &str) -> DailyEntry {
        DailyEntry {
            fingerprint: fingerprint.to_string(),
            recommendation: DailyRecommendation {
                user_id: "u1".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                outfit: vec![],
                analysis: AnalysisResult::degraded(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
            },
        }
    }

    #[tokio::test]
    async fn test_get_after_put() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(&key("u1")).await.unwrap(), None);

        cache.put(&key("u1"), &entry("f1"));
        assert_eq!(cache.get(&key("u1")).await.unwrap(), Some(entry("f1")));
        assert_eq!(cache.get(&key("u2")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.put(&key("u1"), &entry("f1"));
        cache.put(&key("u1"), &entry("f2"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key("u1")).await.unwrap(), Some(entry("f2")));
    }

    #[tokio::test]
    async fn test_expired_entries_are_misses_and_evicted_on_read() {
        let cache = MemoryCache::new(Duration::ZERO);
        cache.put(&key("u1"), &entry("f1"));
        cache.put(&key("u2"), &entry("f2"));
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.get(&key("u1")).await.unwrap(), None);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key("u2")).await.unwrap(), None);
        assert!(cache.is_empty());
    }
}
