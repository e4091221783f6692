use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AppError, AppResult};
use crate::models::{ClothingItem, DailyRecommendation};

pub mod memory;
pub mod redis;

pub use self::memory::MemoryCache;
pub use self::redis::{create_redis_client, Cache, CacheKey, CacheWriterHandle, RedisDailyCache};

/// A memoized daily recommendation and the catalog state it was computed from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyEntry {
    pub fingerprint: String,
    pub recommendation: DailyRecommendation,
}

/// Storage for memoized daily recommendations
///
/// Writes are last-write-wins and may complete after `put` returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DailyCache: Send + Sync {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<DailyEntry>>;

    fn put(&self, key: &CacheKey, entry: &DailyEntry);
}

/// SHA-256 over the active items of a catalog, independent of their order
pub fn catalog_fingerprint(catalog: &[ClothingItem]) -> AppResult<String> {
    let mut active: Vec<&ClothingItem> = catalog.iter().filter(|i| i.is_active()).collect();
    active.sort_by(|a, b| a.id.cmp(&b.id));

    let json = serde_json::to_vec(&active)
        .map_err(|e| AppError::Internal(format!("Catalog serialization error: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemStatus};

    fn catalog() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new("a", "u", Category::Top, "red"),
            ClothingItem::new("b", "u", Category::Bottom, "blue"),
        ]
    }

    #[test]
    fn test_fingerprint_ignores_order() {
        let mut reversed = catalog();
        reversed.reverse();
        assert_eq!(
            catalog_fingerprint(&catalog()).unwrap(),
            catalog_fingerprint(&reversed).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_ignores_inactive_items() {
        let mut with_archived = catalog();
        with_archived.push(
            ClothingItem::new("c", "u", Category::Shoes, "black").with_status(ItemStatus::Archived),
        );
        assert_eq!(
            catalog_fingerprint(&catalog()).unwrap(),
            catalog_fingerprint(&with_archived).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_changes_with_attributes() {
        let mut recolored = catalog();
        recolored[0].color = "green".to_string();
        assert_ne!(
            catalog_fingerprint(&catalog()).unwrap(),
            catalog_fingerprint(&recolored).unwrap()
        );
    }
}
