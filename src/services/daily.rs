use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    db::{catalog_fingerprint, CacheKey, DailyCache, DailyEntry},
    error::AppResult,
    models::{ClothingItem, DailyRecommendation},
    services::recommendations::RecommendationEngine,
};

/// Daily recommendation memoized per user and day
///
/// A cached pick is reused only while the active catalog is unchanged, and is
/// stamped with `now` like a fresh one. A cache that cannot be read is treated
/// as a miss.
pub async fn memoized_daily_recommendation(
    engine: &RecommendationEngine,
    cache: &dyn DailyCache,
    user_id: &str,
    catalog: &[ClothingItem],
    date: NaiveDate,
    now: DateTime<Utc>,
) -> AppResult<DailyRecommendation> {
    let key = CacheKey::DailyRecommendation {
        user_id: user_id.to_string(),
        date,
    };
    let fingerprint = catalog_fingerprint(catalog)?;

    match cache.get(&key).await {
        Ok(Some(entry)) if entry.fingerprint == fingerprint => {
            tracing::debug!(key = %key, "Daily recommendation cache hit");
            let mut recommendation = entry.recommendation;
            recommendation.analysis.generated_at = now;
            return Ok(recommendation);
        }
        Ok(Some(_)) => {
            tracing::debug!(key = %key, "Catalog changed since daily recommendation was cached");
        }
        Ok(None) => {
            tracing::debug!(key = %key, "Daily recommendation cache miss");
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Daily cache read failed, recomputing");
        }
    }

    let recommendation = engine.daily_recommendation(user_id, catalog, date, now)?;

    cache.put(
        &key,
        &DailyEntry {
            fingerprint,
            recommendation: recommendation.clone(),
        },
    );

    Ok(recommendation)
}
