use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CreateOutfitRequest, Outfit},
    services::recommendations::RecommendationEngine,
};

/// Builds an outfit record from items the owner already has
///
/// Every item must be active and belong to `owner_id`. The attached analysis
/// is fail-soft: an outfit is created even when it cannot be analyzed.
pub fn create_outfit(
    engine: &RecommendationEngine,
    request: CreateOutfitRequest,
    created_at: DateTime<Utc>,
) -> AppResult<Outfit> {
    let unavailable = request
        .items
        .iter()
        .filter(|i| !i.is_active() || i.owner_id != request.owner_id)
        .count();

    if unavailable > 0 {
        tracing::warn!(
            owner_id = %request.owner_id,
            unavailable,
            "Outfit references items that are not available"
        );
        return Err(AppError::InvalidInput(
            "Some items not found or unavailable".to_string(),
        ));
    }

    let analysis = engine.analyze_outfit(&request.items, request.occasion, created_at);

    let outfit = Outfit {
        id: Uuid::new_v4(),
        owner_id: request.owner_id,
        name: request.name,
        description: request.description,
        items: request.items,
        occasion: request.occasion,
        season: request.season,
        tags: request.tags,
        analysis,
        created_at,
    };

    tracing::info!(
        outfit_id = %outfit.id,
        item_count = outfit.items.len(),
        overall_score = outfit.analysis.overall_score(),
        degraded = outfit.analysis.is_degraded(),
        "Outfit created"
    );

    Ok(outfit)
}
