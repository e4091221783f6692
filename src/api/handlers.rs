use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::middleware::request_id::RequestId;
use crate::models::{
    Analysis, AnalyzeOutfitRequest, CompleteOutfitRequest, CompletedOutfit, CreateOutfitRequest,
    DailyRecommendation, DailyRecommendationRequest, Outfit, SimilarItem, SimilarItemsRequest,
};
use crate::services::{daily, outfits};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Score an arbitrary set of items; degraded analyses are still a 200
pub async fn analyze_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AnalyzeOutfitRequest>,
) -> Json<Analysis> {
    tracing::info!(
        request_id = %request_id,
        item_count = request.items.len(),
        "Analyzing outfit"
    );

    let analysis = state
        .engine
        .analyze_outfit(&request.items, request.occasion, Utc::now());
    Json(analysis)
}

pub async fn create_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CreateOutfitRequest>,
) -> AppResult<(StatusCode, Json<Outfit>)> {
    tracing::info!(
        request_id = %request_id,
        owner_id = %request.owner_id,
        item_count = request.items.len(),
        "Creating outfit"
    );

    let outfit = outfits::create_outfit(&state.engine, request, Utc::now())?;
    Ok((StatusCode::CREATED, Json(outfit)))
}

pub async fn complete_outfit(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<CompleteOutfitRequest>,
) -> AppResult<Json<CompletedOutfit>> {
    tracing::info!(
        request_id = %request_id,
        target = %request.target_category,
        catalog_size = request.catalog.len(),
        "Completing outfit"
    );

    let completed = state.engine.complete_outfit(
        &request.partial,
        request.target_category,
        &request.catalog,
        Utc::now(),
    )?;
    Ok(Json(completed))
}

pub async fn similar_items(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SimilarItemsRequest>,
) -> Json<Vec<SimilarItem>> {
    let k = request.k.unwrap_or(state.similar_items_limit);

    tracing::info!(
        request_id = %request_id,
        reference_id = %request.reference.id,
        k,
        "Finding similar items"
    );

    Json(
        state
            .engine
            .similar_items(&request.reference, &request.catalog, k),
    )
}

pub async fn daily_recommendation(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<DailyRecommendationRequest>,
) -> AppResult<Json<DailyRecommendation>> {
    let now = Utc::now();
    let date = request.date.unwrap_or_else(|| now.date_naive());

    tracing::info!(
        request_id = %request_id,
        user_id = %request.user_id,
        date = %date,
        "Daily recommendation requested"
    );

    let recommendation = daily::memoized_daily_recommendation(
        &state.engine,
        state.daily_cache.as_ref(),
        &request.user_id,
        &request.catalog,
        date,
        now,
    )
    .await?;
    Ok(Json(recommendation))
}
