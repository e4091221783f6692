use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeSet;

pub mod analysis;
pub mod item;
pub mod outfit;
pub mod recommendation;

pub use analysis::{Analysis, AnalysisResult, Aspect, SubScore};
pub use item::{Category, ClothingItem, ItemStatus, Occasion, Season};
pub use outfit::Outfit;
pub use recommendation::{CompletedOutfit, DailyRecommendation, SimilarItem};

// ============================================================================
// Request Types
// ============================================================================

/// Request to score an arbitrary set of items
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutfitRequest {
    pub items: Vec<ClothingItem>,
    #[serde(default)]
    pub occasion: Option<Occasion>,
}

/// Request to create an outfit from items the owner already has
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutfitRequest {
    pub owner_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<ClothingItem>,
    #[serde(default)]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub season: BTreeSet<Season>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOutfitRequest {
    pub partial: Vec<ClothingItem>,
    pub target_category: Category,
    pub catalog: Vec<ClothingItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarItemsRequest {
    pub reference: ClothingItem,
    pub catalog: Vec<ClothingItem>,
    /// Falls back to the configured limit when omitted
    #[serde(default)]
    pub k: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecommendationRequest {
    pub user_id: String,
    /// Defaults to the current UTC date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub catalog: Vec<ClothingItem>,
}
