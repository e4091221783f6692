use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AnalysisResult, ClothingItem};

/// Best single item to finish a partial outfit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletedOutfit {
    pub item: ClothingItem,
    /// Analysis of the partial outfit plus `item`
    pub analysis: AnalysisResult,
}

/// A catalog item ranked against a reference item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarItem {
    pub item: ClothingItem,
    pub similarity_score: u32,
}

/// The outfit picked for one user on one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecommendation {
    pub user_id: String,
    pub date: NaiveDate,
    pub outfit: Vec<ClothingItem>,
    pub analysis: AnalysisResult,
}
