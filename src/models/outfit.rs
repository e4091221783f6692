use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::{Analysis, ClothingItem, Occasion, Season};

/// A named outfit assembled by a user, with its analysis attached
///
/// Built fresh for each creation request. Persisting it is up to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: Uuid,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub items: Vec<ClothingItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub season: BTreeSet<Season>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub analysis: Analysis,
    pub created_at: DateTime<Utc>,
}
