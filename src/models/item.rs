use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Garment category of a clothing item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Shoes,
    Accessories,
    Outerwear,
    Dress,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Outerwear => "outerwear",
            Category::Dress => "dress",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllSeason,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Formal,
    Business,
    Sport,
    Evening,
    Beach,
}

/// Lifecycle status; only active items take part in analysis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Archived,
    Donated,
}

/// A garment owned by one user, as loaded by the catalog collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: String,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub category: Category,
    /// Free-form color name, compared case-insensitively
    pub color: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub season: BTreeSet<Season>,
    #[serde(default)]
    pub occasion: BTreeSet<Occasion>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Creates an active, non-favorite item with no tags, seasons or occasions
    pub fn new(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        category: Category,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name: None,
            category,
            color: color.into(),
            tags: BTreeSet::new(),
            season: BTreeSet::new(),
            occasion: BTreeSet::new(),
            is_favorite: false,
            status: ItemStatus::Active,
            created_at: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_occasions(mut self, occasions: impl IntoIterator<Item = Occasion>) -> Self {
        self.occasion.extend(occasions);
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.season.extend(seasons);
        self
    }

    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Lower-cased, trimmed color used for every color comparison
    pub fn normalized_color(&self) -> String {
        self.color.trim().to_lowercase()
    }
}
