use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, ClothingItem, Occasion, Season};
use crate::services::analysis::AnalysisError;

/// Normalized attribute vectors of an outfit candidate
///
/// Item order does not affect the normalized value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitAttributes {
    /// One lower-cased color per item, sorted
    pub colors: Vec<String>,
    /// Category multiset
    pub categories: BTreeMap<Category, usize>,
    pub tags: BTreeSet<String>,
    pub occasions: BTreeSet<Occasion>,
    pub seasons: BTreeSet<Season>,
    /// Occasion the outfit is meant for, if the caller declared one
    pub declared_occasion: Option<Occasion>,
}

impl OutfitAttributes {
    pub fn item_count(&self) -> usize {
        self.colors.len()
    }

    pub fn distinct_colors(&self) -> BTreeSet<&str> {
        self.colors.iter().map(String::as_str).collect()
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains_key(&category)
    }
}

/// Builds [`OutfitAttributes`] from item records
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeExtractor;

impl AttributeExtractor {
    pub fn extract(
        &self,
        items: &[ClothingItem],
        declared_occasion: Option<Occasion>,
    ) -> Result<OutfitAttributes, AnalysisError> {
        if items.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut colors: Vec<String> = items.iter().map(ClothingItem::normalized_color).collect();
        colors.sort();

        let mut categories = BTreeMap::new();
        for item in items {
            *categories.entry(item.category).or_insert(0) += 1;
        }

        Ok(OutfitAttributes {
            colors,
            categories,
            tags: items.iter().flat_map(|i| i.tags.iter().cloned()).collect(),
            occasions: items.iter().flat_map(|i| i.occasion.iter().copied()).collect(),
            seasons: items.iter().flat_map(|i| i.season.iter().copied()).collect(),
            declared_occasion,
        })
    }
}
