use crate::{
    models::{Aspect, Category, SubScore},
    services::attributes::OutfitAttributes,
};

use super::{AnalysisError, Analyzer};

/// Rule table for style cohesion scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRules {
    /// Categories a complete outfit covers, in reporting order
    pub required: Vec<Category>,
    pub penalty_per_missing: u8,
}

impl Default for StyleRules {
    fn default() -> Self {
        Self {
            required: vec![Category::Top, Category::Bottom, Category::Shoes],
            penalty_per_missing: 25,
        }
    }
}

/// Scores whether an outfit covers the required categories
#[derive(Debug, Clone, Default)]
pub struct StyleCohesionAnalyzer {
    rules: StyleRules,
}

impl StyleCohesionAnalyzer {
    pub fn new(rules: StyleRules) -> Self {
        Self { rules }
    }

    pub fn required(&self) -> &[Category] {
        &self.rules.required
    }
}

impl Analyzer for StyleCohesionAnalyzer {
    fn aspect(&self) -> Aspect {
        Aspect::StyleCohesion
    }

    fn score(&self, attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError> {
        let missing: Vec<&str> = self
            .rules
            .required
            .iter()
            .filter(|c| !attributes.has_category(**c))
            .map(Category::as_str)
            .collect();

        let penalty = missing.len() as u32 * self.rules.penalty_per_missing as u32;
        let score = 100u32.saturating_sub(penalty) as u8;

        let feedback = if missing.is_empty() {
            "Complete outfit!".to_string()
        } else {
            format!("Missing: {}", missing.join(", "))
        };

        Ok(SubScore::new(score, feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClothingItem;
    use crate::services::attributes::AttributeExtractor;

    fn score_categories(categories: &[Category]) -> SubScore {
        let items: Vec<ClothingItem> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| ClothingItem::new(format!("i{}", i), "u", *c, "black"))
            .collect();
        let attrs = AttributeExtractor.extract(&items, None).unwrap();
        StyleCohesionAnalyzer::default().score(&attrs).unwrap()
    }

    #[test]
    fn test_complete_outfit() {
        let result = score_categories(&[Category::Top, Category::Bottom, Category::Shoes]);
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback, "Complete outfit!");
    }

    #[test]
    fn test_missing_shoes() {
        let result = score_categories(&[Category::Top, Category::Bottom]);
        assert_eq!(result.score, 75);
        assert_eq!(result.feedback, "Missing: shoes");
    }

    #[test]
    fn test_missing_listed_in_fixed_order() {
        let result = score_categories(&[Category::Bottom, Category::Accessories]);
        assert_eq!(result.score, 50);
        assert_eq!(result.feedback, "Missing: top, shoes");
    }

    #[test]
    fn test_nothing_required_present() {
        let result = score_categories(&[Category::Dress, Category::Outerwear]);
        assert_eq!(result.score, 25);
        assert_eq!(result.feedback, "Missing: top, bottom, shoes");
    }

    #[test]
    fn test_score_floors_at_zero() {
        let rules = StyleRules {
            penalty_per_missing: 60,
            ..StyleRules::default()
        };
        let items = vec![ClothingItem::new("a", "u", Category::Dress, "red")];
        let attrs = AttributeExtractor.extract(&items, None).unwrap();
        let result = StyleCohesionAnalyzer::new(rules).score(&attrs).unwrap();
        assert_eq!(result.score, 0);
    }
}
