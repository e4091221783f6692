use std::collections::BTreeSet;

use crate::{
    models::{Aspect, SubScore},
    services::attributes::OutfitAttributes,
};

use super::{AnalysisError, Analyzer};

/// Rule table for color harmony scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRules {
    pub base_score: i32,
    /// Palettes with at most this many distinct colors earn `cohesive_bonus`
    pub cohesive_max_colors: usize,
    pub cohesive_bonus: i32,
    /// Palettes with at least this many distinct colors lose `scattered_penalty`
    pub scattered_min_colors: usize,
    pub scattered_penalty: i32,
    /// Lower-case neutral color names
    pub neutral_colors: BTreeSet<String>,
    pub neutral_bonus: i32,
    pub great_threshold: u8,
    pub good_threshold: u8,
}

impl Default for ColorRules {
    fn default() -> Self {
        Self {
            base_score: 70,
            cohesive_max_colors: 3,
            cohesive_bonus: 15,
            scattered_min_colors: 5,
            scattered_penalty: 10,
            neutral_colors: ["black", "white", "gray", "navy", "beige", "brown"]
                .into_iter()
                .map(String::from)
                .collect(),
            neutral_bonus: 10,
            great_threshold: 80,
            good_threshold: 60,
        }
    }
}

/// Scores how well the colors of an outfit go together
#[derive(Debug, Clone, Default)]
pub struct ColorHarmonyAnalyzer {
    rules: ColorRules,
}

impl ColorHarmonyAnalyzer {
    pub fn new(rules: ColorRules) -> Self {
        Self { rules }
    }

    fn feedback(&self, score: u8) -> &'static str {
        if score >= self.rules.great_threshold {
            "Great color combination!"
        } else if score >= self.rules.good_threshold {
            "Good color harmony"
        } else {
            "Consider adjusting colors"
        }
    }
}

impl Analyzer for ColorHarmonyAnalyzer {
    fn aspect(&self) -> Aspect {
        Aspect::ColorHarmony
    }

    fn score(&self, attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError> {
        let rules = &self.rules;
        let distinct = attributes.distinct_colors();

        let mut score = rules.base_score;
        // Four colors sit between the two bands and get neither adjustment.
        if distinct.len() <= rules.cohesive_max_colors {
            score += rules.cohesive_bonus;
        }
        if distinct.len() >= rules.scattered_min_colors {
            score -= rules.scattered_penalty;
        }
        if distinct.iter().any(|c| rules.neutral_colors.contains(*c)) {
            score += rules.neutral_bonus;
        }

        let score = score.clamp(0, 100) as u8;
        Ok(SubScore::new(score, self.feedback(score)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ClothingItem};
    use crate::services::attributes::AttributeExtractor;

    fn score_colors(colors: &[&str]) -> SubScore {
        let items: Vec<ClothingItem> = colors
            .iter()
            .enumerate()
            .map(|(i, c)| ClothingItem::new(format!("i{}", i), "u", Category::Top, *c))
            .collect();
        let attrs = AttributeExtractor.extract(&items, None).unwrap();
        ColorHarmonyAnalyzer::default().score(&attrs).unwrap()
    }

    #[test]
    fn test_three_colors_with_neutral() {
        let result = score_colors(&["black", "red", "green"]);
        assert_eq!(result.score, 95);
        assert_eq!(result.feedback, "Great color combination!");
    }

    #[test]
    fn test_five_colors_no_neutral() {
        let result = score_colors(&["red", "green", "blue", "yellow", "purple"]);
        assert_eq!(result.score, 60);
        assert_eq!(result.feedback, "Good color harmony");
    }

    #[test]
    fn test_four_colors_get_no_adjustment() {
        let result = score_colors(&["red", "green", "blue", "yellow"]);
        assert_eq!(result.score, 70);
        assert_eq!(result.feedback, "Good color harmony");
    }

    #[test]
    fn test_colors_compared_case_insensitively() {
        // "Red", "RED" and "red" count as one color
        let result = score_colors(&["Red", "RED", "red", "Blue", "green", "pink"]);
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_neutral_detected_regardless_of_case() {
        let result = score_colors(&["NAVY", "red", "green", "blue", "pink"]);
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_score_is_clamped() {
        let rules = ColorRules {
            base_score: 5,
            scattered_penalty: 50,
            ..ColorRules::default()
        };
        let items: Vec<ClothingItem> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|c| ClothingItem::new(*c, "u", Category::Top, *c))
            .collect();
        let attrs = AttributeExtractor.extract(&items, None).unwrap();
        let result = ColorHarmonyAnalyzer::new(rules).score(&attrs).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback, "Consider adjusting colors");
    }

    #[test]
    fn test_substitute_neutral_set() {
        let rules = ColorRules {
            neutral_colors: ["olive".to_string()].into_iter().collect(),
            ..ColorRules::default()
        };
        let items = vec![
            ClothingItem::new("a", "u", Category::Top, "black"),
            ClothingItem::new("b", "u", Category::Bottom, "olive"),
        ];
        let attrs = AttributeExtractor.extract(&items, None).unwrap();
        let result = ColorHarmonyAnalyzer::new(rules).score(&attrs).unwrap();
        assert_eq!(result.score, 95);
    }
}
