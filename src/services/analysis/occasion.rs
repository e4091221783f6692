use crate::{
    models::{Aspect, SubScore},
    services::attributes::OutfitAttributes,
};

use super::{AnalysisError, Analyzer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccasionRules {
    pub default_score: u8,
    pub default_feedback: String,
}

impl Default for OccasionRules {
    fn default() -> Self {
        Self {
            default_score: 75,
            default_feedback: "Best suited for casual occasions".to_string(),
        }
    }
}

/// Scores how well an outfit suits its occasion
///
/// Applies a fixed default policy: neither the items nor the declared occasion
/// affect the result.
#[derive(Debug, Clone, Default)]
pub struct OccasionFitAnalyzer {
    rules: OccasionRules,
}

impl OccasionFitAnalyzer {
    pub fn new(rules: OccasionRules) -> Self {
        Self { rules }
    }
}

impl Analyzer for OccasionFitAnalyzer {
    fn aspect(&self) -> Aspect {
        Aspect::OccasionFit
    }

    fn score(&self, _attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError> {
        Ok(SubScore::new(
            self.rules.default_score,
            self.rules.default_feedback.clone(),
        ))
    }
}
