use chrono::{DateTime, Utc};

use crate::models::{Analysis, AnalysisResult, Aspect, ClothingItem, Occasion, SubScore};
use crate::services::{
    analysis::{default_analyzers, AnalysisError, Analyzer},
    attributes::AttributeExtractor,
    feedback::FeedbackGenerator,
};

/// Aggregates analyzer outputs into one overall outfit score
///
/// The overall score is the unweighted mean of every analyzer's sub-score,
/// rounded half up. Each of the three result aspects must be covered by at
/// least one analyzer; when several analyzers share an aspect, the last one
/// fills the result slot while all of them count towards the mean.
pub struct CompositeScorer {
    extractor: AttributeExtractor,
    analyzers: Vec<Box<dyn Analyzer>>,
    feedback: FeedbackGenerator,
}

impl Default for CompositeScorer {
    fn default() -> Self {
        Self::new(default_analyzers(), FeedbackGenerator::default())
    }
}

impl CompositeScorer {
    pub fn new(analyzers: Vec<Box<dyn Analyzer>>, feedback: FeedbackGenerator) -> Self {
        Self {
            extractor: AttributeExtractor,
            analyzers,
            feedback,
        }
    }

    /// Scores an outfit, falling back to the degraded result on any failure
    pub fn analyze(
        &self,
        items: &[ClothingItem],
        occasion: Option<Occasion>,
        generated_at: DateTime<Utc>,
    ) -> Analysis {
        match self.try_analyze(items, occasion, generated_at) {
            Ok(result) => Analysis::Ok(result),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    item_count = items.len(),
                    "Outfit analysis failed, returning degraded result"
                );
                Analysis::Degraded(AnalysisResult::degraded(generated_at))
            }
        }
    }

    /// Scores an outfit, surfacing the first failure
    pub fn try_analyze(
        &self,
        items: &[ClothingItem],
        occasion: Option<Occasion>,
        generated_at: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let attributes = self.extractor.extract(items, occasion)?;

        let mut color_harmony: Option<SubScore> = None;
        let mut style_cohesion: Option<SubScore> = None;
        let mut occasion_fit: Option<SubScore> = None;
        let mut total: u32 = 0;

        for analyzer in &self.analyzers {
            let sub_score = analyzer.score(&attributes)?;
            total += sub_score.score as u32;

            let slot = match analyzer.aspect() {
                Aspect::ColorHarmony => &mut color_harmony,
                Aspect::StyleCohesion => &mut style_cohesion,
                Aspect::OccasionFit => &mut occasion_fit,
            };
            *slot = Some(sub_score);
        }

        let color_harmony = color_harmony.ok_or(AnalysisError::MissingAspect(Aspect::ColorHarmony))?;
        let style_cohesion =
            style_cohesion.ok_or(AnalysisError::MissingAspect(Aspect::StyleCohesion))?;
        let occasion_fit = occasion_fit.ok_or(AnalysisError::MissingAspect(Aspect::OccasionFit))?;

        let overall_score = rounded_mean(total, self.analyzers.len());
        let feedback = self.feedback.generate(overall_score);

        tracing::debug!(
            item_count = items.len(),
            overall_score,
            color_harmony = color_harmony.score,
            style_cohesion = style_cohesion.score,
            occasion_fit = occasion_fit.score,
            "Outfit analyzed"
        );

        Ok(AnalysisResult {
            overall_score,
            color_harmony,
            style_cohesion,
            occasion_fit,
            strengths: feedback.strengths,
            improvements: feedback.improvements,
            generated_at,
        })
    }
}

/// Mean of `count` scores summing to `total`, rounded half up
fn rounded_mean(total: u32, count: usize) -> u8 {
    let count = count.max(1) as u32;
    ((2 * total + count) / (2 * count)).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::services::analysis::{ColorHarmonyAnalyzer, OccasionFitAnalyzer, StyleCohesionAnalyzer};
    use crate::services::attributes::OutfitAttributes;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn full_outfit() -> Vec<ClothingItem> {
        vec![
            ClothingItem::new("t1", "u", Category::Top, "black"),
            ClothingItem::new("b1", "u", Category::Bottom, "red"),
            ClothingItem::new("s1", "u", Category::Shoes, "green"),
        ]
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        fn aspect(&self) -> Aspect {
            Aspect::OccasionFit
        }

        fn score(&self, _attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError> {
            Err(AnalysisError::Analyzer {
                aspect: Aspect::OccasionFit,
                reason: "rule table unavailable".to_string(),
            })
        }
    }

    struct FixedAnalyzer(Aspect, u8);

    impl Analyzer for FixedAnalyzer {
        fn aspect(&self) -> Aspect {
            self.0
        }

        fn score(&self, _attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError> {
            Ok(SubScore::new(self.1, "fixed"))
        }
    }

    #[test]
    fn test_composite_of_full_outfit() {
        let result = CompositeScorer::default()
            .try_analyze(&full_outfit(), None, fixed_time())
            .unwrap();

        assert_eq!(result.color_harmony.score, 95);
        assert_eq!(result.style_cohesion.score, 100);
        assert_eq!(result.occasion_fit.score, 75);
        // round(270 / 3)
        assert_eq!(result.overall_score, 90);
        assert_eq!(
            result.strengths,
            vec!["Excellent coordination", "Well-balanced outfit"]
        );
        assert_eq!(result.improvements, vec!["Consider adding accessories"]);
        assert_eq!(result.generated_at, fixed_time());
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(rounded_mean(260, 3), 87);
        assert_eq!(rounded_mean(270, 3), 90);
        assert_eq!(rounded_mean(3, 2), 2);
        assert_eq!(rounded_mean(1, 2), 1);
        assert_eq!(rounded_mean(0, 0), 0);
    }

    #[test]
    fn test_empty_input_is_degraded() {
        let analysis = CompositeScorer::default().analyze(&[], None, fixed_time());
        assert!(analysis.is_degraded());

        let result = analysis.result();
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.color_harmony.score, 0);
        assert_eq!(result.style_cohesion.score, 0);
        assert_eq!(result.occasion_fit.score, 0);
        assert_eq!(result.color_harmony.feedback, "Analysis failed");
        assert!(result.strengths.is_empty());
        assert_eq!(result.improvements, vec!["Unable to analyze outfit"]);
    }

    #[test]
    fn test_failing_analyzer_is_degraded() {
        let scorer = CompositeScorer::new(
            vec![
                Box::new(ColorHarmonyAnalyzer::default()),
                Box::new(StyleCohesionAnalyzer::default()),
                Box::new(FailingAnalyzer),
            ],
            FeedbackGenerator::default(),
        );

        assert!(matches!(
            scorer.try_analyze(&full_outfit(), None, fixed_time()),
            Err(AnalysisError::Analyzer { .. })
        ));
        assert!(scorer.analyze(&full_outfit(), None, fixed_time()).is_degraded());
    }

    #[test]
    fn test_missing_aspect_is_reported() {
        let scorer = CompositeScorer::new(
            vec![
                Box::new(ColorHarmonyAnalyzer::default()),
                Box::new(OccasionFitAnalyzer::default()),
            ],
            FeedbackGenerator::default(),
        );

        assert_eq!(
            scorer.try_analyze(&full_outfit(), None, fixed_time()),
            Err(AnalysisError::MissingAspect(Aspect::StyleCohesion))
        );
    }

    #[test]
    fn test_extra_analyzer_counts_towards_mean() {
        let scorer = CompositeScorer::new(
            vec![
                Box::new(FixedAnalyzer(Aspect::ColorHarmony, 100)),
                Box::new(FixedAnalyzer(Aspect::StyleCohesion, 100)),
                Box::new(FixedAnalyzer(Aspect::OccasionFit, 100)),
                Box::new(FixedAnalyzer(Aspect::OccasionFit, 0)),
            ],
            FeedbackGenerator::default(),
        );

        let result = scorer.try_analyze(&full_outfit(), None, fixed_time()).unwrap();
        assert_eq!(result.overall_score, 75);
        assert_eq!(result.occasion_fit.score, 0);
    }

    #[test]
    fn test_middle_band_feedback() {
        // Two tops, five loud colors: color 60, style 75 (no shoes), occasion 75
        let items = vec![
            ClothingItem::new("a", "u", Category::Top, "red"),
            ClothingItem::new("b", "u", Category::Top, "green"),
            ClothingItem::new("c", "u", Category::Bottom, "blue"),
            ClothingItem::new("d", "u", Category::Accessories, "yellow"),
            ClothingItem::new("e", "u", Category::Accessories, "purple"),
        ];
        let result = CompositeScorer::default()
            .try_analyze(&items, None, fixed_time())
            .unwrap();

        assert_eq!(result.overall_score, 70);
        assert_eq!(result.improvements, vec!["Try different color combinations"]);
    }

    #[test]
    fn test_analysis_is_deterministic_across_orderings() {
        let scorer = CompositeScorer::default();
        let mut reversed = full_outfit();
        reversed.reverse();

        let a = scorer.analyze(&full_outfit(), None, fixed_time());
        let b = scorer.analyze(&reversed, None, fixed_time());

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
