use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Feedback used for every sub-score of a degraded analysis
pub const ANALYSIS_FAILED: &str = "Analysis failed";

/// Sole improvement reported by a degraded analysis
pub const UNABLE_TO_ANALYZE: &str = "Unable to analyze outfit";

/// The dimension an analyzer scores
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Aspect {
    ColorHarmony,
    StyleCohesion,
    OccasionFit,
}

impl Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Aspect::ColorHarmony => write!(f, "color harmony"),
            Aspect::StyleCohesion => write!(f, "style cohesion"),
            Aspect::OccasionFit => write!(f, "occasion fit"),
        }
    }
}

/// Score in [0, 100] with its human-readable feedback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubScore {
    pub score: u8,
    pub feedback: String,
}

impl SubScore {
    pub fn new(score: u8, feedback: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            feedback: feedback.into(),
        }
    }

    fn failed() -> Self {
        Self::new(0, ANALYSIS_FAILED)
    }
}

/// Outcome of scoring one outfit candidate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub color_harmony: SubScore,
    pub style_cohesion: SubScore,
    pub occasion_fit: SubScore,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// The zero-score result returned when an outfit cannot be analyzed
    pub fn degraded(generated_at: DateTime<Utc>) -> Self {
        Self {
            overall_score: 0,
            color_harmony: SubScore::failed(),
            style_cohesion: SubScore::failed(),
            occasion_fit: SubScore::failed(),
            strengths: Vec::new(),
            improvements: vec![UNABLE_TO_ANALYZE.to_string()],
            generated_at,
        }
    }
}

/// Analysis that always succeeds: either a real result or the degraded fallback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "analysis", rename_all = "lowercase")]
pub enum Analysis {
    Ok(AnalysisResult),
    Degraded(AnalysisResult),
}

impl Analysis {
    pub fn result(&self) -> &AnalysisResult {
        match self {
            Analysis::Ok(result) | Analysis::Degraded(result) => result,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            Analysis::Ok(result) | Analysis::Degraded(result) => result,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Analysis::Degraded(_))
    }

    pub fn overall_score(&self) -> u8 {
        self.result().overall_score
    }
}
