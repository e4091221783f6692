//! Outfit analyzers
//!
//! Each analyzer scores one aspect of an outfit candidate from its normalized
//! attributes. Analyzers own their rule tables.

use thiserror::Error;

use crate::{
    models::{Aspect, SubScore},
    services::attributes::OutfitAttributes,
};

pub mod color;
pub mod occasion;
pub mod style;

pub use color::{ColorHarmonyAnalyzer, ColorRules};
pub use occasion::{OccasionFitAnalyzer, OccasionRules};
pub use style::{StyleCohesionAnalyzer, StyleRules};

/// Error types for outfit analysis
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No items supplied for analysis")]
    EmptyInput,
    #[error("No analyzer registered for {0}")]
    MissingAspect(Aspect),
    #[error("Analyzer for {aspect} failed: {reason}")]
    Analyzer { aspect: Aspect, reason: String },
}

/// Capability shared by every outfit analyzer
pub trait Analyzer: Send + Sync {
    /// The aspect this analyzer fills in on the final result
    fn aspect(&self) -> Aspect;

    fn score(&self, attributes: &OutfitAttributes) -> Result<SubScore, AnalysisError>;
}

/// The default analyzer set, in aggregation order
pub fn default_analyzers() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(ColorHarmonyAnalyzer::default()),
        Box::new(StyleCohesionAnalyzer::default()),
        Box::new(OccasionFitAnalyzer::default()),
    ]
}
