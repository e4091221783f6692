pub mod analysis;
pub mod attributes;
pub mod daily;
pub mod feedback;
pub mod outfits;
pub mod recommendations;
pub mod scoring;
pub mod seed;

pub use recommendations::{RecommendationEngine, RecommendationError};
pub use scoring::CompositeScorer;
