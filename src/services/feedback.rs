/// One score band with its fixed narrative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackBand {
    /// Inclusive lower bound of the band
    pub min_score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl FeedbackBand {
    fn new(min_score: u8, strengths: &[&str], improvements: &[&str]) -> Self {
        Self {
            min_score,
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            improvements: improvements.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Strengths and improvements for an overall score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Turns an overall score into human-readable strengths and improvements
#[derive(Debug, Clone)]
pub struct FeedbackGenerator {
    /// Sorted by descending `min_score`
    bands: Vec<FeedbackBand>,
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self::new(vec![
            FeedbackBand::new(
                80,
                &["Excellent coordination", "Well-balanced outfit"],
                &["Consider adding accessories"],
            ),
            FeedbackBand::new(
                60,
                &["Good item combination", "Appropriate style"],
                &["Try different color combinations"],
            ),
            FeedbackBand::new(
                0,
                &["All items from your wardrobe"],
                &["Add more items to complete outfit"],
            ),
        ])
    }
}

impl FeedbackGenerator {
    pub fn new(mut bands: Vec<FeedbackBand>) -> Self {
        bands.sort_by(|a, b| b.min_score.cmp(&a.min_score));
        Self { bands }
    }

    pub fn generate(&self, overall_score: u8) -> Feedback {
        match self.bands.iter().find(|b| overall_score >= b.min_score) {
            Some(band) => Feedback {
                strengths: band.strengths.clone(),
                improvements: band.improvements.clone(),
            },
            None => Feedback {
                strengths: Vec::new(),
                improvements: Vec::new(),
            },
        }
    }
}
