use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::models::{
    Analysis, AnalysisResult, Category, ClothingItem, CompletedOutfit, DailyRecommendation,
    Occasion, SimilarItem,
};
use crate::services::{
    analysis::StyleRules,
    scoring::CompositeScorer,
    seed::{SeedStrategy, Sha256Seed},
};

/// Seeded starting points for the daily search unless configured otherwise
pub const DEFAULT_DAILY_SAMPLE_SIZE: usize = 8;

/// Largest combination space the daily search scores exhaustively
pub const DEFAULT_DAILY_EXHAUSTIVE_LIMIT: usize = 4096;

/// Improvement passes per seeded starting point
const MAX_REFINE_PASSES: usize = 4;

/// Error types for the recommendation engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("No active {category} items available to complete the outfit")]
    NoCandidate { category: Category },
    #[error("Wardrobe has no active items in: {}", category_list(.missing))]
    InsufficientWardrobe { missing: Vec<Category> },
    #[error("A daily outfit needs at least one required category")]
    NoRequiredCategories,
}

fn category_list(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Points awarded per matching attribute when ranking similar items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityWeights {
    pub same_category: u32,
    pub same_color: u32,
    pub per_shared_tag: u32,
    pub per_shared_occasion: u32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            same_category: 2,
            same_color: 1,
            per_shared_tag: 1,
            per_shared_occasion: 1,
        }
    }
}

impl SimilarityWeights {
    pub fn score(&self, reference: &ClothingItem, candidate: &ClothingItem) -> u32 {
        let mut score = 0;
        if reference.category == candidate.category {
            score += self.same_category;
        }
        if reference.normalized_color() == candidate.normalized_color() {
            score += self.same_color;
        }
        score += reference.tags.intersection(&candidate.tags).count() as u32 * self.per_shared_tag;
        score += reference.occasion.intersection(&candidate.occasion).count() as u32
            * self.per_shared_occasion;
        score
    }
}

/// One sampled daily outfit, ranked by score, then favorites, then ids
struct DailyCandidate {
    items: Vec<ClothingItem>,
    ids: Vec<String>,
    favorites: usize,
    analysis: AnalysisResult,
}

impl DailyCandidate {
    fn beats(&self, other: &DailyCandidate) -> bool {
        self.analysis
            .overall_score
            .cmp(&other.analysis.overall_score)
            .then_with(|| self.favorites.cmp(&other.favorites))
            .then_with(|| other.ids.cmp(&self.ids))
            .is_gt()
    }
}

fn keep_better(best: &mut Option<DailyCandidate>, candidate: DailyCandidate) {
    if best.as_ref().map_or(true, |current| candidate.beats(current)) {
        *best = Some(candidate);
    }
}

/// Recommends outfits and items from a caller-supplied catalog snapshot
///
/// Every operation is read-only over the catalog and only considers active
/// items. Scoring is delegated to the [`CompositeScorer`], which acts as the
/// objective function.
pub struct RecommendationEngine {
    scorer: CompositeScorer,
    /// Categories a daily outfit must cover, in pick order
    required: Vec<Category>,
    seed_strategy: Arc<dyn SeedStrategy>,
    daily_sample_size: usize,
    exhaustive_limit: usize,
    similarity: SimilarityWeights,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(CompositeScorer::default())
    }
}

impl RecommendationEngine {
    pub fn new(scorer: CompositeScorer) -> Self {
        Self {
            scorer,
            required: StyleRules::default().required,
            seed_strategy: Arc::new(Sha256Seed),
            daily_sample_size: DEFAULT_DAILY_SAMPLE_SIZE,
            exhaustive_limit: DEFAULT_DAILY_EXHAUSTIVE_LIMIT,
            similarity: SimilarityWeights::default(),
        }
    }

    pub fn with_seed_strategy(mut self, seed_strategy: Arc<dyn SeedStrategy>) -> Self {
        self.seed_strategy = seed_strategy;
        self
    }

    pub fn with_daily_sample_size(mut self, daily_sample_size: usize) -> Self {
        self.daily_sample_size = daily_sample_size.max(1);
        self
    }

    /// Combination spaces up to `limit` are scored in full, larger ones by seeded search
    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    pub fn with_required_categories(
        mut self,
        required: Vec<Category>,
    ) -> Result<Self, RecommendationError> {
        if required.is_empty() {
            return Err(RecommendationError::NoRequiredCategories);
        }
        self.required = required;
        Ok(self)
    }

    pub fn with_similarity_weights(mut self, similarity: SimilarityWeights) -> Self {
        self.similarity = similarity;
        self
    }

    /// Scores the active items of an arbitrary item set; never fails
    pub fn analyze_outfit(
        &self,
        items: &[ClothingItem],
        occasion: Option<Occasion>,
        generated_at: DateTime<Utc>,
    ) -> Analysis {
        let active: Vec<ClothingItem> = items.iter().filter(|i| i.is_active()).cloned().collect();
        self.scorer.analyze(&active, occasion, generated_at)
    }

    /// Finds the active item of `target` that best completes `partial`
    ///
    /// Ties on the overall score go to the lexicographically smallest id.
    pub fn complete_outfit(
        &self,
        partial: &[ClothingItem],
        target: Category,
        catalog: &[ClothingItem],
        generated_at: DateTime<Utc>,
    ) -> Result<CompletedOutfit, RecommendationError> {
        let mut outfit: Vec<ClothingItem> =
            partial.iter().filter(|i| i.is_active()).cloned().collect();
        let taken: HashSet<String> = outfit.iter().map(|i| i.id.clone()).collect();

        let mut candidates: Vec<&ClothingItem> = catalog
            .iter()
            .filter(|i| i.is_active() && i.category == target && !taken.contains(&i.id))
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        candidates.dedup_by(|a, b| a.id == b.id);

        let mut best: Option<(&ClothingItem, AnalysisResult)> = None;
        for candidate in candidates {
            outfit.push(candidate.clone());
            let analysis = self.scorer.analyze(&outfit, None, generated_at).into_result();
            outfit.pop();

            // Candidates arrive in id order, so only a strictly higher score replaces
            let replace = match &best {
                Some((_, current)) => analysis.overall_score > current.overall_score,
                None => true,
            };
            if replace {
                best = Some((candidate, analysis));
            }
        }

        let (item, analysis) = best.ok_or(RecommendationError::NoCandidate { category: target })?;

        tracing::info!(
            partial_count = partial.len(),
            target = %target,
            item_id = %item.id,
            overall_score = analysis.overall_score,
            "Outfit completion selected"
        );

        Ok(CompletedOutfit {
            item: item.clone(),
            analysis,
        })
    }

    /// Ranks active catalog items by similarity to `reference`, best first
    ///
    /// Equal scores are ordered by most recent creation, undated items last,
    /// then by id. A catalog id is ranked at most once.
    pub fn similar_items(
        &self,
        reference: &ClothingItem,
        catalog: &[ClothingItem],
        k: usize,
    ) -> Vec<SimilarItem> {
        let mut candidates: Vec<&ClothingItem> = catalog
            .iter()
            .filter(|i| i.is_active() && i.id != reference.id)
            .collect();
        candidates.sort_by(|a, b| a.id.cmp(&b.id));
        candidates.dedup_by(|a, b| a.id == b.id);

        let mut ranked: Vec<SimilarItem> = candidates
            .into_iter()
            .map(|item| SimilarItem {
                similarity_score: self.similarity.score(reference, item),
                item: item.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.similarity_score
                .cmp(&a.similarity_score)
                .then_with(|| b.item.created_at.cmp(&a.item.created_at))
                .then_with(|| a.item.id.cmp(&b.item.id))
        });
        ranked.truncate(k);

        tracing::debug!(
            reference_id = %reference.id,
            catalog_size = catalog.len(),
            returned = ranked.len(),
            "Similar items ranked"
        );

        ranked
    }

    /// Picks the outfit of the day for `user_id`
    ///
    /// Candidates are combinations with one active item per required category.
    /// When the combination space is within the exhaustive limit every
    /// combination is scored. Otherwise the seed strategy turns
    /// `(user_id, date)` into starting points that are improved one category
    /// at a time. The best scored combination wins: highest overall score,
    /// then most favorites, then smallest item ids.
    pub fn daily_recommendation(
        &self,
        user_id: &str,
        catalog: &[ClothingItem],
        date: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Result<DailyRecommendation, RecommendationError> {
        if self.required.is_empty() {
            return Err(RecommendationError::NoRequiredCategories);
        }

        let pools: Vec<Vec<&ClothingItem>> = self
            .required
            .iter()
            .map(|category| {
                let mut pool: Vec<&ClothingItem> = catalog
                    .iter()
                    .filter(|i| i.is_active() && i.category == *category)
                    .collect();
                pool.sort_by(|a, b| a.id.cmp(&b.id));
                pool.dedup_by(|a, b| a.id == b.id);
                pool
            })
            .collect();

        let missing: Vec<Category> = self
            .required
            .iter()
            .zip(&pools)
            .filter(|(_, pool)| pool.is_empty())
            .map(|(category, _)| *category)
            .collect();

        if !missing.is_empty() {
            tracing::info!(
                user_id = %user_id,
                missing = %category_list(&missing),
                "Wardrobe cannot fill a daily outfit"
            );
            return Err(RecommendationError::InsufficientWardrobe { missing });
        }

        let space = pools
            .iter()
            .try_fold(1usize, |acc, pool| acc.checked_mul(pool.len()));

        let (best, scored) = match space {
            Some(size) if size <= self.exhaustive_limit => {
                self.score_every_combination(&pools, generated_at)
            }
            _ => self.seeded_search(&pools, self.seed_strategy.rng(user_id, date), generated_at),
        };

        let best = best.ok_or_else(|| RecommendationError::InsufficientWardrobe {
            missing: self.required.clone(),
        })?;

        tracing::info!(
            user_id = %user_id,
            date = %date,
            space = ?space,
            scored,
            overall_score = best.analysis.overall_score,
            "Daily recommendation selected"
        );

        Ok(DailyRecommendation {
            user_id: user_id.to_string(),
            date,
            outfit: best.items,
            analysis: best.analysis,
        })
    }

    fn score_combination(
        &self,
        pools: &[Vec<&ClothingItem>],
        picks: &[usize],
        generated_at: DateTime<Utc>,
    ) -> DailyCandidate {
        let items: Vec<ClothingItem> = pools
            .iter()
            .zip(picks)
            .map(|(pool, &index)| pool[index].clone())
            .collect();
        let analysis = self.scorer.analyze(&items, None, generated_at).into_result();

        DailyCandidate {
            ids: items.iter().map(|i| i.id.clone()).collect(),
            favorites: items.iter().filter(|i| i.is_favorite).count(),
            items,
            analysis,
        }
    }

    /// Scores the full cartesian product of `pools`, which must all be non-empty
    fn score_every_combination(
        &self,
        pools: &[Vec<&ClothingItem>],
        generated_at: DateTime<Utc>,
    ) -> (Option<DailyCandidate>, usize) {
        let mut picks = vec![0; pools.len()];
        let mut best = None;
        let mut scored = 0;

        loop {
            keep_better(&mut best, self.score_combination(pools, &picks, generated_at));
            scored += 1;

            // Advance the last position, carrying into earlier ones
            let mut position = pools.len();
            loop {
                if position == 0 {
                    return (best, scored);
                }
                position -= 1;
                picks[position] += 1;
                if picks[position] < pools[position].len() {
                    break;
                }
                picks[position] = 0;
            }
        }
    }

    /// Seeded starting points, each improved one category at a time
    ///
    /// A pass tries every item of every pool against the current combination,
    /// so each start costs at most `MAX_REFINE_PASSES` times the wardrobe size.
    fn seeded_search(
        &self,
        pools: &[Vec<&ClothingItem>],
        mut rng: ChaCha8Rng,
        generated_at: DateTime<Utc>,
    ) -> (Option<DailyCandidate>, usize) {
        let mut best = None;
        let mut scored = 0;

        for _ in 0..self.daily_sample_size {
            let mut picks: Vec<usize> = pools
                .iter()
                .map(|pool| rng.gen_range(0..pool.len()))
                .collect();
            let mut current = self.score_combination(pools, &picks, generated_at);
            scored += 1;

            for _ in 0..MAX_REFINE_PASSES {
                let mut improved = false;
                for position in 0..pools.len() {
                    for index in 0..pools[position].len() {
                        if index == picks[position] {
                            continue;
                        }
                        let mut trial = picks.clone();
                        trial[position] = index;
                        let candidate = self.score_combination(pools, &trial, generated_at);
                        scored += 1;
                        if candidate.beats(&current) {
                            current = candidate;
                            picks = trial;
                            improved = true;
                        }
                    }
                }
                if !improved {
                    break;
                }
            }

            keep_better(&mut best, current);
        }

        (best, scored)
    }
}
