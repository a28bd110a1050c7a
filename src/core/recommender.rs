use crate::core::{diversify::diversify, scoring::score_product};
use crate::models::{Product, RecommendParams, ScoredProduct, SkinProfile};

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendResult {
    pub recommendations: Vec<ScoredProduct>,
    pub total_candidates: usize,
}

/// Main recommendation orchestrator
///
/// # Pipeline stages
/// 1. Score every catalog product against the profile
/// 2. Stable sort descending by score
/// 3. Greedy category-diversified selection
///
/// Scoring is pure and per-product; the selection pass is strictly
/// sequential. Output is deterministic for a given input order.
#[derive(Debug, Clone)]
pub struct Recommender {
    params: RecommendParams,
}

impl Recommender {
    pub fn new(params: RecommendParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: RecommendParams::default(),
        }
    }

    pub fn params(&self) -> RecommendParams {
        self.params
    }

    /// Score a catalog slice and return the diversified top picks
    ///
    /// # Arguments
    /// * `profile` - The consumer's derived skin profile
    /// * `catalog` - Catalog slice fetched by the caller
    ///
    /// # Returns
    /// RecommendResult with the selected products and the candidate count
    pub fn recommend(&self, profile: &SkinProfile, catalog: Vec<Product>) -> RecommendResult {
        self.recommend_with(profile, catalog, self.params)
    }

    /// Same as `recommend` but with per-request diversification parameters
    pub fn recommend_with(
        &self,
        profile: &SkinProfile,
        catalog: Vec<Product>,
        params: RecommendParams,
    ) -> RecommendResult {
        let total_candidates = catalog.len();

        let scored: Vec<ScoredProduct> = catalog
            .into_iter()
            .map(|product| {
                let score = score_product(&product, profile);
                ScoredProduct { product, score }
            })
            .collect();

        let recommendations = diversify(scored, params.max_per_category, params.total);

        RecommendResult {
            recommendations,
            total_candidates,
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SafetyRating, Undertone};

    fn make_candidate(id: &str, category: &str, melanin_min: u8, melanin_max: u8) -> Product {
        Product {
            id: Some(id.to_string()),
            brand: Some("Test Brand".to_string()),
            name_en: Some(format!("Product {}", id)),
            name_ko: None,
            category: category.to_string(),
            subcategory: None,
            melanin_min,
            melanin_max,
            undertones: vec![Undertone::Warm],
            skin_types: Some(vec!["oily".to_string()]),
            concerns: Some(vec!["acne".to_string()]),
            ingredients: Some(vec!["niacinamide".to_string()]),
            safety_rating: Some(SafetyRating::EwgGreen),
            shade_hex: None,
            price_usd: None,
            image_url: None,
            affiliate_url: None,
        }
    }

    fn make_profile() -> SkinProfile {
        SkinProfile {
            melanin_index: 3,
            undertone: Undertone::Warm,
            skin_type: Some("oily".to_string()),
            skin_concerns: vec!["acne".to_string()],
            sensitivity_level: Some(3),
        }
    }

    #[test]
    fn test_recommend_basic() {
        let recommender = Recommender::with_default_params();
        let profile = make_profile();

        let catalog = vec![
            make_candidate("1", "skincare", 2, 4), // center match
            make_candidate("2", "skincare", 5, 6), // far
            make_candidate("3", "lip", 2, 4),      // center match
        ];

        let result = recommender.recommend(&profile, catalog);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.recommendations.len(), 3);
        // Higher-scoring center matches come first
        assert!(result.recommendations[0].score >= result.recommendations[1].score);
        assert!(result.recommendations[1].score >= result.recommendations[2].score);
    }

    #[test]
    fn test_recommend_respects_category_cap() {
        let recommender = Recommender::with_default_params();
        let profile = make_profile();

        let catalog: Vec<Product> = (0..10)
            .map(|i| make_candidate(&i.to_string(), "skincare", 2, 4))
            .collect();

        let result = recommender.recommend(&profile, catalog);

        assert_eq!(result.total_candidates, 10);
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_recommend_with_override_params() {
        let recommender = Recommender::with_default_params();
        let profile = make_profile();

        let catalog: Vec<Product> = (0..10)
            .map(|i| make_candidate(&i.to_string(), "skincare", 2, 4))
            .collect();

        let params = RecommendParams {
            max_per_category: 4,
            total: 4,
        };
        let result = recommender.recommend_with(&profile, catalog, params);

        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_recommend_empty_catalog() {
        let recommender = Recommender::with_default_params();
        let profile = make_profile();

        let result = recommender.recommend(&profile, vec![]);

        assert_eq!(result.total_candidates, 0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_recommend_deterministic() {
        let recommender = Recommender::with_default_params();
        let profile = make_profile();

        let catalog: Vec<Product> = (0..20)
            .map(|i| {
                let category = if i % 2 == 0 { "skincare" } else { "lip" };
                make_candidate(&i.to_string(), category, 2, 4)
            })
            .collect();

        let first = recommender.recommend(&profile, catalog.clone());
        let second = recommender.recommend(&profile, catalog);

        let first_ids: Vec<_> = first
            .recommendations
            .iter()
            .map(|p| p.product.id.clone())
            .collect();
        let second_ids: Vec<_> = second
            .recommendations
            .iter()
            .map(|p| p.product.id.clone())
            .collect();
        assert_eq!(first_ids, second_ids);
    }
}
