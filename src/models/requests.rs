use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Product, SkinProfile};

/// Request to score and diversify a catalog slice against a skin profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchProductsRequest {
    #[validate(nested)]
    #[serde(alias = "skin_profile", rename = "skinProfile")]
    pub skin_profile: SkinProfile,
    #[serde(default)]
    pub products: Vec<Product>,
    #[validate(range(min = 1))]
    #[serde(alias = "max_per_category", rename = "maxPerCategory", default)]
    pub max_per_category: Option<usize>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub total: Option<usize>,
}

/// Health check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRequest;
