use serde::{Deserialize, Serialize};
use validator::Validate;

/// Skin undertone classification produced by the tone analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

/// Ingredient safety classification for a catalog product
///
/// Unknown or unrecognized ratings deserialize to `Unknown` and score
/// neutrally rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyRating {
    #[serde(rename = "EWG Green")]
    EwgGreen,
    Vegan,
    #[serde(rename = "EWG Yellow")]
    EwgYellow,
    #[serde(rename = "EWG Red")]
    EwgRed,
    #[serde(other)]
    Unknown,
}

impl SafetyRating {
    /// Base safety score before the sensitivity multiplier is applied
    pub fn base_score(self) -> f64 {
        match self {
            SafetyRating::EwgGreen => 15.0,
            SafetyRating::Vegan => 13.0,
            SafetyRating::EwgYellow => 5.0,
            SafetyRating::EwgRed => -5.0,
            SafetyRating::Unknown => 0.0,
        }
    }
}

/// Catalog product row
///
/// Field names follow the catalog store's column names (snake_case).
/// Only the matching attributes participate in scoring; the display
/// fields (brand, names, price, URLs) ride along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ko: Option<String>,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Shade range endpoints on the 1-6 melanin scale; min <= max is a
    /// catalog-ingestion precondition, not checked here.
    pub melanin_min: u8,
    pub melanin_max: u8,
    #[serde(default)]
    pub undertones: Vec<Undertone>,
    #[serde(default)]
    pub skin_types: Option<Vec<String>>,
    #[serde(default)]
    pub concerns: Option<Vec<String>>,
    /// Free-form ingredient names, matched case-insensitively
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub safety_rating: Option<SafetyRating>,
    #[serde(default)]
    pub shade_hex: Option<String>,
    #[serde(default)]
    pub price_usd: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub affiliate_url: Option<String>,
}

/// Consumer skin profile derived upstream by the AI tone analysis
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkinProfile {
    #[validate(range(min = 1, max = 6))]
    #[serde(alias = "melanin_index", rename = "melaninIndex")]
    pub melanin_index: u8,
    pub undertone: Undertone,
    #[serde(alias = "skin_type", rename = "skinType", default)]
    pub skin_type: Option<String>,
    #[serde(alias = "skin_concerns", rename = "skinConcerns", default)]
    pub skin_concerns: Vec<String>,
    #[validate(range(min = 1, max = 5))]
    #[serde(alias = "sensitivity_level", rename = "sensitivityLevel", default)]
    pub sensitivity_level: Option<u8>,
}

/// Product paired with its match score, request-scoped only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "matchScore")]
    pub score: f64,
}

/// Diversification parameters
#[derive(Debug, Clone, Copy)]
pub struct RecommendParams {
    /// Cap on items sharing one category in the result
    pub max_per_category: usize,
    /// Cap on the total result size
    pub total: usize,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            max_per_category: 2,
            total: 6,
        }
    }
}
