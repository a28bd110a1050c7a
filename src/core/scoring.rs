use std::collections::HashSet;

use crate::core::tables::{beneficial_for, IRRITANTS};
use crate::models::{Product, SkinProfile, Undertone};

/// Calculate a match score for a product against a skin profile
///
/// Scoring breakdown (practical ceiling ~120 with a perfect match at
/// sensitivity 5; only the zero floor is enforced):
/// - melanin proximity: max 25
/// - undertone match: max 15
/// - skin type match: max 15
/// - concern overlap: max 10
/// - ingredient affinity: max 12 (irritants subtract 4 each)
/// - safety rating: max 15, scaled by sensitivity multiplier (up to 1.5)
///
/// Every factor is total over well-typed input: missing optional fields
/// fall back to documented defaults, never errors.
pub fn score_product(product: &Product, profile: &SkinProfile) -> f64 {
    let melanin = score_melanin(product, profile.melanin_index);
    let undertone = score_undertone(product, profile.undertone);
    let skin_type = score_skin_type(product, profile.skin_type.as_deref());
    let concerns = score_concerns(product, &profile.skin_concerns);
    let ingredients = score_ingredients(product, &profile.skin_concerns);
    let safety = score_safety(product, profile.sensitivity_level);

    (melanin + undertone + skin_type + concerns + ingredients + safety).max(0.0)
}

const MELANIN_CENTER: f64 = 25.0;
const MELANIN_IN_RANGE: f64 = 18.0;
const MELANIN_BOUNDARY: f64 = 10.0;

const UNDERTONE_EXACT: f64 = 15.0;
const UNDERTONE_NEUTRAL: f64 = 7.0;

const SKIN_TYPE_EXACT: f64 = 15.0;
const SKIN_TYPE_FALLBACK: f64 = 7.0;

const CONCERN_PER_MATCH: f64 = 5.0;
const CONCERN_MAX: f64 = 10.0;

const INGREDIENT_BENEFICIAL: f64 = 5.0;
const INGREDIENT_BENEFICIAL_MAX: f64 = 12.0;
const INGREDIENT_IRRITANT: f64 = -4.0;

const DEFAULT_SENSITIVITY: u8 = 2;

/// Melanin proximity score (max 25)
///
/// center=25, in-range=18, boundary (range widened by 1)=10, far=0.
/// An odd min+max puts the center on a half step, so an integer index
/// can only hit it when the sum is even.
#[inline]
pub fn score_melanin(product: &Product, melanin_index: u8) -> f64 {
    let min = i16::from(product.melanin_min);
    let max = i16::from(product.melanin_max);
    let index = i16::from(melanin_index);
    let center = f64::from(min + max) / 2.0;

    if f64::from(index) == center {
        return MELANIN_CENTER;
    }
    if index >= min && index <= max {
        return MELANIN_IN_RANGE;
    }
    if index >= min - 1 && index <= max + 1 {
        return MELANIN_BOUNDARY;
    }
    0.0
}

/// Undertone match score (max 15)
///
/// exact=15, Neutral fallback=7, no match=0
#[inline]
pub fn score_undertone(product: &Product, undertone: Undertone) -> f64 {
    if product.undertones.contains(&undertone) {
        return UNDERTONE_EXACT;
    }
    if product.undertones.contains(&Undertone::Neutral) {
        return UNDERTONE_NEUTRAL;
    }
    0.0
}

/// Skin type match score (max 15)
///
/// exact=15, normal fallback=7, no match=0. A product without skin type
/// tags or a profile without a skin type is a weak pass (7), not a miss.
#[inline]
pub fn score_skin_type(product: &Product, skin_type: Option<&str>) -> f64 {
    let types = match product.skin_types.as_deref() {
        Some(types) if !types.is_empty() => types,
        _ => return SKIN_TYPE_FALLBACK,
    };
    let skin_type = match skin_type {
        Some(skin_type) => skin_type,
        None => return SKIN_TYPE_FALLBACK,
    };

    if types.iter().any(|t| t == skin_type) {
        return SKIN_TYPE_EXACT;
    }
    if types.iter().any(|t| t == "normal") {
        return SKIN_TYPE_FALLBACK;
    }
    0.0
}

/// Concern overlap score (max 10)
///
/// 5 per shared concern tag, capped at 10
#[inline]
pub fn score_concerns(product: &Product, concerns: &[String]) -> f64 {
    let product_concerns = product.concerns.as_deref().unwrap_or(&[]);
    let matches = concerns
        .iter()
        .filter(|concern| product_concerns.iter().any(|pc| pc == *concern))
        .count();
    (matches as f64 * CONCERN_PER_MATCH).min(CONCERN_MAX)
}

/// Ingredient affinity score (beneficial max 12, -4 per distinct irritant)
///
/// Beneficial entries are collected into a set across all concerns, so
/// an ingredient reached via two concerns counts once. Substring matching
/// is plain lowercase containment. The result may be negative; the zero
/// floor is applied on the aggregate, not here.
pub fn score_ingredients(product: &Product, concerns: &[String]) -> f64 {
    let ingredients = match product.ingredients.as_deref() {
        Some(list) if !list.is_empty() => list,
        _ => return 0.0,
    };

    let lowered: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();

    let mut matched: HashSet<&'static str> = HashSet::new();
    for concern in concerns {
        for beneficial in beneficial_for(concern) {
            if lowered.iter().any(|pi| pi.contains(beneficial)) {
                matched.insert(beneficial);
            }
        }
    }
    let beneficial_score =
        (matched.len() as f64 * INGREDIENT_BENEFICIAL).min(INGREDIENT_BENEFICIAL_MAX);

    let irritant_count = IRRITANTS
        .iter()
        .filter(|irritant| lowered.iter().any(|pi| pi.contains(*irritant)))
        .count();
    let irritant_score = irritant_count as f64 * INGREDIENT_IRRITANT;

    beneficial_score + irritant_score
}

/// Safety score scaled by the user's sensitivity level
///
/// Base: EWG Green=15, Vegan=13, Yellow=5, Red=-5, unknown=0.
/// Multiplier: sensitivity >=4 -> 1.5, >=3 -> 1.0, otherwise 0.7.
/// Missing sensitivity defaults to 2.
#[inline]
pub fn score_safety(product: &Product, sensitivity_level: Option<u8>) -> f64 {
    let base = product
        .safety_rating
        .map_or(0.0, crate::models::SafetyRating::base_score);

    let level = sensitivity_level.unwrap_or(DEFAULT_SENSITIVITY);
    let multiplier = if level >= 4 {
        1.5
    } else if level >= 3 {
        1.0
    } else {
        0.7
    };

    base * multiplier
}
