//! Static ingredient lookup tables
//!
//! Concern-to-ingredient mappings are heuristic substring lists, matched
//! case-insensitively against catalog ingredient names. Entries are
//! already lowercase so callers only lowercase the product side.

/// Beneficial ingredient substrings for a skin concern
///
/// Unknown concerns map to an empty slice and contribute nothing.
pub fn beneficial_for(concern: &str) -> &'static [&'static str] {
    match concern {
        "dryness" => &[
            "hyaluronic acid",
            "ceramide",
            "squalane",
            "glycerin",
            "shea butter",
            "snail secretion filtrate",
        ],
        "aging" => &[
            "retinol",
            "peptide",
            "niacinamide",
            "vitamin c",
            "collagen",
            "ginseng",
        ],
        "acne" => &[
            "salicylic acid",
            "tea tree",
            "niacinamide",
            "centella asiatica",
            "zinc",
        ],
        "hyperpigmentation" => &[
            "vitamin c",
            "arbutin",
            "niacinamide",
            "licorice extract",
            "ascorbic acid",
        ],
        "dullness" => &[
            "vitamin c",
            "niacinamide",
            "aha",
            "rice extract",
            "ascorbic acid",
        ],
        "redness" => &[
            "centella asiatica",
            "green tea",
            "aloe vera",
            "beta-glucan",
            "panthenol",
        ],
        "uneven_tone" => &["niacinamide", "vitamin c", "arbutin", "aha"],
        "sun_damage" => &["vitamin c", "niacinamide", "green tea", "vitamin e"],
        _ => &[],
    }
}

/// Common irritant substrings, each counted at most once per product
pub const IRRITANTS: &[&str] = &[
    "fragrance",
    "alcohol",
    "denatured alcohol",
    "parfum",
    "synthetic dye",
];
