// Core algorithm exports
pub mod diversify;
pub mod recommender;
pub mod scoring;
pub mod tables;

pub use diversify::diversify;
pub use recommender::{RecommendResult, Recommender};
pub use scoring::{
    score_concerns, score_ingredients, score_melanin, score_product, score_safety,
    score_skin_type, score_undertone,
};
