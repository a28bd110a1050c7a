// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Product, RecommendParams, SafetyRating, ScoredProduct, SkinProfile, Undertone};
pub use requests::MatchProductsRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchProductsResponse};
