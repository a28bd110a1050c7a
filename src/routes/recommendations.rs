use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Recommender;
use crate::models::{
    ErrorResponse, HealthResponse, MatchProductsRequest, MatchProductsResponse, RecommendParams,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations/match", web::post().to(match_products));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match products endpoint
///
/// POST /api/v1/recommendations/match
///
/// Request body:
/// ```json
/// {
///   "skinProfile": {
///     "melaninIndex": 3,
///     "undertone": "Warm",
///     "skinType": "oily",
///     "skinConcerns": ["acne"],
///     "sensitivityLevel": 3
///   },
///   "products": [ ... ],
///   "maxPerCategory": 2,
///   "total": 6
/// }
/// ```
///
/// The catalog slice travels in the request; this service fetches and
/// persists nothing. An empty slice yields an empty recommendation list.
async fn match_products(
    state: web::Data<AppState>,
    req: web::Json<MatchProductsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match_products request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let MatchProductsRequest {
        skin_profile,
        products,
        max_per_category,
        total,
    } = req.into_inner();

    let defaults = state.recommender.params();
    let params = RecommendParams {
        max_per_category: max_per_category.unwrap_or(defaults.max_per_category),
        total: total.unwrap_or(defaults.total),
    };

    tracing::info!(
        "Matching {} products (melanin {}, undertone {:?}, {} concerns)",
        products.len(),
        skin_profile.melanin_index,
        skin_profile.undertone,
        skin_profile.skin_concerns.len()
    );

    let result = state
        .recommender
        .recommend_with(&skin_profile, products, params);

    tracing::info!(
        "Returning {} recommendations (from {} candidates)",
        result.recommendations.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchProductsResponse {
        recommendations: result.recommendations,
        total_candidates: result.total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
