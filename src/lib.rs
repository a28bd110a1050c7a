//! K-Mirror Algo - Product matching service for the K-Mirror beauty app
//!
//! This library provides the core recommendation engine used by the K-Mirror
//! beauty app. It scores catalog products against a consumer's AI-derived
//! skin profile and selects a bounded, category-diversified ranked subset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{diversify, score_product, RecommendResult, Recommender};
pub use crate::models::{
    MatchProductsRequest, MatchProductsResponse, Product, RecommendParams, SafetyRating,
    ScoredProduct, SkinProfile, Undertone,
};
