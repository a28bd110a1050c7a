// Criterion benchmarks for K-Mirror Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmirror_algo::core::{diversify, score_ingredients, score_product, Recommender};
use kmirror_algo::models::{Product, SafetyRating, ScoredProduct, SkinProfile, Undertone};

fn create_product(id: usize) -> Product {
    let category = match id % 4 {
        0 => "skincare",
        1 => "lip",
        2 => "base",
        _ => "eye",
    };
    Product {
        id: Some(id.to_string()),
        brand: Some("Seoul Beauty".to_string()),
        name_en: Some(format!("Product {}", id)),
        name_ko: None,
        category: category.to_string(),
        subcategory: None,
        melanin_min: 1 + (id % 3) as u8,
        melanin_max: 3 + (id % 3) as u8,
        undertones: vec![if id % 2 == 0 {
            Undertone::Warm
        } else {
            Undertone::Cool
        }],
        skin_types: Some(vec!["oily".to_string(), "normal".to_string()]),
        concerns: Some(vec!["acne".to_string(), "redness".to_string()]),
        ingredients: Some(vec![
            "Niacinamide".to_string(),
            "Centella Asiatica Extract".to_string(),
            "Glycerin".to_string(),
            "Fragrance".to_string(),
        ]),
        safety_rating: Some(if id % 5 == 0 {
            SafetyRating::EwgYellow
        } else {
            SafetyRating::EwgGreen
        }),
        shade_hex: None,
        price_usd: Some(15.0 + id as f64),
        image_url: None,
        affiliate_url: None,
    }
}

fn create_profile() -> SkinProfile {
    SkinProfile {
        melanin_index: 3,
        undertone: Undertone::Warm,
        skin_type: Some("oily".to_string()),
        skin_concerns: vec!["acne".to_string(), "dryness".to_string()],
        sensitivity_level: Some(4),
    }
}

fn bench_score_product(c: &mut Criterion) {
    let product = create_product(0);
    let profile = create_profile();

    c.bench_function("score_product", |b| {
        b.iter(|| score_product(black_box(&product), black_box(&profile)));
    });
}

fn bench_ingredient_matching(c: &mut Criterion) {
    let product = create_product(0);
    let profile = create_profile();

    c.bench_function("score_ingredients", |b| {
        b.iter(|| score_ingredients(black_box(&product), black_box(&profile.skin_concerns)));
    });
}

fn bench_diversify(c: &mut Criterion) {
    let profile = create_profile();
    let scored: Vec<ScoredProduct> = (0..500)
        .map(|i| {
            let product = create_product(i);
            let score = score_product(&product, &profile);
            ScoredProduct { product, score }
        })
        .collect();

    c.bench_function("diversify_500_scored", |b| {
        b.iter(|| diversify(black_box(scored.clone()), black_box(2), black_box(6)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_default_params();
    let profile = create_profile();

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Product> = (0..*catalog_size).map(create_product).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&profile), black_box(catalog.clone())));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_product,
    bench_ingredient_matching,
    bench_diversify,
    bench_recommend
);

criterion_main!(benches);
