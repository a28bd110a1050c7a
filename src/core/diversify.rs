use std::collections::HashMap;

use crate::models::ScoredProduct;

/// Select a bounded, category-diversified subset of scored products
///
/// Sorts descending by score with a stable sort (`sort_by` guarantees
/// ties keep their input order, which callers rely on for determinism),
/// then walks the list once: a candidate is taken only while its category
/// count is below `max_per_category`, and the walk stops at `total`.
///
/// Skipped candidates are never revisited, so the result can hold fewer
/// than `total` items even when other categories still have candidates.
/// That greedy single pass is the production contract; do not repack.
pub fn diversify(
    mut scored: Vec<ScoredProduct>,
    max_per_category: usize,
    total: usize,
) -> Vec<ScoredProduct> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut category_counts: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(total.min(scored.len()));

    for candidate in scored {
        if result.len() >= total {
            break;
        }

        let count = category_counts
            .entry(candidate.product.category.clone())
            .or_insert(0);
        if *count >= max_per_category {
            continue;
        }

        *count += 1;
        result.push(candidate);
    }

    result
}
