use std::collections::HashMap;

/// Sparse term-weight vector keyed by token.
pub type SparseVector = HashMap<String, f64>;

/// Cosine similarity over the union of both key sets.
///
/// Weights are non-negative, so the result lies in `[0, 1]`. Zero-magnitude
/// input yields `0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Keys missing from one side contribute zero to the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(token, weight)| large.get(token).map(|other| weight * other))
        .sum();

    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    let denom = norm_a * norm_b;
    if denom <= f64::EPSILON || !denom.is_finite() {
        return 0.0;
    }

    (dot / denom).clamp(0.0, 1.0)
}

pub fn magnitude(vector: &SparseVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}
