//! Proportional score scaling.

/// Target used by callers that want the original 100-point scale.
pub const DEFAULT_TARGET: f64 = 100.0;

/// Scale scores so the largest becomes `target`, preserving order.
///
/// Empty input yields an empty vector. A zero maximum yields a vector of
/// zeros of the same length (no division by zero).
pub fn normalize_scores(scores: &[f64], target: f64) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let maximum = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if maximum == 0.0 {
        return vec![0.0; scores.len()];
    }

    scores
        .iter()
        .map(|score| score * target / maximum)
        .collect()
}
