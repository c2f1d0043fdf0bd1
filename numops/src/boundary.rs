//! Narrowing of loosely-typed, already-deserialized data.
//!
//! Deserialized payloads arrive as [`serde_json::Value`] sequences that may
//! mix numbers with anything else. Validation happens here exactly once;
//! everything in [`crate::core`] operates on the typed output.

use serde_json::Value;
use tracing::debug;

/// Keep the elements representable as `i64`, preserving order.
///
/// Floats (including integral ones such as `2.0`), integers outside the
/// `i64` range, and non-numbers are skipped silently.
pub fn integers(values: &[Value]) -> Vec<i64> {
    let kept: Vec<i64> = values.iter().filter_map(Value::as_i64).collect();
    trace_skipped("integers", values.len(), kept.len());
    kept
}

/// Keep every numeric element as `f64`, preserving order.
///
/// Integers widen to `f64`; non-numbers are skipped silently.
pub fn scores(values: &[Value]) -> Vec<f64> {
    let kept: Vec<f64> = values.iter().filter_map(Value::as_f64).collect();
    trace_skipped("scores", values.len(), kept.len());
    kept
}

fn trace_skipped(kind: &str, total: usize, kept: usize) {
    if kept < total {
        debug!(kind, skipped = total - kept, total, "skipped loosely-typed elements");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mixed_payload;
    use serde_json::json;

    #[test]
    fn integers_keep_only_i64_representable_elements() {
        assert_eq!(integers(&mixed_payload()), vec![1, 2, 4]);
    }

    #[test]
    fn integral_floats_are_not_integers() {
        assert_eq!(integers(&[json!(2.0)]), Vec::<i64>::new());
    }

    #[test]
    fn out_of_range_integers_are_skipped() {
        assert_eq!(integers(&[json!(u64::MAX), json!(-1)]), vec![-1]);
    }

    #[test]
    fn scores_widen_integers_and_keep_floats() {
        assert_eq!(scores(&[json!(1), json!(2.5), json!("x")]), vec![1.0, 2.5]);
    }

    #[test]
    fn all_invalid_input_yields_empty_vector() {
        let values = vec![json!("a"), json!(true), Value::Null];
        assert_eq!(integers(&values), Vec::<i64>::new());
        assert_eq!(scores(&values), Vec::<f64>::new());
    }
}
