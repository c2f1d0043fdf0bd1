//! Test-only fixture builders for loosely-typed payloads and score sets.

use serde_json::{Value, json};

/// Loosely-typed payload mixing integers with everything else a deserialized
/// document can carry.
///
/// The `i64`-representable elements are `1`, `2`, `4`, in that order.
pub fn mixed_payload() -> Vec<Value> {
    vec![
        json!(1),
        json!("two"),
        json!(2),
        json!(3.5),
        json!(true),
        json!(4),
        Value::Null,
        json!([5]),
        json!(2.0),
    ]
}

/// Score set with one score per represented grade (no `C`).
pub fn sample_scores() -> Vec<f64> {
    vec![95.0, 82.0, 67.0, 50.0]
}
