//! Letter-grade classification for numeric scores.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Letter grade on the standard 100-point scale.
///
/// Ordered best-first so `BTreeMap` iteration starts at `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Classify a score: A >= 90, B >= 80, C >= 70, D >= 60, F below.
    ///
    /// Scores above 100 still grade `A`; negatives grade `F`.
    pub fn for_score(score: f64) -> Grade {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

/// Bucket scores per letter grade, keeping input order inside each bucket.
///
/// Grades with no scores are absent from the map.
pub fn group_by_grade(scores: &[f64]) -> BTreeMap<Grade, Vec<f64>> {
    let mut groups: BTreeMap<Grade, Vec<f64>> = BTreeMap::new();
    for &score in scores {
        groups
            .entry(Grade::for_score(score))
            .or_default()
            .push(score);
    }
    groups
}
