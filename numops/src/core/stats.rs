//! Summary statistics over score sequences.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Summary of a non-empty score sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    /// Arithmetic mean, rounded to two decimal places.
    pub average: f64,
    /// Middle value of the sorted scores; mean of the two middle values for
    /// even counts.
    pub median: f64,
    pub maximum: f64,
}

/// Compute average, median, and maximum for a score sequence.
///
/// Sorting happens on a private copy; the input is never reordered. Empty
/// input is an error.
pub fn score_statistics(scores: &[f64]) -> Result<ScoreStatistics> {
    if scores.is_empty() {
        bail!("scores must be non-empty");
    }

    let total: f64 = scores.iter().sum();
    let average = round_two(total / scores.len() as f64);

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let maximum = sorted[sorted.len() - 1];

    Ok(ScoreStatistics {
        average,
        median,
        maximum,
    })
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_for_odd_count() {
        let stats = score_statistics(&[90.0, 80.0, 70.0]).expect("stats");
        assert_eq!(
            stats,
            ScoreStatistics {
                average: 80.0,
                median: 80.0,
                maximum: 90.0
            }
        );
    }

    #[test]
    fn statistics_for_even_count() {
        let stats = score_statistics(&[100.0, 75.5]).expect("stats");
        assert_eq!(stats.average, 87.75);
        assert_eq!(stats.median, 87.75);
        assert_eq!(stats.maximum, 100.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let stats = score_statistics(&[1.0, 1.0, 2.0]).expect("stats");
        assert_eq!(stats.average, 1.33);
    }

    #[test]
    fn empty_scores_are_an_error() {
        let err = score_statistics(&[]).expect_err("empty must fail");
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn input_order_is_untouched() {
        let scores = vec![3.0, 1.0, 2.0];
        let before = scores.clone();
        score_statistics(&scores).expect("stats");
        assert_eq!(scores, before);
    }
}
