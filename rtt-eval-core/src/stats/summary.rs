use std::cmp::Ordering;

use super::{LatencySummary, StatsError};

impl LatencySummary {
    /// Summarize a sequence of duration samples in microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] when the sequence is empty.
    pub fn from_durations(durations: &[f64]) -> Result<Self, StatsError> {
        if durations.is_empty() {
            return Err(StatsError::InsufficientData);
        }

        let n = durations.len() as f64;
        let mean = durations.iter().sum::<f64>() / n;
        let variance = durations.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;

        let mut sorted = durations.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        Ok(Self {
            sample_count: durations.len(),
            std_dev: variance.sqrt(),
            mean,
            min: sorted[0],
            p50: quantile(&sorted, 0.50).ceil(),
            p90: quantile(&sorted, 0.90).ceil(),
            p99: quantile(&sorted, 0.99).ceil(),
            p99_9: quantile(&sorted, 0.999).ceil(),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear-interpolation (type 7) quantile over sorted samples.
fn quantile(sorted: &[f64], tau: f64) -> f64 {
    let index = tau * (sorted.len() as f64 - 1.0);
    let lower = index.floor() as usize;
    let upper = index.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = index - lower as f64;
        sorted[lower] + weight * (sorted[upper] - sorted[lower])
    }
}
