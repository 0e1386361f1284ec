use serde::{Deserialize, Serialize};

/// Distribution of final scores over a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub min: f64,
    pub p10: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
    pub max: f64,
    pub mean: f64,
    /// population form, divides by n
    pub stddev: f64,
}

impl Statistics {
    /// All zeros for an empty sample.
    pub fn compute(scores: &[u32]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }

        let mut sorted = scores.to_vec();
        sorted.sort_unstable();

        let n = sorted.len() as f64;
        let mean = sorted.iter().map(|&s| s as f64).sum::<f64>() / n;
        let variance = sorted
            .iter()
            .map(|&s| {
                let d = s as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            min: sorted[0] as f64,
            p10: percentile(&sorted, 10.0),
            p25: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            p90: percentile(&sorted, 90.0),
            max: sorted[sorted.len() - 1] as f64,
            mean,
            stddev: variance.sqrt(),
        }
    }
}

/// Linear interpolation between the two ranks around `p/100 * (n-1)`.
fn percentile(sorted: &[u32], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only as f64,
        _ => {
            let idx = p / 100.0 * (sorted.len() - 1) as f64;
            let lo = idx as usize;
            let frac = idx - lo as f64;
            match sorted.get(lo + 1) {
                Some(&hi) => sorted[lo] as f64 * (1.0 - frac) + hi as f64 * frac,
                None => sorted[lo] as f64,
            }
        }
    }
}
