use serde::Serialize;

/// Summary statistics of a sample, each rounded to three decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Stats {
    /// Statistics of `values`; all zero for an empty sample.
    ///
    /// The median of an even-sized sample is the upper of the two middle
    /// values.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean: round3(mean),
            median: round3(sorted[sorted.len() / 2]),
            min: round3(sorted[0]),
            max: round3(sorted[sorted.len() - 1]),
            std_dev: round3(variance.sqrt()),
        }
    }
}

/// Round to three decimal places.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Arithmetic mean, 0 for an empty sample.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
