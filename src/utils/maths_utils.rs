use std::f64;

#[inline]
pub fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}

/// Central moments m2, m3, m4 (denominator n) around the mean.
fn central_moments(data: &[f64]) -> (f64, f64, f64) {
    let n = data.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let mean = data.iter().sum::<f64>() / n;

    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    for &x in data {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    (m2 / n, m3 / n, m4 / n)
}

/// Bias-adjusted sample skewness (same convention as pandas `Series.skew`).
/// Returns 0.0 for fewer than 3 points or a constant series.
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    if data.len() < 3 {
        return 0.0;
    }
    let (m2, m3, _) = central_moments(data);
    if m2 <= f64::EPSILON {
        return 0.0;
    }
    let g1 = m3 / m2.powf(1.5);
    g1 * (n * (n - 1.0)).sqrt() / (n - 2.0)
}

/// Bias-adjusted excess kurtosis (same convention as pandas `Series.kurtosis`).
/// Returns 0.0 for fewer than 4 points or a constant series.
pub fn excess_kurtosis(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    if data.len() < 4 {
        return 0.0;
    }
    let (m2, _, m4) = central_moments(data);
    if m2 <= f64::EPSILON {
        return 0.0;
    }
    let g2 = m4 / (m2 * m2) - 3.0;
    ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0))
}

/// Linear-interpolation percentile, `q` in [0, 1] (numpy `percentile` convention).
pub fn percentile(data: &[f64], q: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
}
