//! Scalar statistics used by the engine.
#![forbid(unsafe_code)]

/// Pearson correlation coefficient of paired samples.
///
/// Returns `0.0` with fewer than two points or when either series has no
/// variance.
///
/// # Examples
/// ```
/// use placestats_metrics::pearson;
///
/// let r = pearson(&[(20.0, 10.0), (30.0, 20.0), (40.0, 30.0)]);
/// assert!((r - 1.0).abs() < 1e-9);
/// assert_eq!(pearson(&[(20.0, 10.0)]), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "correlation is computed over floating-point samples"
)]
#[must_use]
pub fn pearson(points: &[(f64, f64)]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut covariance = 0.0;
    let mut spread_x = 0.0;
    let mut spread_y = 0.0;
    for &(x, y) in points {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        spread_x += dx * dx;
        spread_y += dy * dy;
    }

    if spread_x <= 0.0 || spread_y <= 0.0 {
        return 0.0;
    }
    covariance / (spread_x.sqrt() * spread_y.sqrt())
}

/// Base-2 Shannon entropy of a frequency distribution.
///
/// Zero counts are ignored. Returns `0.0` when the distribution is empty.
///
/// # Examples
/// ```
/// use placestats_metrics::shannon_entropy;
///
/// assert_eq!(shannon_entropy([7]), 0.0);
/// assert_eq!(shannon_entropy([3, 3]), 1.0);
/// assert_eq!(shannon_entropy([2, 2, 2, 2]), 2.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "entropy weighs log-probabilities derived from counts"
)]
#[must_use]
pub fn shannon_entropy<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u64>,
{
    let counts: Vec<u64> = counts.into_iter().filter(|&count| count > 0).collect();
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    // p * log2(1 / p) keeps every term non-negative, so a single bucket
    // yields +0.0.
    counts.iter().fold(0.0, |entropy, &count| {
        let count = count as f64;
        entropy + (count / total) * (total / count).log2()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn perfectly_correlated_series() {
        let r = pearson(&[(20.0, 10.0), (30.0, 20.0), (40.0, 30.0)]);
        assert!((r - 1.0).abs() < 1e-9, "expected 1.0, got {r}");
    }

    #[rstest]
    fn perfectly_anti_correlated_series() {
        let r = pearson(&[(20.0, 90.0), (30.0, 60.0), (40.0, 30.0)]);
        assert!((r + 1.0).abs() < 1e-9, "expected -1.0, got {r}");
    }

    #[rstest]
    #[case(&[(25.0, 10.0), (25.0, 40.0), (25.0, 70.0)])]
    #[case(&[(20.0, 15.0), (30.0, 15.0), (40.0, 15.0)])]
    #[case(&[])]
    #[case(&[(30.0, 10.0)])]
    fn degenerate_series_give_zero(#[case] points: &[(f64, f64)]) {
        assert_eq!(pearson(points), 0.0);
    }

    #[rstest]
    #[case(vec![5], 0.0)]
    #[case(vec![4, 4], 1.0)]
    #[case(vec![1, 1, 1, 1], 2.0)]
    #[case(vec![], 0.0)]
    #[case(vec![0, 0], 0.0)]
    #[case(vec![3, 0, 3], 1.0)]
    fn entropy_of_distributions(#[case] counts: Vec<u64>, #[case] expected: f64) {
        let entropy = shannon_entropy(counts);
        assert!(
            (entropy - expected).abs() < 1e-12,
            "expected {expected}, got {entropy}"
        );
    }

    #[rstest]
    fn single_bucket_entropy_is_positive_zero() {
        let entropy = shannon_entropy([9]);
        assert!(entropy == 0.0 && entropy.is_sign_positive());
    }

    #[rstest]
    fn skewed_distribution_is_below_uniform() {
        let skewed = shannon_entropy([6, 1, 1]);
        let uniform = shannon_entropy([2, 2, 2]);
        assert!(skewed > 0.0 && skewed < uniform);
    }
}
