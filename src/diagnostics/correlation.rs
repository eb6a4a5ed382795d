//! Pairwise Pearson correlation over feature-mention columns

use crate::engine::AnalysisSnapshot;
use crate::CORRELATION_THRESHOLD;

/// Pearson correlation coefficient of two equally long samples.
///
/// Returns `None` when either sample has zero variance (a constant column
/// carries no correlation signal) or when fewer than two points exist.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Unordered feature pairs whose mention columns correlate above the
/// reporting threshold within the given rows, strongest first.
///
/// Pair names are ordered lexicographically inside each pair so the same
/// pair never appears twice.
pub fn correlated_pairs(
    snapshot: &AnalysisSnapshot,
    rows: &[usize],
) -> Vec<(String, String, f64)> {
    let feature_count = snapshot.compiled.len();
    if feature_count < 2 || rows.len() < 2 {
        return Vec::new();
    }

    // Materialize mention columns for the scoped rows once
    let columns: Vec<Vec<f64>> = (0..feature_count)
        .map(|fi| {
            rows.iter()
                .map(|&row| if snapshot.reviews[row].mentions[fi] { 1.0 } else { 0.0 })
                .collect()
        })
        .collect();

    let mut pairs = Vec::new();
    for i in 0..feature_count {
        for j in (i + 1)..feature_count {
            if let Some(r) = pearson(&columns[i], &columns[j]) {
                if r > CORRELATION_THRESHOLD {
                    let mut a = snapshot.ruleset.features[i].name.clone();
                    let mut b = snapshot.ruleset.features[j].name.clone();
                    if a > b {
                        std::mem::swap(&mut a, &mut b);
                    }
                    pairs.push((a, b, r));
                }
            }
        }
    }

    pairs.sort_by(|left, right| right.2.total_cmp(&left.2));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_positive_correlation() {
        let x = vec![0.0, 1.0, 0.0, 1.0];
        let y = vec![0.0, 1.0, 0.0, 1.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let x = vec![0.0, 1.0, 0.0, 1.0];
        let y = vec![1.0, 0.0, 1.0, 0.0];
        let r = pearson(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_variance_yields_none() {
        let x = vec![1.0, 1.0, 1.0];
        let y = vec![0.0, 1.0, 0.0];
        assert!(pearson(&x, &y).is_none());
        assert!(pearson(&y, &x).is_none());
    }

    #[test]
    fn test_too_few_points() {
        assert!(pearson(&[1.0], &[1.0]).is_none());
        assert!(pearson(&[], &[]).is_none());
    }

    #[test]
    fn test_bounds() {
        let x = vec![0.0, 1.0, 1.0, 0.0, 1.0];
        let y = vec![0.0, 1.0, 0.0, 0.0, 1.0];
        let r = pearson(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }
}
