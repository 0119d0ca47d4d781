use disc_kernel::Point2d;

/// Reduce a polyline to `target` points by uniform index sampling.
///
/// Index `k` of the result is input index `⌊k·(n−1)/(target−1)⌋`, so the
/// first and last points are kept exactly. Inputs already at or below the
/// target are returned unchanged. Targets below two are raised to two.
pub fn simplify_profile(points: &[Point2d], target: usize) -> Vec<Point2d> {
    let n = points.len();
    let target = target.max(2);
    if n <= target {
        return points.to_vec();
    }
    (0..target)
        .map(|k| points[k * (n - 1) / (target - 1)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Point2d> {
        (0..n).map(|i| Point2d::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_keeps_endpoints() {
        let simplified = simplify_profile(&line(344), 12);
        assert_eq!(simplified.len(), 12);
        assert_eq!(simplified[0].x, 0.0);
        assert_eq!(simplified[11].x, 343.0);
    }

    #[test]
    fn test_truncating_index_pattern() {
        let xs: Vec<f64> = simplify_profile(&line(344), 12).iter().map(|p| p.x).collect();
        assert_eq!(
            xs,
            [0.0, 31.0, 62.0, 93.0, 124.0, 155.0, 187.0, 218.0, 249.0, 280.0, 311.0, 343.0]
        );
    }

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(simplify_profile(&line(5), 12), line(5));
        assert_eq!(simplify_profile(&line(12), 12), line(12));
    }

    #[test]
    fn test_tiny_target_raised() {
        let simplified = simplify_profile(&line(10), 0);
        assert_eq!(simplified, vec![Point2d::new(0.0, 0.0), Point2d::new(9.0, 0.0)]);
    }
}
