//! Target-class profiling of numeric features

use serde::Serialize;

use super::describe::{describe, DescribeStats};

/// Distribution statistics of a feature within one target class
#[derive(Debug, Clone, Serialize)]
pub struct ClassStats {
    /// Target class (0 or 1)
    pub class: i32,
    #[serde(flatten)]
    pub stats: DescribeStats,
}

/// Per-class distribution statistics of a feature, ordered by class.
///
/// Rows where either side is missing are excluded pairwise; a class with no
/// remaining values is omitted from the result.
pub fn class_stats(feature: &[Option<f64>], target: &[Option<i32>]) -> Vec<ClassStats> {
    let mut by_class: [Vec<Option<f64>>; 2] = [Vec::new(), Vec::new()];
    for (f, t) in feature.iter().zip(target.iter()) {
        if let (Some(f), Some(t)) = (f, t) {
            if f.is_finite() && (0..=1).contains(t) {
                by_class[*t as usize].push(Some(*f));
            }
        }
    }

    by_class
        .iter()
        .enumerate()
        .filter_map(|(class, values)| {
            describe(values).map(|stats| ClassStats {
                class: class as i32,
                stats,
            })
        })
        .collect()
}

/// Per-class mean of the feature, for the profiling bar chart.
pub fn class_means(feature: &[Option<f64>], target: &[Option<i32>]) -> Vec<(i32, f64)> {
    class_stats(feature, target)
        .iter()
        .map(|s| (s.class, s.stats.mean))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_stats_splits_by_target() {
        let feature = vec![Some(1.0), Some(2.0), Some(3.0), Some(10.0), Some(20.0), Some(30.0)];
        let target = vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1)];

        let stats = class_stats(&feature, &target);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].class, 0);
        assert_eq!(stats[1].class, 1);
        assert!((stats[0].stats.mean - 2.0).abs() < 1e-12);
        assert!((stats[1].stats.mean - 20.0).abs() < 1e-12);
        assert_eq!(stats[0].stats.count, 3);
    }

    #[test]
    fn test_class_stats_single_class() {
        let feature = vec![Some(1.0), Some(2.0)];
        let target = vec![Some(1), Some(1)];

        let stats = class_stats(&feature, &target);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].class, 1);
    }

    #[test]
    fn test_class_stats_pairwise_exclusion() {
        let feature = vec![Some(1.0), None, Some(3.0)];
        let target = vec![Some(0), Some(0), None];

        let stats = class_stats(&feature, &target);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].stats.count, 1);
        assert_eq!(stats[0].stats.min, 1.0);
    }

    #[test]
    fn test_class_means() {
        let feature = vec![Some(2.0), Some(4.0), Some(10.0), Some(30.0)];
        let target = vec![Some(0), Some(0), Some(1), Some(1)];

        let means = class_means(&feature, &target);

        assert_eq!(means.len(), 2);
        assert_eq!(means[0].0, 0);
        assert!((means[0].1 - 3.0).abs() < 1e-12);
        assert_eq!(means[1].0, 1);
        assert!((means[1].1 - 20.0).abs() < 1e-12);
    }
}
