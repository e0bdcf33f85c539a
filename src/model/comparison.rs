use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub total: usize,
    pub differing: usize,
    pub matching: usize,
    /// Percentage of aligned positions whose lines are identical.
    pub accuracy: f64,
}

impl ComparisonResult {
    /// Derives `matching` and `accuracy` from the two counts.
    ///
    /// An empty comparison reports zero matches and 0.0 accuracy instead of
    /// dividing by zero.
    pub fn from_counts(total: usize, differing: usize) -> Self {
        debug_assert!(differing <= total);
        if total == 0 {
            return Self {
                total: 0,
                differing: 0,
                matching: 0,
                accuracy: 0.0,
            };
        }

        let matching = total - differing;
        Self {
            total,
            differing,
            matching,
            accuracy: matching as f64 / total as f64 * 100.0,
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/comparison_tests.rs"]
mod tests;
