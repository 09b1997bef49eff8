use serde::Serialize;

use crate::statistics::Summary;

/// Statistics for one trial count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    pub trials: u64,
    #[serde(flatten)]
    pub summary: Summary,
}

impl SweepRow {
    #[inline]
    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.summary.std_dev
    }

    #[inline]
    pub fn log10_trials(&self) -> f64 {
        (self.trials as f64).log10()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SweepReport {
    rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn push(&mut self, row: SweepRow) {
        self.rows.push(row)
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(log10(trials), std_dev)` pairs in sweep order.
    pub fn std_dev_curve(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.log10_trials(), r.std_dev()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn row(trials: u64, mean: f64, std_dev: f64) -> SweepRow {
        SweepRow {
            trials,
            summary: Summary { mean, std_dev },
        }
    }

    #[test]
    fn default_is_empty() {
        let r = SweepReport::default();
        assert!(r.is_empty());
        assert!(r.std_dev_curve().is_empty());
    }

    #[test]
    fn curve_uses_log10_of_trials() {
        let mut r = SweepReport::default();
        r.push(row(1, 3.1, 1.6));
        r.push(row(1_000, 3.14, 0.05));
        r.push(row(50_000, 3.141, 0.007));

        let curve = r.std_dev_curve();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0], (0.0, 1.6));
        assert_relative_eq!(curve[1].0, 3.0);
        assert_relative_eq!(curve[2].0, 50_000f64.log10());
        assert_eq!(curve[2].1, 0.007);
    }

    #[test]
    fn serializes_flat_rows() {
        let mut r = SweepReport::default();
        r.push(row(10, 3.0, 0.5));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"rows":[{"trials":10,"mean":3.0,"std_dev":0.5}]}"#);
    }
}
