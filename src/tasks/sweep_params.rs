use serde::{Deserialize, Serialize};

use crate::error::PiError;

/// Trial counts swept by the statistical experiment.
pub const DEFAULT_TRIAL_COUNTS: [u64; 7] = [1, 10, 100, 1_000, 10_000, 50_000, 100_000];

/// Darts thrown by the scatter demonstration.
pub const SCATTER_POINTS: usize = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepParams {
    /// Trial counts, in the order they are run and reported.
    pub trial_counts: Vec<u64>,

    /// Points drawn by the scatter visualization.
    pub scatter_points: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            trial_counts: DEFAULT_TRIAL_COUNTS.to_vec(),
            scatter_points: SCATTER_POINTS,
        }
    }
}

impl SweepParams {
    pub fn validate(&self) -> Result<(), PiError> {
        if self.trial_counts.is_empty() {
            return Err(PiError::InvalidParameter(
                "trial_counts must not be empty".into(),
            ));
        }
        if let Some(&bad) = self.trial_counts.iter().find(|&&n| n == 0) {
            return Err(PiError::InvalidTrialCount(bad));
        }
        if self.scatter_points == 0 {
            return Err(PiError::InvalidParameter(
                "scatter_points must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Darts thrown by one pass over every trial count.
    pub fn total_trials(&self) -> u64 {
        self.trial_counts.iter().sum()
    }
}
