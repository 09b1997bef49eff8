use std::time::Instant;

use tracing::{debug, info};

use crate::error::PiError;
use crate::sampling::{PointSource, repeated_estimates};
use crate::statistics::Summary;
use crate::tasks::{SweepParams, SweepReport, SweepRow};

/// Runs the repeated-sampling experiment once per configured trial count and
/// aggregates each estimate sequence into a [`SweepRow`].
pub struct PiSweep<S: PointSource> {
    source: S,
    params: SweepParams,
    report: SweepReport,
}

impl<S: PointSource> PiSweep<S> {
    pub fn new(source: S, params: SweepParams) -> Result<Self, PiError> {
        params.validate()?;
        Ok(Self {
            source,
            params,
            report: SweepReport::default(),
        })
    }

    pub fn params(&self) -> &SweepParams {
        &self.params
    }

    pub fn run(&mut self) -> Result<(), PiError> {
        let start = Instant::now();
        self.report = SweepReport::default();

        for &trials in &self.params.trial_counts {
            let step = Instant::now();
            let estimates = repeated_estimates(&mut self.source, trials)?;
            let summary = Summary::of(&estimates)?;
            info!(
                trials,
                mean = summary.mean,
                std_dev = summary.std_dev,
                elapsed_ms = step.elapsed().as_millis() as u64,
                "trial count done"
            );
            self.report.push(SweepRow { trials, summary });
        }

        debug!(
            seconds = start.elapsed().as_secs_f64(),
            params = %serde_json::to_string(&self.params).unwrap_or_default(),
            report = %serde_json::to_string(&self.report).unwrap_or_default(),
            "sweep finished"
        );
        Ok(())
    }

    pub fn report(&self) -> &SweepReport {
        &self.report
    }

    pub fn into_report(self) -> SweepReport {
        self.report
    }
}
