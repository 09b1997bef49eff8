use tracing::trace;

use crate::error::PiError;
use crate::sampling::PointSource;

/// Number of independent estimates collected per trial count.
pub const REPETITIONS: usize = 600;

/// Throws `trials` darts and returns `4 * hits / trials`.
///
/// The result always lies in `[0, 4]`. A trial count of zero is rejected
/// before any point is drawn.
pub fn estimate<S: PointSource + ?Sized>(source: &mut S, trials: u64) -> Result<f64, PiError> {
    if trials == 0 {
        return Err(PiError::InvalidTrialCount(trials));
    }

    let mut hits: u64 = 0;
    for _ in 0..trials {
        if source.next_point().is_inside() {
            hits += 1;
        }
    }

    let pi = 4.0 * hits as f64 / trials as f64;
    trace!(trials, hits, pi, "estimate");
    Ok(pi)
}

/// Runs [`estimate`] [`REPETITIONS`] times with the same trial count and keeps
/// the results in call order.
pub fn repeated_estimates<S: PointSource + ?Sized>(
    source: &mut S,
    trials: u64,
) -> Result<Vec<f64>, PiError> {
    if trials == 0 {
        return Err(PiError::InvalidTrialCount(trials));
    }

    let mut estimates = Vec::with_capacity(REPETITIONS);
    for _ in 0..REPETITIONS {
        estimates.push(estimate(source, trials)?);
    }
    Ok(estimates)
}
