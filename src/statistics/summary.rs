use serde::Serialize;

use crate::error::PiError;
use crate::statistics::{Estimator, MeanEstimator};

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> Result<f64, PiError> {
    if values.is_empty() {
        return Err(PiError::EmptySequence);
    }
    let mut estimator = MeanEstimator::default();
    estimator.extend(values.iter().copied());
    Ok(estimator.estimation())
}

/// Sample standard deviation around a precomputed `mean`.
///
/// Uses Bessel's correction: the squared deviations are divided by `n - 1`,
/// so at least two values are required.
pub fn standard_deviation(values: &[f64], mean: f64) -> Result<f64, PiError> {
    match values.len() {
        0 => Err(PiError::EmptySequence),
        1 => Err(PiError::InsufficientSamples { needed: 2, got: 1 }),
        n => {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            Ok((squares / (n - 1) as f64).sqrt())
        }
    }
}

/// Mean and sample standard deviation of one estimate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Result<Self, PiError> {
        let mean = mean(values)?;
        let std_dev = standard_deviation(values, mean)?;
        Ok(Self { mean, std_dev })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_single_value_is_the_value() {
        assert_eq!(mean(&[3.25]).unwrap(), 3.25);
    }

    #[test]
    fn mean_of_known_values() {
        assert_relative_eq!(mean(&[0.0, 4.0, 4.0, 4.0]).unwrap(), 3.0);
    }

    #[test]
    fn identical_values_have_zero_spread() {
        for (v, n) in [(3.2, 600), (3.1, 7), (0.1, 3), (4.0 / 3.0, 600)] {
            let values = vec![v; n];
            let m = mean(&values).unwrap();
            assert_eq!(m, v);
            assert_eq!(
                standard_deviation(&values, m).unwrap(),
                0.0,
                "value {v} repeated {n} times"
            );
            assert_eq!(Summary::of(&values).unwrap().std_dev, 0.0);
        }
    }

    #[test]
    fn std_dev_uses_bessel_correction() {
        // squared deviations sum to 32, n - 1 = 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values).unwrap();
        assert_relative_eq!(m, 5.0, epsilon = 1e-12);
        assert_relative_eq!(
            standard_deviation(&values, m).unwrap(),
            (32.0f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(mean(&[]), Err(PiError::EmptySequence));
        assert_eq!(standard_deviation(&[], 0.0), Err(PiError::EmptySequence));
        assert_eq!(Summary::of(&[]), Err(PiError::EmptySequence));
    }

    #[test]
    fn single_value_has_no_sample_std_dev() {
        assert_eq!(
            standard_deviation(&[1.0], 1.0),
            Err(PiError::InsufficientSamples { needed: 2, got: 1 })
        );
    }

    #[test]
    fn summary_bundles_both() {
        let s = Summary::of(&[0.0, 4.0]).unwrap();
        assert_eq!(s.mean, 2.0);
        assert_relative_eq!(s.std_dev, 8f64.sqrt());
    }
}
