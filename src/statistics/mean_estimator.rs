use crate::statistics::Estimator;

/// Running mean over every estimate fed to it.
///
/// Updated incrementally (`mean += (v - mean) / len`), so a run of identical
/// values keeps the mean exactly equal to that value.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEstimator {
    len: usize,
    mean: f64,
}

impl Estimator for MeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        self.len += 1;
        self.mean += (v - self.mean) / self.len as f64;
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.mean
        } else {
            f64::NAN
        }
    }
}

impl Extend<f64> for MeanEstimator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}
