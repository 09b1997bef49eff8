/// Accumulates pi estimates one at a time and reports a single statistic
/// over everything seen so far.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Count of values added.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `NaN` until a value has been added.
    fn estimation(&self) -> f64;
}
