use crate::sampling::SamplePoint;

/// Supplier of sample points on the `[0, 2] × [0, 2]` board.
///
/// Every draw the estimator makes goes through this trait, so callers decide
/// where the randomness comes from: an OS-seeded generator in the binary, a
/// seeded one for reproducible runs, or a fixed script in tests.
pub trait PointSource {
    /// Draws the next point. Implementations must stay within the board.
    fn next_point(&mut self) -> SamplePoint;
}

impl<P: PointSource + ?Sized> PointSource for &mut P {
    #[inline]
    fn next_point(&mut self) -> SamplePoint {
        (**self).next_point()
    }
}
