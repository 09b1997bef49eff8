use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::sampling::{PointSource, SQUARE_SIDE, SamplePoint};

/// Uniform points on the closed square `[0, 2] × [0, 2]`.
#[derive(Debug, Clone)]
pub struct UniformSquare<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformSquare<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    fn gen_coordinate(&mut self) -> f64 {
        self.rng.random_range(0.0..=SQUARE_SIDE)
    }
}

impl UniformSquare<StdRng> {
    /// Reproducible stream for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Fresh stream seeded from the operating system. Two calls never share
    /// a sequence.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> PointSource for UniformSquare<R> {
    #[inline]
    fn next_point(&mut self) -> SamplePoint {
        let x = self.gen_coordinate();
        let y = self.gen_coordinate();
        SamplePoint::new(x, y)
    }
}
