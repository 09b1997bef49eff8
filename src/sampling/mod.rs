mod estimator;
mod point;
mod point_source;
mod uniform_square;

pub use estimator::{REPETITIONS, estimate, repeated_estimates};
pub use point::{CIRCLE_CENTER, CIRCLE_RADIUS, SQUARE_SIDE, SamplePoint};
pub use point_source::PointSource;
pub use uniform_square::UniformSquare;
