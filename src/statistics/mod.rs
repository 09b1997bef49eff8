mod estimator;
mod mean_estimator;
mod summary;

pub use estimator::Estimator;
pub use mean_estimator::MeanEstimator;
pub use summary::{Summary, mean, standard_deviation};
