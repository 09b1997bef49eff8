use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PiError {
    #[error("invalid trial count: {0} (must be at least 1)")]
    InvalidTrialCount(u64),

    #[error("cannot summarize an empty sequence of estimates")]
    EmptySequence,

    #[error("need at least {needed} estimates, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
