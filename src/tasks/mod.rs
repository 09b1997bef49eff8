mod pi_sweep;
mod sweep_params;
mod sweep_report;

pub use pi_sweep::PiSweep;
pub use sweep_params::{DEFAULT_TRIAL_COUNTS, SCATTER_POINTS, SweepParams};
pub use sweep_report::{SweepReport, SweepRow};
