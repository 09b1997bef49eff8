mod console;

pub use console::{
    format_thousands, mean_line, std_dev_line, trial_label, write_banner, write_report,
};
