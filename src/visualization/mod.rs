mod scatter;
mod std_dev_curve;

pub use scatter::ScatterScene;
pub use std_dev_curve::StdDevCurve;

use strum_macros::{EnumIter, IntoStaticStr};

use crate::ui::cli::confirm::YesNoPrompt;

/// The optional plots offered after the report, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Visualization {
    StdDevCurve,
    PiScatter,
}

impl Visualization {
    pub fn prompt(self) -> YesNoPrompt {
        match self {
            Visualization::StdDevCurve => YesNoPrompt {
                question: "Would you like to see a graph of the standard deviations? [y/n] ",
                retry_question: "Would you like to see a graphic? [y/n] ",
                invalid_notice: None,
                decline_notice: None,
            },
            Visualization::PiScatter => YesNoPrompt {
                question: "Would you like to see a visual of pi? [y/n] ",
                retry_question: "Would you like to see a visual of pi? [y/n] ",
                invalid_notice: Some("Cannot understand input"),
                decline_notice: Some("See you later!"),
            },
        }
    }
}
