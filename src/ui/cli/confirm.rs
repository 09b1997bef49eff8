use anyhow::Result;
use tracing::debug;

use crate::ui::cli::drivers::PromptDriver;

const YES: &str = "y";
const NO: &str = "n";
const HELP: &str = "Type y or n, then press enter";

/// Texts of one yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YesNoPrompt {
    pub question: &'static str,
    /// Asked instead of `question` after an unrecognized answer.
    pub retry_question: &'static str,
    /// Shown after an unrecognized answer, before re-asking.
    pub invalid_notice: Option<&'static str>,
    /// Shown when the user answers no.
    pub decline_notice: Option<&'static str>,
}

/// Asks until the answer is exactly `y` or `n`.
///
/// Matching is case-sensitive and nothing is trimmed, so `Y` or `y ` are
/// re-asked like any other unrecognized input.
pub fn ask_yes_no<D: PromptDriver + ?Sized>(driver: &D, prompt: &YesNoPrompt) -> Result<bool> {
    let mut question = prompt.question;
    loop {
        let answer = driver.ask_string(question, HELP, "")?;
        match answer.as_str() {
            YES => return Ok(true),
            NO => {
                if let Some(notice) = prompt.decline_notice {
                    driver.say(notice)?;
                }
                return Ok(false);
            }
            other => {
                debug!(answer = other, question, "unrecognized answer");
                if let Some(notice) = prompt.invalid_notice {
                    driver.say(notice)?;
                }
                question = prompt.retry_question;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DriverEvent, ScriptedDriver};

    const PROMPT: YesNoPrompt = YesNoPrompt {
        question: "Continue? [y/n] ",
        retry_question: "Really continue? [y/n] ",
        invalid_notice: Some("Cannot understand input"),
        decline_notice: Some("Bye"),
    };

    #[test]
    fn yes_returns_true_without_notices() {
        let driver = ScriptedDriver::new(["y"]);
        assert!(ask_yes_no(&driver, &PROMPT).unwrap());
        assert_eq!(
            driver.events(),
            vec![DriverEvent::Asked(PROMPT.question.into())]
        );
    }

    #[test]
    fn no_prints_decline_notice() {
        let driver = ScriptedDriver::new(["n"]);
        assert!(!ask_yes_no(&driver, &PROMPT).unwrap());
        assert_eq!(
            driver.events(),
            vec![
                DriverEvent::Asked(PROMPT.question.into()),
                DriverEvent::Said("Bye".into()),
            ]
        );
    }

    #[test]
    fn unrecognized_answers_are_reasked() {
        let driver = ScriptedDriver::new(["Y", "yes", " y", "", "n"]);
        assert!(!ask_yes_no(&driver, &PROMPT).unwrap());

        let events = driver.events();
        let asked: Vec<&DriverEvent> = events
            .iter()
            .filter(|e| matches!(e, DriverEvent::Asked(_)))
            .collect();
        assert_eq!(asked.len(), 5);
        assert_eq!(*asked[0], DriverEvent::Asked(PROMPT.question.into()));
        for e in &asked[1..] {
            assert_eq!(**e, DriverEvent::Asked(PROMPT.retry_question.into()));
        }
        let notices = events
            .iter()
            .filter(|e| **e == DriverEvent::Said("Cannot understand input".into()))
            .count();
        assert_eq!(notices, 4);
    }

    #[test]
    fn silent_prompt_says_nothing() {
        let silent = YesNoPrompt {
            invalid_notice: None,
            decline_notice: None,
            ..PROMPT
        };
        let driver = ScriptedDriver::new(["maybe", "n"]);
        assert!(!ask_yes_no(&driver, &silent).unwrap());
        assert!(
            driver
                .events()
                .iter()
                .all(|e| matches!(e, DriverEvent::Asked(_)))
        );
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let driver = ScriptedDriver::new(["x"]);
        assert!(ask_yes_no(&driver, &PROMPT).is_err());
    }
}
