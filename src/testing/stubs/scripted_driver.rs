use std::cell::RefCell;
use std::collections::VecDeque;

use anyhow::{Result, anyhow};

use crate::ui::cli::drivers::PromptDriver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Asked(String),
    Said(String),
}

/// Answers prompts from a queue and records the conversation.
///
/// Asking after the queue is empty fails, like a closed stdin would.
pub struct ScriptedDriver {
    answers: RefCell<VecDeque<String>>,
    events: RefCell<Vec<DriverEvent>>,
}

impl ScriptedDriver {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<DriverEvent> {
        self.events.borrow().clone()
    }

    pub fn said(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                DriverEvent::Said(m) => Some(m.clone()),
                DriverEvent::Asked(_) => None,
            })
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_string(&self, title: &str, _help: &str, _default: &str) -> Result<String> {
        self.events
            .borrow_mut()
            .push(DriverEvent::Asked(title.to_string()));
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for {title:?}"))
    }

    fn say(&self, message: &str) -> Result<()> {
        self.events
            .borrow_mut()
            .push(DriverEvent::Said(message.to_string()));
        Ok(())
    }
}
