use std::io::Write;

use anyhow::Result;
use inquire::Text;

use crate::ui::cli::drivers::PromptDriver;

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        let mut q = Text::new(title).with_initial_value(default);
        if !help.is_empty() {
            q = q.with_help_message(help);
        }
        Ok(q.prompt()?)
    }

    fn say(&self, message: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{message}")?;
        out.flush()?;
        Ok(())
    }
}
