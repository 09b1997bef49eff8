use anyhow::Result;

/// Console capability used by the interactive session.
///
/// Everything the program asks or tells the user goes through here, so the
/// session logic can be driven by a script in tests.
pub trait PromptDriver {
    /// Asks for one line of free text and returns it verbatim.
    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String>;

    /// Shows a one-line message that needs no answer.
    fn say(&self, message: &str) -> Result<()>;
}
