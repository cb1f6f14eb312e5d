use dialoguer::Confirm;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;

/// Asks a human to confirm a destructive action.  Implementations return `Ok(false)` when the
/// answer is "no"; anything that prevents getting an answer at all is an error.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait Prompter {
    fn confirm(&self, label: &str) -> anyhow::Result<bool>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    // dialoguer refuses to prompt when stdin isn't a terminal, so piped/CI invocations
    // come back as an error here instead of blocking
    fn confirm(&self, label: &str) -> anyhow::Result<bool> {
        Ok(Confirm::new().with_prompt(label).default(false).interact()?)
    }
}
