use dialoguer::{Confirm, theme::ColorfulTheme};
use shared::abstract_trait::ConfirmPromptTrait;
use tracing::error;

/// Interactive yes/no on the terminal. Any prompt failure counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl ConfirmPromptTrait for DialoguerPrompt {
    fn confirm(&self, message: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                error!("Confirmation prompt failed: {e}");
                false
            })
    }
}

/// Answers every prompt with a fixed value. Backs `--yes`.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmPromptTrait for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
