use std::sync::Arc;

pub type DynConfirmPrompt = Arc<dyn ConfirmPromptTrait + Send + Sync>;

pub trait ConfirmPromptTrait {
    fn confirm(&self, message: &str) -> bool;
}
