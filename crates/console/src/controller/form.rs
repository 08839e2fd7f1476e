use crate::controller::list::{ListController, ListSource, LoadOutcome};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};
use validator::Validate;

/// Create and update operations behind an inline form.
#[async_trait]
pub trait FormSource: Send + Sync {
    type Record: Send + Sync;
    type Draft: Validate + Default + Clone + std::fmt::Debug + Send + Sync;

    /// Record id and the draft prefilled from it.
    fn edit_draft(record: &Self::Record) -> (i32, Self::Draft);

    async fn create(&self, draft: &Self::Draft) -> Result<(), ServiceError>;

    async fn update(&self, id: i32, draft: &Self::Draft) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Closed,
    Create,
    Edit(i32),
}

#[derive(Debug)]
pub struct FormController<S: FormSource> {
    source: S,
    mode: FormMode,
    draft: S::Draft,
}

impl<S: FormSource> FormController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            mode: FormMode::Closed,
            draft: S::Draft::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn draft(&self) -> &S::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut S::Draft {
        &mut self.draft
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.draft = S::Draft::default();
    }

    pub fn open_edit(&mut self, record: &S::Record) {
        let (id, draft) = S::edit_draft(record);
        self.mode = FormMode::Edit(id);
        self.draft = draft;
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = S::Draft::default();
    }

    /// Validates the draft, saves it and reloads `list`. The form stays open on failure.
    pub async fn submit<L: ListSource>(
        &mut self,
        list: &mut ListController<L>,
    ) -> Result<LoadOutcome, ServiceError> {
        self.draft.validate()?;

        let saved = match self.mode {
            FormMode::Closed => {
                return Err(ServiceError::Internal("No form is open".to_string()));
            }
            FormMode::Create => self.source.create(&self.draft).await,
            FormMode::Edit(id) => self.source.update(id, &self.draft).await,
        };

        if let Err(e) = saved {
            error!("Error saving {:?}: {e}", self.mode);
            return Err(e);
        }

        info!("Saved {:?}", self.mode);
        self.cancel();
        Ok(list.load().await)
    }
}

/// Rejects strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("not_blank");
        error.message = Some("must not be empty".into());
        return Err(error);
    }
    Ok(())
}
