use async_trait::async_trait;
use shared::{
    abstract_trait::ConfirmPromptTrait,
    domain::{
        requests::{DEFAULT_PAGE_SIZE, PaginationParams, SortOrder},
        responses::ApiResponsePagination,
    },
    errors::ClientError,
};
use std::fmt::Debug;
use tracing::{error, info, warn};

/// Paged collection behind a list view.
#[async_trait]
pub trait ListSource: Send + Sync {
    type Item: Clone + Debug + Send + Sync;
    type Filters: Clone + Debug + Default + PartialEq + Send + Sync;

    /// Noun with article used in confirmations, e.g. `la categoría`.
    fn entity(&self) -> &'static str;

    async fn fetch(
        &self,
        pagination: &PaginationParams,
        filters: &Self::Filters,
    ) -> Result<ApiResponsePagination<Self::Item>, ClientError>;

    async fn remove(&self, id: i32) -> Result<(), ClientError>;

    fn confirm_message(&self, label: &str) -> String {
        format!("¿Está seguro de eliminar {} \"{label}\"?", self.entity())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Snapshot of the request a load was started with.
#[derive(Debug, Clone)]
pub struct LoadTicket<F> {
    seq: u64,
    pub pagination: PaginationParams,
    pub filters: F,
}

impl<F> LoadTicket<F> {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    Failed(ClientError),
    /// A newer load was started after this one; its result was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Cancelled,
    Deleted,
    Failed(ClientError),
}

pub struct ListController<S: ListSource> {
    source: S,
    items: Vec<S::Item>,
    current_page: u32,
    page_size: u32,
    total_pages: u32,
    filters: S::Filters,
    sort: Option<String>,
    order: Option<SortOrder>,
    state: LoadState,
    latest_seq: u64,
}

impl<S: ListSource> Debug for ListController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListController")
            .field("entity", &self.source.entity())
            .field("items", &self.items.len())
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("filters", &self.filters)
            .field("state", &self.state)
            .finish()
    }
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            items: Vec::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            filters: S::Filters::default(),
            sort: None,
            order: None,
            state: LoadState::Idle,
            latest_seq: 0,
        }
    }

    /// Presets filters and sort without loading.
    pub fn with_query(
        mut self,
        filters: S::Filters,
        sort: Option<String>,
        order: Option<SortOrder>,
    ) -> Self {
        self.filters = filters;
        self.sort = sort.filter(|s| !s.is_empty());
        self.order = order;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &S::Filters {
        &self.filters
    }

    /// Mutable filter bag. Call [`Self::on_filter_change`] afterwards to reload.
    pub fn filters_mut(&mut self) -> &mut S::Filters {
        &mut self.filters
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.current_page,
            limit: self.page_size,
            sort: self.sort.clone(),
            order: self.order,
        }
    }

    /// Marks the controller as loading and hands out the ticket the result must be
    /// reported with. Every call invalidates earlier tickets.
    pub fn begin_load(&mut self) -> LoadTicket<S::Filters> {
        self.latest_seq += 1;
        self.state = LoadState::Loading;

        LoadTicket {
            seq: self.latest_seq,
            pagination: self.pagination(),
            filters: self.filters.clone(),
        }
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket<S::Filters>,
        result: Result<ApiResponsePagination<S::Item>, ClientError>,
    ) -> LoadOutcome {
        if ticket.seq != self.latest_seq {
            warn!(
                "Dropping stale {} page {} (load #{}, latest #{})",
                self.source.entity(),
                ticket.pagination.page,
                ticket.seq,
                self.latest_seq
            );
            return LoadOutcome::Stale;
        }

        self.state = LoadState::Idle;

        match result {
            Ok(page) => {
                let count = page.data.len();
                self.items = page.data;
                self.total_pages = page.total_pages;
                info!(
                    "Loaded {count} of {} (page {}/{})",
                    self.source.entity(),
                    self.current_page,
                    self.total_pages
                );
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                error!("Error loading {}: {e}", self.source.entity());
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Fetches the current page with the current filters, replacing the items.
    pub async fn load(&mut self) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = self
            .source
            .fetch(&ticket.pagination, &ticket.filters)
            .await;
        self.finish_load(ticket, result)
    }

    pub async fn set_filters(&mut self, filters: S::Filters) -> LoadOutcome {
        self.filters = filters;
        self.on_filter_change().await
    }

    pub async fn update_filters<F>(&mut self, update: F) -> LoadOutcome
    where
        F: FnOnce(&mut S::Filters) + Send,
    {
        update(&mut self.filters);
        self.on_filter_change().await
    }

    pub async fn on_filter_change(&mut self) -> LoadOutcome {
        self.current_page = 1;
        self.load().await
    }

    pub async fn clear_filters(&mut self) -> LoadOutcome {
        self.filters = S::Filters::default();
        self.current_page = 1;
        self.load().await
    }

    pub async fn set_sort(&mut self, sort: Option<String>, order: Option<SortOrder>) -> LoadOutcome {
        self.sort = sort.filter(|s| !s.is_empty());
        self.order = order;
        self.current_page = 1;
        self.load().await
    }

    /// Moves to `page` and loads it. Returns `None` without loading when `page`
    /// lies outside `[1, total_pages]`.
    pub async fn go_to_page(&mut self, page: u32) -> Option<LoadOutcome> {
        if page < 1 || page > self.total_pages {
            return None;
        }

        self.current_page = page;
        Some(self.load().await)
    }

    /// Loads `page` directly, before `total_pages` is known. The caller checks the
    /// reply against [`Self::total_pages`].
    pub async fn open_page(&mut self, page: u32) -> LoadOutcome {
        self.current_page = page.max(1);
        self.load().await
    }

    pub async fn next_page(&mut self) -> Option<LoadOutcome> {
        self.go_to_page(self.current_page.saturating_add(1)).await
    }

    pub async fn previous_page(&mut self) -> Option<LoadOutcome> {
        self.go_to_page(self.current_page.saturating_sub(1)).await
    }

    /// Asks for confirmation, deletes and reloads the current page.
    pub async fn delete(
        &mut self,
        id: i32,
        label: &str,
        prompt: &(dyn ConfirmPromptTrait + Send + Sync),
    ) -> DeleteOutcome {
        if !prompt.confirm(&self.source.confirm_message(label)) {
            info!("Deletion of {} {id} cancelled", self.source.entity());
            return DeleteOutcome::Cancelled;
        }

        match self.source.remove(id).await {
            Ok(()) => {
                info!("Deleted {} {id}", self.source.entity());
                self.load().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("Error deleting {} {id}: {e}", self.source.entity());
                DeleteOutcome::Failed(e)
            }
        }
    }
}
