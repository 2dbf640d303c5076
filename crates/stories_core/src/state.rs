use crate::stories::{reduce, search_stories, StoriesAction, StoriesState};
use crate::view_model::{AppViewModel, StoryRowView};

pub type RequestId = u64;

/// Where the narrowing of stories by search term happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// The whole collection is fetched once and filtered for display.
    Local,
    /// The search term is sent with every fetch; results are shown as is.
    #[default]
    Remote,
}

/// What commits the search input as the effective term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchTrigger {
    /// Every input change.
    #[default]
    OnChange,
    /// Only an explicit submit.
    OnSubmit,
}

/// How completions of superseded fetches are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResults {
    /// Apply every completion in arrival order, even from older requests.
    #[default]
    Apply,
    /// Only the most recently issued request may change the collection.
    Discard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchMode {
    pub filter: FilterMode,
    pub trigger: FetchTrigger,
    pub stale_results: StaleResults,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    mode: SearchMode,
    search_term: String,
    committed_term: Option<String>,
    stories: StoriesState,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a session that starts from a previously persisted term.
    pub fn with_search_term(mode: SearchMode, search_term: impl Into<String>) -> Self {
        Self {
            mode,
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn committed_term(&self) -> Option<&str> {
        self.committed_term.as_deref()
    }

    pub fn stories(&self) -> &StoriesState {
        &self.stories
    }

    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    pub fn view(&self) -> AppViewModel {
        let rows = match self.mode.filter {
            FilterMode::Local => search_stories(self.stories.data(), &self.search_term),
            FilterMode::Remote => self.stories.data().iter().collect(),
        };
        AppViewModel {
            search_term: self.search_term.clone(),
            status: self.stories.status(),
            is_loading: self.stories.is_loading(),
            is_error: self.stories.is_error(),
            stories: rows.into_iter().map(StoryRowView::from).collect(),
            total_stories: self.stories.data().len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.mark_dirty();
        }
    }

    /// Records `term` as the effective term. Returns `false` when it was
    /// already the effective term.
    pub(crate) fn commit_term(&mut self, term: String) -> bool {
        if self.committed_term.as_deref() == Some(term.as_str()) {
            return false;
        }
        self.committed_term = Some(term);
        true
    }

    /// Moves the collection into `Fetching` and hands out a fresh request id.
    pub(crate) fn begin_fetch(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.latest_request = Some(request_id);
        self.apply(StoriesAction::FetchInit);
        request_id
    }

    pub(crate) fn is_stale(&self, request_id: RequestId) -> bool {
        self.mode.stale_results == StaleResults::Discard
            && self.latest_request != Some(request_id)
    }

    pub(crate) fn apply(&mut self, action: StoriesAction) {
        let next = reduce(self.stories.clone(), action);
        if next != self.stories {
            self.mark_dirty();
        }
        self.stories = next;
    }
}
