//! The story collection state machine.
//!
//! Every transition is a pure function of the previous state and one
//! [`StoriesAction`]. The loading and error flags are never both set after a
//! transition; [`reduce`] asserts this in debug builds.

use crate::{StoryId, StoryRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    /// A fetch was issued.
    FetchInit,
    /// A fetch resolved; the payload replaces the collection.
    FetchSuccess(Vec<StoryRecord>),
    /// A fetch failed; the collection is kept as is.
    FetchFailure,
    /// The user dismissed a story.
    RemoveStory(StoryId),
}

/// Mode derived from the `(is_loading, is_error)` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoriesStatus {
    #[default]
    Idle,
    Fetching,
    Errored,
    Loaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    data: Vec<StoryRecord>,
    is_loading: bool,
    is_error: bool,
    loaded: bool,
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[StoryRecord] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn status(&self) -> StoriesStatus {
        if self.is_loading {
            StoriesStatus::Fetching
        } else if self.is_error {
            StoriesStatus::Errored
        } else if self.loaded {
            StoriesStatus::Loaded
        } else {
            StoriesStatus::Idle
        }
    }
}

/// Applies one action to the story collection.
pub fn reduce(mut state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInit => {
            state.is_loading = true;
            state.is_error = false;
        }
        StoriesAction::FetchSuccess(payload) => {
            state.is_loading = false;
            state.is_error = false;
            state.loaded = true;
            state.data = payload;
        }
        StoriesAction::FetchFailure => {
            state.is_loading = false;
            state.is_error = true;
        }
        StoriesAction::RemoveStory(id) => {
            state.data.retain(|story| story.object_id != id);
        }
    }

    debug_assert!(
        !(state.is_loading && state.is_error),
        "stories state is both loading and errored"
    );
    state
}

/// Stories whose title contains `term`, ignoring case. An empty term keeps
/// everything. The result borrows from `stories` and keeps its order.
pub fn search_stories<'a>(stories: &'a [StoryRecord], term: &str) -> Vec<&'a StoryRecord> {
    let needle = term.to_lowercase();
    stories
        .iter()
        .filter(|story| story.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: u64, title: &str) -> StoryRecord {
        StoryRecord {
            object_id: StoryId::from(id),
            title: title.to_string(),
            url: format!("https://{}.example.com/", title.to_lowercase()),
            author: "someone".to_string(),
            num_comments: 1,
            points: 2,
        }
    }

    #[test]
    fn new_state_is_idle_and_empty() {
        let state = StoriesState::new();
        assert_eq!(state.status(), StoriesStatus::Idle);
        assert!(state.data().is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_error());
    }

    #[test]
    fn fetch_init_clears_error_and_keeps_data() {
        let state = reduce(StoriesState::new(), StoriesAction::FetchSuccess(vec![story(0, "React")]));
        let state = reduce(state, StoriesAction::FetchFailure);
        assert_eq!(state.status(), StoriesStatus::Errored);

        let state = reduce(state, StoriesAction::FetchInit);
        assert!(state.is_loading());
        assert!(!state.is_error());
        assert_eq!(state.data(), &[story(0, "React")]);
    }

    #[test]
    fn status_follows_flags() {
        let state = reduce(StoriesState::new(), StoriesAction::FetchInit);
        assert_eq!(state.status(), StoriesStatus::Fetching);
        let state = reduce(state, StoriesAction::FetchSuccess(Vec::new()));
        assert_eq!(state.status(), StoriesStatus::Loaded);
        let state = reduce(state, StoriesAction::FetchFailure);
        assert_eq!(state.status(), StoriesStatus::Errored);
    }

    #[test]
    fn search_is_case_insensitive() {
        let stories = vec![story(0, "React"), story(1, "Redux"), story(2, "Vue")];
        let titles = |term: &str| {
            search_stories(&stories, term)
                .into_iter()
                .map(|s| s.title.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(titles("re"), vec!["React", "Redux"]);
        assert_eq!(titles("REDUX"), vec!["Redux"]);
        assert_eq!(titles(""), vec!["React", "Redux", "Vue"]);
        assert!(titles("svelte").is_empty());
    }
}
