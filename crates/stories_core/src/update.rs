use stories_logging::{stories_debug, stories_info, stories_warn};

use crate::stories::StoriesAction;
use crate::{AppState, Effect, FetchTrigger, FilterMode, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => match state.mode().filter {
            FilterMode::Local => {
                let request_id = state.begin_fetch();
                vec![Effect::FetchStories {
                    request_id,
                    query: None,
                }]
            }
            FilterMode::Remote => {
                let term = state.search_term().to_string();
                commit_and_fetch(&mut state, term)
            }
        },
        Msg::SearchInputChanged(text) => {
            state.set_search_term(text.clone());
            let mut effects = vec![Effect::PersistSearchTerm(text.clone())];
            let mode = state.mode();
            if mode.filter == FilterMode::Remote && mode.trigger == FetchTrigger::OnChange {
                effects.extend(commit_and_fetch(&mut state, text));
            }
            effects
        }
        Msg::SearchSubmitted => {
            let mode = state.mode();
            if mode.filter == FilterMode::Remote && mode.trigger == FetchTrigger::OnSubmit {
                let term = state.search_term().to_string();
                commit_and_fetch(&mut state, term)
            } else {
                Vec::new()
            }
        }
        Msg::StoriesFetched {
            request_id,
            stories,
        } => {
            if state.is_stale(request_id) {
                stories_debug!("Discarding stale result of request {}", request_id);
            } else {
                stories_info!("Request {} returned {} stories", request_id, stories.len());
                state.apply(StoriesAction::FetchSuccess(stories));
            }
            Vec::new()
        }
        Msg::StoriesFetchFailed { request_id, reason } => {
            if state.is_stale(request_id) {
                stories_debug!("Discarding stale failure of request {}", request_id);
            } else {
                stories_warn!("Request {} failed: {}", request_id, reason);
                state.apply(StoriesAction::FetchFailure);
            }
            Vec::new()
        }
        Msg::StoryDismissed(id) => {
            state.apply(StoriesAction::RemoveStory(id));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Makes `term` the effective term and fetches for it, unless it already was
/// the effective term or is empty.
fn commit_and_fetch(state: &mut AppState, term: String) -> Vec<Effect> {
    if !state.commit_term(term.clone()) || term.is_empty() {
        return Vec::new();
    }
    let request_id = state.begin_fetch();
    vec![Effect::FetchStories {
        request_id,
        query: Some(term),
    }]
}
