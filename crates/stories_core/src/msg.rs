#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The application finished starting up.
    Started,
    /// User edited the search input.
    SearchInputChanged(String),
    /// User explicitly submitted the current search input.
    SearchSubmitted,
    /// A fetch resolved with stories.
    StoriesFetched {
        request_id: crate::RequestId,
        stories: Vec<crate::StoryRecord>,
    },
    /// A fetch failed; the reason is for logging only.
    StoriesFetchFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User dismissed a story.
    StoryDismissed(crate::StoryId),
    /// Fallback for placeholder wiring.
    NoOp,
}
