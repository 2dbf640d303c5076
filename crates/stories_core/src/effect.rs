use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the search term back to the durable store.
    PersistSearchTerm(String),
    /// Ask the story source for stories. `query` is `None` when filtering
    /// happens locally and the whole collection is wanted.
    FetchStories {
        request_id: RequestId,
        query: Option<String>,
    },
}
