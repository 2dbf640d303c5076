//! Hacker stories core: pure state machine, persisted preferences and
//! view-model helpers.
mod effect;
mod msg;
mod preferences;
mod state;
mod stories;
mod story;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use preferences::{KeyValueStore, MemoryStore, PreferenceStore, StoreError, SEARCH_KEY};
pub use state::{AppState, FetchTrigger, FilterMode, RequestId, SearchMode, StaleResults};
pub use stories::{reduce, search_stories, StoriesAction, StoriesState, StoriesStatus};
pub use story::{StoryId, StoryRecord};
pub use update::update;
pub use view_model::{AppViewModel, StoryRowView};
