//! Hacker stories engine: story sources, fetch execution and file persistence.
mod engine;
mod fetch;
mod persist;
mod seed;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{FetchSettings, HnSearchFetcher, StoryFetcher, DEFAULT_SEARCH_ENDPOINT};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use seed::{seed_stories, SeedFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId, Story};
